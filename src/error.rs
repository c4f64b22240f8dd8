use thiserror::Error;

use crate::domain::simulator::event::Time;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse simulation input JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write statistics: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Server count {requested} is outside the allowed range [{min}, {max}]")]
    InvalidServerCount { requested: usize, min: usize, max: usize },

    #[error("Invalid server limits: min {min}, max {max} (requires 1 <= min <= max)")]
    InvalidServerLimits { min: usize, max: usize },

    #[error("Arrivals cannot be simulated: last arrival at {last_arrival} plus the total service time overflows")]
    HorizonOverflow { last_arrival: Time },

    #[error("Invalid arrival (arrival time: {arrival_time}, service duration: {service_duration}): {reason}")]
    InvalidArrival { arrival_time: Time, service_duration: Time, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
