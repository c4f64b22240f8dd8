use std::ops::RangeInclusive;

use crate::api::simulation_dto::SimulationDto;
use crate::domain::simulator::event::{ArrivalSpec, Time, arrivals_from_pairs};
use crate::error::{Error, Result};

pub const MIN_SERVERS: usize = 1;
pub const MAX_SERVERS: usize = 5;

/// Arrivals of the reference scenario.
pub const SAMPLE_ARRIVALS: [(Time, Time); 4] = [(20, 6), (22, 4), (23, 2), (30, 3)];

/// Inclusive range of server counts a `RunController` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerLimits {
    min: usize,
    max: usize,
}

impl ServerLimits {
    /// # Errors
    /// `Error::InvalidServerLimits` unless `1 <= min <= max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min < 1 || min > max {
            return Err(Error::InvalidServerLimits { min, max });
        }

        Ok(ServerLimits { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn validate(&self, server_count: usize) -> Result<()> {
        if self.range().contains(&server_count) {
            Ok(())
        } else {
            Err(Error::InvalidServerCount { requested: server_count, min: self.min, max: self.max })
        }
    }
}

impl Default for ServerLimits {
    fn default() -> Self {
        ServerLimits { min: MIN_SERVERS, max: MAX_SERVERS }
    }
}

/// Everything needed to build a `RunController`.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub arrivals: Vec<ArrivalSpec>,
    pub limits: ServerLimits,
}

impl SimulationConfig {
    pub fn sample() -> Self {
        let arrivals = SAMPLE_ARRIVALS
            .iter()
            .map(|&(arrival_time, service_duration)| ArrivalSpec { arrival_time, service_duration })
            .collect();

        SimulationConfig { arrivals, limits: ServerLimits::default() }
    }
}

impl TryFrom<SimulationDto> for SimulationConfig {
    type Error = Error;

    fn try_from(dto: SimulationDto) -> Result<Self> {
        let pairs: Vec<(Time, Time)> = dto.arrivals.iter().map(|a| (a.arrival_time, a.service_duration)).collect();
        let arrivals = arrivals_from_pairs(&pairs)?;

        let limits = ServerLimits::new(dto.min_servers.unwrap_or(MIN_SERVERS), dto.max_servers.unwrap_or(MAX_SERVERS))?;

        Ok(SimulationConfig { arrivals, limits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::simulation_dto::ArrivalDto;

    #[test]
    fn test_default_limits() {
        let limits = ServerLimits::default();
        assert_eq!(limits.range(), 1..=5);
        assert!(limits.validate(1).is_ok());
        assert!(limits.validate(5).is_ok());
        assert!(matches!(limits.validate(0), Err(Error::InvalidServerCount { requested: 0, min: 1, max: 5 })));
        assert!(matches!(limits.validate(6), Err(Error::InvalidServerCount { requested: 6, .. })));
    }

    #[test]
    fn test_rejects_inverted_or_zero_limits() {
        assert!(matches!(ServerLimits::new(0, 3), Err(Error::InvalidServerLimits { min: 0, max: 3 })));
        assert!(matches!(ServerLimits::new(4, 2), Err(Error::InvalidServerLimits { .. })));
        assert!(ServerLimits::new(2, 2).is_ok());
    }

    #[test]
    fn test_dto_conversion_defaults_limits() {
        let dto = SimulationDto {
            min_servers: None,
            max_servers: Some(8),
            arrivals: vec![ArrivalDto { arrival_time: 0, service_duration: 5 }],
        };

        let config = SimulationConfig::try_from(dto).unwrap();
        assert_eq!(config.limits, ServerLimits::new(1, 8).unwrap());
        assert_eq!(config.arrivals, vec![ArrivalSpec::new(0, 5).unwrap()]);
    }

    #[test]
    fn test_dto_conversion_rejects_negative_duration() {
        let dto = SimulationDto {
            min_servers: None,
            max_servers: None,
            arrivals: vec![ArrivalDto { arrival_time: 3, service_duration: -1 }],
        };

        assert!(matches!(SimulationConfig::try_from(dto), Err(Error::InvalidArrival { .. })));
    }
}
