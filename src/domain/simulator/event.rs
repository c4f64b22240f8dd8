use std::fmt;

use crate::error::{Error, Result};

/// Integer simulation time. Has no wall-clock meaning.
pub type Time = i64;

/// Index of a server inside a `ServerPool`.
pub type ServerIndex = usize;

/// A customer entering the system: when it arrives and how long it occupies a server.
///
/// The only external input of the simulation. Constructed once and reused
/// unchanged across every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrivalSpec {
    pub(crate) arrival_time: Time,
    pub(crate) service_duration: Time,
}

impl ArrivalSpec {
    /// Creates a validated arrival.
    ///
    /// # Errors
    /// `Error::InvalidArrival` if either value is negative or if the departure
    /// time `arrival_time + service_duration` is not representable.
    pub fn new(arrival_time: Time, service_duration: Time) -> Result<Self> {
        let reject = |reason: &str| Error::InvalidArrival { arrival_time, service_duration, reason: reason.to_string() };

        if arrival_time < 0 {
            return Err(reject("arrival time must not be negative"));
        }

        if service_duration < 0 {
            return Err(reject("service duration must not be negative"));
        }

        if arrival_time.checked_add(service_duration).is_none() {
            return Err(reject("departure time overflows"));
        }

        Ok(ArrivalSpec { arrival_time, service_duration })
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn service_duration(&self) -> Time {
        self.service_duration
    }
}

impl TryFrom<(Time, Time)> for ArrivalSpec {
    type Error = Error;

    fn try_from((arrival_time, service_duration): (Time, Time)) -> Result<Self> {
        ArrivalSpec::new(arrival_time, service_duration)
    }
}

/// Validates a list of `(arrival_time, service_duration)` pairs, each on its
/// own and together (see [`completion_horizon`]).
pub fn arrivals_from_pairs(pairs: &[(Time, Time)]) -> Result<Vec<ArrivalSpec>> {
    let arrivals = pairs.iter().copied().map(ArrivalSpec::try_from).collect::<Result<Vec<_>>>()?;
    completion_horizon(&arrivals)?;
    Ok(arrivals)
}

/// Upper bound for every event time and busy total of a run over `arrivals`:
/// the last arrival plus the service time of all customers.
///
/// # Errors
/// `Error::HorizonOverflow` if the bound is not representable as `Time`.
pub fn completion_horizon(arrivals: &[ArrivalSpec]) -> Result<Time> {
    let last_arrival = arrivals.iter().map(ArrivalSpec::arrival_time).max().unwrap_or(0);

    arrivals
        .iter()
        .try_fold(last_arrival, |horizon, customer| horizon.checked_add(customer.service_duration))
        .ok_or(Error::HorizonOverflow { last_arrival })
}

/// Everything the scheduler can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A customer arrives and needs `service_duration` units of service.
    Arrival(ArrivalSpec),

    /// The customer served by `server` finishes at `time`.
    Departure { time: Time, server: ServerIndex },
}

impl Event {
    pub fn arrival(customer: ArrivalSpec) -> Self {
        Event::Arrival(customer)
    }

    pub fn departure(time: Time, server: ServerIndex) -> Self {
        Event::Departure { time, server }
    }

    /// The single ordering projection shared by both variants.
    pub fn time(&self) -> Time {
        match *self {
            Event::Arrival(customer) => customer.arrival_time,
            Event::Departure { time, .. } => time,
        }
    }

    /// Secondary ordering key for events sharing a time: arrivals come first.
    pub(crate) fn kind_rank(&self) -> u8 {
        match self {
            Event::Arrival(_) => 0,
            Event::Departure { .. } => 1,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Arrival(customer) => write!(f, "Arrival(t={}, duration={})", customer.arrival_time, customer.service_duration),
            Event::Departure { time, server } => write!(f, "Departure(t={}, server={})", time, server),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_values() {
        assert!(matches!(ArrivalSpec::new(-1, 3), Err(Error::InvalidArrival { arrival_time: -1, .. })));
        assert!(matches!(ArrivalSpec::new(4, -2), Err(Error::InvalidArrival { service_duration: -2, .. })));
    }

    #[test]
    fn test_rejects_overflowing_departure() {
        assert!(ArrivalSpec::new(Time::MAX, 1).is_err());
        assert!(ArrivalSpec::new(Time::MAX, 0).is_ok());
    }

    #[test]
    fn test_zero_duration_is_accepted() {
        let customer = ArrivalSpec::new(7, 0).unwrap();
        assert_eq!(customer.arrival_time(), 7);
        assert_eq!(customer.service_duration(), 0);
    }

    #[test]
    fn test_arrivals_from_pairs_stops_at_first_invalid() {
        assert_eq!(arrivals_from_pairs(&[(1, 2), (3, 4)]).unwrap().len(), 2);
        assert!(arrivals_from_pairs(&[(1, 2), (3, -4), (5, 6)]).is_err());
    }

    #[test]
    fn test_horizon_covers_queued_service() {
        // Each pair is fine alone, but the second customer starts after the first
        // finishes and would end past Time::MAX.
        assert!(ArrivalSpec::new(0, Time::MAX - 5).is_ok());
        assert!(ArrivalSpec::new(1, 10).is_ok());
        assert!(matches!(arrivals_from_pairs(&[(0, Time::MAX - 5), (1, 10)]), Err(Error::HorizonOverflow { last_arrival: 1 })));

        let arrivals = arrivals_from_pairs(&[(20, 6), (22, 4), (23, 2), (30, 3)]).unwrap();
        assert_eq!(completion_horizon(&arrivals).unwrap(), 45);
        assert_eq!(completion_horizon(&[]).unwrap(), 0);
    }

    #[test]
    fn test_event_time_projection() {
        let customer = ArrivalSpec::new(20, 6).unwrap();
        assert_eq!(Event::arrival(customer).time(), 20);
        assert_eq!(Event::departure(26, 1).time(), 26);
        assert!(Event::arrival(customer).kind_rank() < Event::departure(20, 0).kind_rank());
    }
}
