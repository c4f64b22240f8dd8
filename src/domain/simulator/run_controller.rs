use crate::domain::simulator::config::{ServerLimits, SimulationConfig};
use crate::domain::simulator::driver::Simulation;
use crate::domain::simulator::event::{ArrivalSpec, Time, completion_horizon};
use crate::domain::simulator::results::SimulationResult;
use crate::error::{Error, Result};

/// Runs the bank simulation repeatedly over one fixed input.
///
/// The controller only holds the input and the accepted server range. Every
/// run builds its own scheduler, waiting line and server pool, so the result
/// for a server count never depends on earlier runs.
#[derive(Debug, Clone)]
pub struct RunController {
    arrivals: Vec<ArrivalSpec>,
    limits: ServerLimits,
}

impl RunController {
    pub fn new(arrivals: Vec<ArrivalSpec>) -> Result<Self> {
        RunController::with_limits(arrivals, ServerLimits::default())
    }

    /// # Errors
    /// `Error::HorizonOverflow` if some run over `arrivals` could reach a time
    /// beyond `Time::MAX`.
    pub fn with_limits(arrivals: Vec<ArrivalSpec>, limits: ServerLimits) -> Result<Self> {
        completion_horizon(&arrivals)?;
        Ok(RunController { arrivals, limits })
    }

    pub fn arrivals(&self) -> &[ArrivalSpec] {
        &self.arrivals
    }

    pub fn limits(&self) -> ServerLimits {
        self.limits
    }

    /// Runs the simulation with `server_count` servers and returns the per-server totals.
    ///
    /// # Errors
    /// `Error::InvalidServerCount` if `server_count` lies outside the configured limits.
    pub fn simulate(&self, server_count: usize) -> Result<SimulationResult> {
        self.limits.validate(server_count)?;

        log::info!("Starting run with {} server(s) over {} arrival(s).", server_count, self.arrivals.len());

        let result = Simulation::new(server_count, &self.arrivals).run();

        log::info!(
            "Run with {} server(s) finished. Max busy time: {}, busy times: {:?}",
            server_count,
            result.max_busy_time(),
            result.busy_times()
        );

        Ok(result)
    }

    /// The bottleneck busy time for `server_count` servers.
    pub fn compute_max_busy_time(&self, server_count: usize) -> Result<Time> {
        Ok(self.simulate(server_count)?.max_busy_time())
    }

    /// Runs every server count of the configured limits in ascending order.
    pub fn compare(&self) -> Result<Vec<SimulationResult>> {
        self.limits.range().map(|server_count| self.simulate(server_count)).collect()
    }
}

impl TryFrom<SimulationConfig> for RunController {
    type Error = Error;

    fn try_from(config: SimulationConfig) -> Result<Self> {
        RunController::with_limits(config.arrivals, config.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulator::event::arrivals_from_pairs;

    #[test]
    fn test_sample_comparison() {
        let controller = RunController::try_from(SimulationConfig::sample()).unwrap();
        let maxima: Vec<Time> = controller.compare().unwrap().iter().map(SimulationResult::max_busy_time).collect();
        assert_eq!(maxima, vec![15, 11, 9, 9, 9]);
    }

    #[test]
    fn test_out_of_range_server_count_is_rejected() {
        let controller = RunController::try_from(SimulationConfig::sample()).unwrap();
        assert!(matches!(controller.compute_max_busy_time(0), Err(Error::InvalidServerCount { requested: 0, .. })));
        assert!(matches!(controller.compute_max_busy_time(6), Err(Error::InvalidServerCount { requested: 6, .. })));
    }

    #[test]
    fn test_rejects_input_whose_queue_overflows_time() {
        let arrivals = vec![ArrivalSpec::new(0, Time::MAX - 5).unwrap(), ArrivalSpec::new(1, 10).unwrap()];

        assert!(matches!(RunController::new(arrivals.clone()), Err(Error::HorizonOverflow { .. })));

        let config = SimulationConfig { arrivals, limits: ServerLimits::default() };
        assert!(matches!(RunController::try_from(config), Err(Error::HorizonOverflow { .. })));
    }

    #[test]
    fn test_largest_representable_horizon_runs_to_completion() {
        let arrivals = vec![ArrivalSpec::new(0, Time::MAX - 11).unwrap(), ArrivalSpec::new(1, 10).unwrap()];
        let controller = RunController::new(arrivals).unwrap();

        assert_eq!(controller.compute_max_busy_time(1).unwrap(), Time::MAX - 1);
        assert_eq!(controller.compute_max_busy_time(2).unwrap(), Time::MAX - 11);
    }

    #[test]
    fn test_custom_limits_widen_the_range() {
        let arrivals = arrivals_from_pairs(&[(0, 1), (0, 1), (0, 1)]).unwrap();
        let controller = RunController::with_limits(arrivals, ServerLimits::new(2, 8).unwrap()).unwrap();

        assert!(controller.compute_max_busy_time(1).is_err());
        assert_eq!(controller.compute_max_busy_time(8).unwrap(), 1);
        assert_eq!(controller.compare().unwrap().len(), 7);
    }
}
