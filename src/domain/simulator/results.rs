use crate::domain::simulator::event::Time;

/// Final per-server totals of one run, indexed by server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    busy_times: Vec<Time>,
    customers_served: Vec<usize>,
}

impl SimulationResult {
    pub fn new(busy_times: Vec<Time>, customers_served: Vec<usize>) -> Self {
        debug_assert_eq!(busy_times.len(), customers_served.len());
        SimulationResult { busy_times, customers_served }
    }

    pub fn server_count(&self) -> usize {
        self.busy_times.len()
    }

    pub fn busy_times(&self) -> &[Time] {
        &self.busy_times
    }

    pub fn customers_served(&self) -> &[usize] {
        &self.customers_served
    }

    /// The bottleneck: the largest busy time of any single server.
    pub fn max_busy_time(&self) -> Time {
        self.busy_times.iter().copied().max().unwrap_or(0)
    }

    pub fn total_busy_time(&self) -> Time {
        self.busy_times.iter().sum()
    }

    pub fn total_customers_served(&self) -> usize {
        self.customers_served.iter().sum()
    }

    /// The comparison line printed for this run.
    pub fn report_line(&self) -> String {
        report_line(self.server_count(), self.max_busy_time())
    }
}

/// Formats `Time waiting with <n> teller(s): <value>`.
pub fn report_line(server_count: usize, max_busy_time: Time) -> String {
    let noun = if server_count == 1 { "teller" } else { "tellers" };
    format!("Time waiting with {} {}: {}", server_count, noun, max_busy_time)
}
