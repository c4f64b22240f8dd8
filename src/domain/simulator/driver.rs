use crate::domain::simulator::event::{ArrivalSpec, Event, ServerIndex, Time};
use crate::domain::simulator::results::SimulationResult;
use crate::domain::simulator::scheduler::EventScheduler;
use crate::domain::simulator::server::ServerPool;
use crate::domain::simulator::waiting_line::WaitingLine;

/// One run of the bank simulation.
///
/// Owns the scheduler, the waiting line and the server pool for the duration
/// of the run. `run` consumes the simulation, so a finished run cannot be
/// resumed or reused.
#[derive(Debug)]
pub struct Simulation {
    scheduler: EventScheduler,
    line: WaitingLine,
    servers: ServerPool,
    events_processed: usize,
}

impl Simulation {
    /// Fresh run state: `server_count` idle servers, an empty line, and one
    /// arrival event per input entry.
    ///
    /// `arrivals` must have a representable completion horizon; `RunController`
    /// checks this before building a run.
    ///
    /// # Panics
    /// If `server_count` is zero.
    pub fn new(server_count: usize, arrivals: &[ArrivalSpec]) -> Self {
        let servers = ServerPool::new(server_count);
        assert!(!servers.is_empty(), "a simulation needs at least one server");

        let mut scheduler = EventScheduler::with_capacity(arrivals.len() + server_count);
        for customer in arrivals {
            scheduler.push(Event::arrival(*customer));
        }

        Simulation { scheduler, line: WaitingLine::new(), servers, events_processed: 0 }
    }

    /// Processes events until the scheduler is drained and collects the per-server totals.
    pub fn run(mut self) -> SimulationResult {
        while !self.scheduler.is_empty() {
            let event = self.scheduler.pop_min();
            log::trace!("Processing {} ({} event(s) pending).", event, self.scheduler.len());

            self.process_event(event);
            self.events_processed += 1;
        }

        self.check_drained();

        log::debug!("Run with {} server(s) drained after {} events.", self.servers.len(), self.events_processed);

        SimulationResult::new(self.servers.busy_times(), self.servers.customers_served())
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Arrival(customer) => self.process_arrival(customer),
            Event::Departure { time, server } => self.process_departure(time, server),
        }
    }

    fn process_arrival(&mut self, customer: ArrivalSpec) {
        let current_time = customer.arrival_time();

        match self.servers.find_available() {
            Some(index) => {
                self.servers.start_work(index, current_time);
                self.scheduler.push(Event::departure(current_time + customer.service_duration(), index));
                log::debug!("t={}: server {} starts a {}-unit service.", current_time, index, customer.service_duration());
            }
            None => {
                // No event is scheduled for a waiting customer; a later departure picks it up.
                self.line.enqueue(customer);
                log::debug!("t={}: all servers busy, {} customer(s) waiting.", current_time, self.line.len());
            }
        }
    }

    fn process_departure(&mut self, current_time: Time, server: ServerIndex) {
        match self.line.dequeue() {
            Some(customer) => {
                self.servers.continue_work(server, current_time);
                self.scheduler.push(Event::departure(current_time + customer.service_duration(), server));
                log::debug!(
                    "t={}: server {} takes customer who arrived at {} ({}-unit service).",
                    current_time,
                    server,
                    customer.arrival_time(),
                    customer.service_duration()
                );
            }
            None => {
                let elapsed = self.servers.stop_work(server, current_time);
                log::debug!("t={}: server {} goes idle after {} busy units.", current_time, server, elapsed);
            }
        }
    }

    fn check_drained(&self) {
        if !self.line.is_empty() || !self.servers.all_idle() {
            log::error!("Simulation drained with {} waiting customer(s) and busy servers: {:?}", self.line.len(), self.servers);
            panic!("simulation drained in an inconsistent state");
        }
    }
}
