use crate::domain::simulator::event::{ServerIndex, Time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerState {
    #[default]
    Idle,
    Busy { since: Time },
}

/// A single teller. Tracks whether it is serving and how long it has served in total.
#[derive(Debug, Clone, Default)]
pub struct Server {
    state: ServerState,

    /// Sum of all completed busy intervals. Only grows on a Busy -> Idle transition.
    busy_time: Time,

    /// Number of customers this server has started serving.
    customers_served: usize,
}

impl Server {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        self.state == ServerState::Idle
    }

    /// Idle -> Busy at `time`.
    ///
    /// # Panics
    /// If the server is already busy.
    pub fn start_work(&mut self, time: Time) {
        if let ServerState::Busy { since } = self.state {
            log::error!("Server busy since {} was asked to start work again at {}.", since, time);
            panic!("start_work on a busy server (busy since {}, now {})", since, time);
        }

        self.state = ServerState::Busy { since: time };
        self.customers_served += 1;
    }

    /// Hands the next waiting customer to a server that stays busy.
    ///
    /// # Panics
    /// If the server is idle.
    pub fn continue_work(&mut self, time: Time) {
        if self.is_available() {
            log::error!("Idle server was asked to continue work at {}.", time);
            panic!("continue_work on an idle server (now {})", time);
        }

        self.customers_served += 1;
    }

    /// Busy -> Idle at `time`, returning the elapsed busy interval.
    ///
    /// # Panics
    /// If the server is already idle or `time` lies before the start of the interval.
    pub fn stop_work(&mut self, time: Time) -> Time {
        let since = match self.state {
            ServerState::Busy { since } => since,
            ServerState::Idle => {
                log::error!("Idle server was asked to stop work at {}.", time);
                panic!("stop_work on an idle server (now {})", time);
            }
        };

        assert!(time >= since, "stop_work at {} precedes start of busy interval {}", time, since);

        let elapsed = time - since;
        self.busy_time += elapsed;
        self.state = ServerState::Idle;
        elapsed
    }

    /// Accumulated busy time. Intervals still in progress are not included.
    pub fn total_busy_time(&self) -> Time {
        self.busy_time
    }

    pub fn customers_served(&self) -> usize {
        self.customers_served
    }
}

/// Fixed-size set of servers for one run, indexed `0..len`.
#[derive(Debug, Clone)]
pub struct ServerPool {
    servers: Vec<Server>,
}

impl ServerPool {
    pub fn new(server_count: usize) -> Self {
        ServerPool { servers: vec![Server::new(); server_count] }
    }

    /// Lowest-indexed idle server, if any.
    pub fn find_available(&self) -> Option<ServerIndex> {
        self.servers.iter().position(Server::is_available)
    }

    pub fn start_work(&mut self, index: ServerIndex, time: Time) {
        self.server_mut(index).start_work(time);
    }

    pub fn continue_work(&mut self, index: ServerIndex, time: Time) {
        self.server_mut(index).continue_work(time);
    }

    pub fn stop_work(&mut self, index: ServerIndex, time: Time) -> Time {
        self.server_mut(index).stop_work(time)
    }

    pub fn total_busy_time(&self, index: ServerIndex) -> Time {
        self.server(index).total_busy_time()
    }

    pub fn server(&self, index: ServerIndex) -> &Server {
        match self.servers.get(index) {
            Some(server) => server,
            None => panic!("server index {} out of range for a pool of {}", index, self.servers.len()),
        }
    }

    fn server_mut(&mut self, index: ServerIndex) -> &mut Server {
        let len = self.servers.len();
        match self.servers.get_mut(index) {
            Some(server) => server,
            None => panic!("server index {} out of range for a pool of {}", index, len),
        }
    }

    pub fn all_idle(&self) -> bool {
        self.servers.iter().all(Server::is_available)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn busy_times(&self) -> Vec<Time> {
        self.servers.iter().map(Server::total_busy_time).collect()
    }

    pub fn customers_served(&self) -> Vec<usize> {
        self.servers.iter().map(Server::customers_served).collect()
    }
}
