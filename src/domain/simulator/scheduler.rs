use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::simulator::event::{Event, Time};

/// Heap entry: the event plus the insertion sequence used as the last tie-break.
#[derive(Debug)]
struct ScheduledEvent {
    sequence: u64,
    event: Event,
}

impl ScheduledEvent {
    fn key(&self) -> (Time, u8, u64) {
        (self.event.time(), self.event.kind_rank(), self.sequence)
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the smallest key first.
        other.key().cmp(&self.key())
    }
}

/// Time-ordered pending events of one run.
///
/// Events are popped by `(time, kind, insertion sequence)`: at equal times
/// arrivals precede departures, and events of the same kind leave in the
/// order they were pushed. The ordering is total, so identical input always
/// produces the identical event sequence.
#[derive(Debug, Default)]
pub struct EventScheduler {
    next_sequence: u64,
    events: BinaryHeap<ScheduledEvent>,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EventScheduler { next_sequence: 0, events: BinaryHeap::with_capacity(capacity) }
    }

    pub fn push(&mut self, event: Event) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.events.push(ScheduledEvent { sequence, event });
    }

    /// Removes and returns the next event.
    ///
    /// # Panics
    /// If the scheduler is empty. Callers check `is_empty` first.
    pub fn pop_min(&mut self) -> Event {
        match self.events.pop() {
            Some(entry) => entry.event,
            None => {
                log::error!("pop_min called on an empty EventScheduler.");
                panic!("EventScheduler::pop_min called on an empty scheduler");
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
