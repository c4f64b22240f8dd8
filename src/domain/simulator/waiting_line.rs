use std::collections::VecDeque;

use crate::domain::simulator::event::ArrivalSpec;

/// Customers who found every server busy, in strict arrival order.
#[derive(Debug, Default)]
pub struct WaitingLine {
    customers: VecDeque<ArrivalSpec>,
}

impl WaitingLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, customer: ArrivalSpec) {
        self.customers.push_back(customer);
    }

    pub fn dequeue(&mut self) -> Option<ArrivalSpec> {
        self.customers.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }
}
