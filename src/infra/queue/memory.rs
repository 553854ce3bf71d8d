//! In-memory FIFO waiting queue.

use std::collections::VecDeque;

use crate::core::{Guest, SeatingError, WaitingQueue};

/// In-memory queue storing waiting guests in arrival order.
/// This provides O(1) enqueue, dequeue and emptiness checks.
#[derive(Debug, Default)]
pub struct InMemoryQueue {
    guests: VecDeque<Guest>,
}

impl InMemoryQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waiting guests, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter()
    }

    /// Names of waiting guests, head first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.guests.iter().map(Guest::name).collect()
    }
}

impl WaitingQueue for InMemoryQueue {
    fn enqueue(&mut self, guest: Guest) {
        self.guests.push_back(guest);
    }

    fn dequeue(&mut self) -> Result<Guest, SeatingError> {
        self.guests.pop_front().ok_or(SeatingError::QueueEmpty)
    }

    fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    fn len(&self) -> usize {
        self.guests.len()
    }
}
