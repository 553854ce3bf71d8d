//! Waiting queue abstraction.

use crate::core::{Guest, SeatingError};

/// Abstraction for waiting-queue backends.
///
/// Service order is insertion order: no priority, no reordering, no deduplication.
pub trait WaitingQueue: Send {
    /// Append a guest to the tail.
    fn enqueue(&mut self, guest: Guest);
    /// Remove and return the head.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::QueueEmpty`] when nobody is waiting.
    fn dequeue(&mut self) -> Result<Guest, SeatingError>;
    /// Whether nobody is waiting.
    fn is_empty(&self) -> bool;
    /// Number of waiting guests.
    fn len(&self) -> usize;
}
