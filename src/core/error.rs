//! Error types for seating operations.

use thiserror::Error;

use crate::core::TableId;

/// Errors produced by the allocator and its components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatingError {
    /// A guest was assigned to a table that already has an occupant.
    #[error("table {table} is already occupied by {occupant}")]
    TableOccupied {
        /// Table that was targeted.
        table: TableId,
        /// Name of the guest currently seated there.
        occupant: String,
    },
    /// A table was released while it had no occupant.
    #[error("table {0} is already free")]
    TableAlreadyFree(TableId),
    /// Two tables were given the same id.
    #[error("table {0} appears more than once")]
    DuplicateTable(TableId),
    /// A guest was started a second time.
    #[error("guest {0} has already been started")]
    GuestAlreadyStarted(String),
    /// Dequeue was attempted on an empty waiting queue.
    #[error("waiting queue is empty")]
    QueueEmpty,
    /// Guests are waiting but there are no tables to ever seat them.
    #[error("no tables available for {0} waiting guests")]
    NoTables(usize),
    /// The run already drained; the allocator accepts no more work.
    #[error("run already drained")]
    Drained,
    /// Configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SeatingError {
    /// True for errors that mean the allocator's own bookkeeping is corrupt.
    ///
    /// These never occur under correct allocator logic and abort the run.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::TableOccupied { .. }
                | Self::TableAlreadyFree(_)
                | Self::DuplicateTable(_)
                | Self::GuestAlreadyStarted(_)
        )
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
