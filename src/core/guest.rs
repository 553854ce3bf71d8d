//! Guests and their occupation timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{Clock, DurationSource, SeatingError};

/// Lifecycle of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestState {
    /// Admitted but not yet seated.
    NotStarted,
    /// Seated and eating.
    Running,
    /// Done eating; the table can be released.
    Finished,
}

/// Shared flag a guest's timer flips once its duration elapses.
///
/// The timer is the only writer; the allocator only reads.
#[derive(Debug, Clone, Default)]
pub struct CompletionFlag(Arc<AtomicBool>);

impl CompletionFlag {
    /// Create an unset flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning guest as finished.
    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether the flag has been marked.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A guest that occupies a table for a bounded, randomly drawn duration.
#[derive(Debug)]
pub struct Guest {
    name: String,
    duration: Option<u64>,
    started: bool,
    completion: CompletionFlag,
}

impl Guest {
    /// Create a guest whose duration is drawn when it is seated.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: None,
            started: false,
            completion: CompletionFlag::new(),
        }
    }

    /// Create a guest with a preassigned duration; no draw happens at start.
    pub fn with_duration(name: impl Into<String>, units: u64) -> Self {
        Self {
            duration: Some(units),
            ..Self::new(name)
        }
    }

    /// Guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration in time units, once known.
    #[must_use]
    pub const fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GuestState {
        if !self.started {
            GuestState::NotStarted
        } else if self.completion.is_set() {
            GuestState::Finished
        } else {
            GuestState::Running
        }
    }

    /// Non-blocking completion check, safe while the timer is still running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.started && self.completion.is_set()
    }

    /// Begin the occupation: draw the duration if needed and start the timer.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::GuestAlreadyStarted`] if called twice.
    pub fn start<C>(
        &mut self,
        durations: &mut dyn DurationSource,
        clock: &C,
    ) -> Result<u64, SeatingError>
    where
        C: Clock + ?Sized,
    {
        if self.started {
            return Err(SeatingError::GuestAlreadyStarted(self.name.clone()));
        }
        let units = *self.duration.get_or_insert_with(|| durations.sample());
        self.started = true;
        clock.start_timer(units, self.completion.clone());
        tracing::debug!(guest = %self.name, units, "guest timer started");
        Ok(units)
    }
}
