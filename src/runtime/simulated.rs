//! Deterministic simulated clock.
//!
//! Time only moves when the supervisor pauses (or a test calls
//! [`SimulatedClock::advance`]), so a run completes instantly and the same
//! inputs always produce the same event log.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{Clock, CompletionFlag};

struct PendingTimer {
    due: u64,
    completion: CompletionFlag,
}

#[derive(Default)]
struct SimulatedState {
    now: u64,
    timers: Vec<PendingTimer>,
}

/// Single-threaded simulated time source. Clones share the same timeline.
#[derive(Clone, Default)]
pub struct SimulatedClock {
    state: Arc<Mutex<SimulatedState>>,
}

impl SimulatedClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and fire every timer that has come due.
    /// Returns how many timers fired.
    pub fn advance(&self, units: u64) -> usize {
        let mut state = self.state.lock();
        state.now = state.now.saturating_add(units);
        let now = state.now;
        let before = state.timers.len();
        state.timers.retain(|timer| {
            if timer.due <= now {
                timer.completion.mark();
                false
            } else {
                true
            }
        });
        before - state.timers.len()
    }

    /// Timers still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().timers.len()
    }
}

impl std::fmt::Debug for SimulatedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SimulatedClock")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}

#[async_trait]
impl Clock for SimulatedClock {
    fn start_timer(&self, units: u64, completion: CompletionFlag) {
        if units == 0 {
            completion.mark();
            return;
        }
        let mut state = self.state.lock();
        let due = state.now.saturating_add(units);
        state.timers.push(PendingTimer { due, completion });
    }

    async fn pause(&self, units: u64) {
        let fired = self.advance(units);
        tracing::trace!(fired, now = self.now(), "simulated time advanced");
    }

    fn now(&self) -> u64 {
        self.state.lock().now
    }
}
