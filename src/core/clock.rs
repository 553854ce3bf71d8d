//! Time abstractions driving guest timers and the supervisor's polling delay.

use std::future::Future;

use async_trait::async_trait;

use crate::core::CompletionFlag;

/// Abstraction for spawning background work on a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Source of time for a seating run.
///
/// All durations are expressed in abstract time units; each implementation
/// decides what a unit means (a real second, or one step of simulated time).
#[async_trait]
pub trait Clock: Send + Sync + 'static {
    /// Arrange for `completion` to be marked once `units` have elapsed.
    ///
    /// Must not block the caller.
    fn start_timer(&self, units: u64, completion: CompletionFlag);

    /// Suspend the supervisor for `units`.
    async fn pause(&self, units: u64);

    /// Units elapsed since the clock was created.
    fn now(&self) -> u64;
}
