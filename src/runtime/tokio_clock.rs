//! Real-time clock: one tokio task per seated guest, polling supervisor.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::core::{Clock, CompletionFlag, Spawn};
use crate::runtime::TokioSpawner;

/// Clock where one time unit is a fixed wall-clock [`Duration`].
///
/// Every started guest gets its own task that sleeps for its duration and then
/// marks itself finished. Uses `tokio::time`, so tests can run it under a paused
/// runtime.
#[derive(Clone, Debug)]
pub struct TokioClock<S = TokioSpawner> {
    spawner: S,
    unit: Duration,
    started_at: Instant,
}

impl<S> TokioClock<S>
where
    S: Spawn,
{
    /// Create a clock whose timers run on `spawner`.
    pub fn new(spawner: S, unit: Duration) -> Self {
        Self {
            spawner,
            unit,
            started_at: Instant::now(),
        }
    }

    /// Length of one time unit.
    pub const fn unit(&self) -> Duration {
        self.unit
    }

    fn span(&self, units: u64) -> Duration {
        self.unit.saturating_mul(u32::try_from(units).unwrap_or(u32::MAX))
    }
}

impl TokioClock<TokioSpawner> {
    /// Clock on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn current(unit: Duration) -> Self {
        Self::new(TokioSpawner::current(), unit)
    }
}

#[async_trait]
impl<S> Clock for TokioClock<S>
where
    S: Spawn + Send + Sync + 'static,
{
    fn start_timer(&self, units: u64, completion: CompletionFlag) {
        let span = self.span(units);
        self.spawner.spawn(async move {
            tokio::time::sleep(span).await;
            completion.mark();
        });
    }

    async fn pause(&self, units: u64) {
        tokio::time::sleep(self.span(units)).await;
    }

    fn now(&self) -> u64 {
        let elapsed = self.started_at.elapsed().as_nanos();
        let unit = self.unit.as_nanos().max(1);
        u64::try_from(elapsed / unit).unwrap_or(u64::MAX)
    }
}
