//! Clocks, spawners and the run driver.

pub mod simulated;
#[cfg(feature = "tokio-runtime")]
pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_clock;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

pub use simulated::SimulatedClock;
#[cfg(feature = "tokio-runtime")]
pub use api::{run_simulation, RunSummary};
#[cfg(feature = "tokio-runtime")]
pub use tokio_clock::TokioClock;
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;
