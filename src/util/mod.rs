//! Shared utilities.

pub mod roster;
pub mod telemetry;

pub use roster::{guests_from, DEFAULT_GUESTS};
pub use telemetry::init_tracing;
