//! Configuration models for a seating run.

pub mod cafe;

pub use cafe::{ClockConfig, SeatingConfig};
