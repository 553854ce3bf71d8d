//! Infrastructure adapters for the waiting queue.

pub mod queue;
pub use queue::InMemoryQueue;
