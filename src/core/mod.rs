//! Core seating abstractions: guests, tables, the waiting queue and the allocator.

pub mod allocator;
pub mod clock;
pub mod durations;
pub mod error;
pub mod guest;
pub mod observer;
pub mod queue;
pub mod table;

pub use allocator::{Allocator, Occupancy, Phase, ServeReport, DEFAULT_POLL_INTERVAL};
pub use clock::{Clock, Spawn};
pub use durations::{
    DurationSource, ScriptedDurations, UniformDurations, MAX_DURATION, MIN_DURATION,
};
pub use error::{AppResult, SeatingError};
pub use guest::{CompletionFlag, Guest, GuestState};
pub use observer::{
    CallbackEventSink, ChannelEventSink, EventSink, InMemoryEventSink, SeatingEvent,
    TracingEventSink,
};
pub use queue::WaitingQueue;
pub use table::{Table, TableId};
