//! Seating events and the sinks that observe them.
//!
//! The allocator never prints; it hands every event to an [`EventSink`] in the
//! order the events happen.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::TableId;

/// Something that happened during a seating run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatingEvent {
    /// A guest was seated on arrival.
    Seated {
        /// Guest name.
        guest: String,
        /// Table the guest sat at.
        table: TableId,
    },
    /// A guest found no free table and joined the queue.
    Queued {
        /// Guest name.
        guest: String,
    },
    /// A guest finished and left.
    Departed {
        /// Guest name.
        guest: String,
        /// Table that is now free.
        table: TableId,
    },
    /// A waiting guest took a freed table.
    SeatedFromQueue {
        /// Guest name.
        guest: String,
        /// Table the guest sat at.
        table: TableId,
    },
    /// Every guest has been served.
    AllServed,
}

impl SeatingEvent {
    /// Name of the guest involved, if any.
    #[must_use]
    pub fn guest(&self) -> Option<&str> {
        match self {
            Self::Seated { guest, .. }
            | Self::Queued { guest }
            | Self::Departed { guest, .. }
            | Self::SeatedFromQueue { guest, .. } => Some(guest),
            Self::AllServed => None,
        }
    }
}

impl fmt::Display for SeatingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seated { guest, table } => write!(f, "{guest} sat down at table {table}"),
            Self::Queued { guest } => write!(f, "{guest} is waiting in the queue"),
            Self::Departed { guest, table } => {
                write!(f, "{guest} finished and left; table {table} is free")
            }
            Self::SeatedFromQueue { guest, table } => {
                write!(f, "{guest} left the queue and sat down at table {table}")
            }
            Self::AllServed => write!(f, "All guests have been served!"),
        }
    }
}

/// Observer of seating events.
pub trait EventSink: Send {
    /// Record an event.
    fn record(&mut self, event: SeatingEvent);
}

/// Logs every event through `tracing`. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&mut self, event: SeatingEvent) {
        tracing::info!(target: "cafe_seating::events", "{event}");
    }
}

/// In-memory sink for testing and dev.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to the allocator.
#[derive(Debug, Clone)]
pub struct InMemoryEventSink {
    events: Arc<Mutex<VecDeque<SeatingEvent>>>,
    max_events: Option<usize>,
}

impl InMemoryEventSink {
    /// Create an unbounded sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::new())),
            max_events: None,
        }
    }

    /// Create a sink that keeps only the newest `max_events` events.
    #[must_use]
    pub fn bounded(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events: Some(max_events),
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<SeatingEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Default for InMemoryEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: SeatingEvent) {
        let mut events = self.events.lock();
        if let Some(max) = self.max_events {
            if max == 0 {
                return;
            }
            if events.len() >= max {
                events.pop_front();
            }
        }
        events.push_back(event);
    }
}

/// Streams events over a channel to another thread.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: crossbeam_channel::Sender<SeatingEvent>,
}

impl ChannelEventSink {
    /// Create a sink backed by an unbounded channel and return its receiver.
    #[must_use]
    pub fn unbounded() -> (Self, crossbeam_channel::Receiver<SeatingEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelEventSink {
    fn record(&mut self, event: SeatingEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("event receiver dropped, discarding {}", e.into_inner());
        }
    }
}

/// Hands every event to a closure.
pub struct CallbackEventSink<F> {
    callback: F,
}

impl<F> CallbackEventSink<F>
where
    F: FnMut(&SeatingEvent) + Send,
{
    /// Wrap a closure as a sink.
    pub const fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EventSink for CallbackEventSink<F>
where
    F: FnMut(&SeatingEvent) + Send,
{
    fn record(&mut self, event: SeatingEvent) {
        (self.callback)(&event);
    }
}
