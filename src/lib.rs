//! # Cafe Seating
//!
//! A simulator for handing a fixed set of tables to a stream of guests.
//!
//! Guests arrive in a batch. Each one takes the first free table (lowest table
//! number first) or, when every table is taken, waits in a FIFO queue. A seated
//! guest stays for a random number of time units, `[3, 10]` by default, then
//! leaves. A supervisor loop polls the tables, frees the ones whose guest has
//! finished and seats the head of the queue at each freed table. The run ends
//! when every table is free and nobody is waiting.
//!
//! ## Key Features
//!
//! - **Deterministic policy**: first-fit by ascending table id, strict FIFO queue
//! - **Pluggable time**: real time on tokio ([`runtime::TokioClock`]) or simulated
//!   time ([`runtime::SimulatedClock`]) for fast, reproducible runs
//! - **Pluggable observation**: every seat, queue and departure is an
//!   [`core::SeatingEvent`] handed to an [`core::EventSink`]
//! - **Injectable randomness**: durations come from a [`core::DurationSource`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use cafe_seating::core::{Allocator, Guest, InMemoryEventSink, Table};
//! use cafe_seating::infra::InMemoryQueue;
//! use cafe_seating::runtime::SimulatedClock;
//!
//! let sink = InMemoryEventSink::new();
//! let mut allocator =
//!     Allocator::new(Table::numbered(2), InMemoryQueue::new(), SimulatedClock::new())?
//!         .with_sink(sink.clone());
//! allocator.admit(["A", "B", "C"].into_iter().map(Guest::new))?;
//! let report = allocator.serve().await?;
//! assert_eq!(report.served, 3);
//! ```
//!
//! For complete examples, see `tests/seating_algorithm_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Guests, tables, the waiting queue and the allocator.
pub mod core;
/// Configuration models for a seating run.
pub mod config;
/// Builders to construct allocators from configuration.
pub mod builders;
/// Infrastructure adapters for the waiting queue.
pub mod infra;
/// Clocks, spawners and the run driver.
pub mod runtime;
/// Shared utilities.
pub mod util;
