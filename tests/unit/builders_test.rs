//! Tests for builder modules

use cafe_seating::builders::AllocatorBuilder;
use cafe_seating::config::{ClockConfig, SeatingConfig};
use cafe_seating::core::{
    Guest, InMemoryEventSink, Phase, ScriptedDurations, SeatingError, SeatingEvent, Table,
};
use cafe_seating::runtime::SimulatedClock;

#[test]
fn test_allocator_builder_defaults() {
    let config = SeatingConfig {
        tables: 4,
        clock: ClockConfig::Simulated,
        ..SeatingConfig::default()
    };

    let builder = AllocatorBuilder::new(config);
    assert_eq!(builder.config().tables, 4);

    let allocator = builder.build(SimulatedClock::new()).unwrap();
    let ids: Vec<_> = allocator.tables().iter().map(Table::id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(allocator.phase(), Phase::Admitting);
}

#[test]
fn test_allocator_builder_rejects_invalid_config() {
    let config = SeatingConfig {
        tables: 0,
        ..SeatingConfig::default()
    };
    let err = AllocatorBuilder::new(config)
        .build(SimulatedClock::new())
        .err()
        .unwrap();
    assert!(matches!(err, SeatingError::Config(_)));
}

#[tokio::test]
async fn test_allocator_builder_applies_overrides() {
    let config = SeatingConfig {
        tables: 1,
        poll_interval_units: 2,
        ..SeatingConfig::default()
    };
    let sink = InMemoryEventSink::new();
    let mut allocator = AllocatorBuilder::new(config)
        .with_sink(sink.clone())
        .with_durations(ScriptedDurations::constant(3))
        .build(SimulatedClock::new())
        .unwrap();

    allocator.admit([Guest::new("Galina")]).unwrap();
    let report = allocator.serve().await.unwrap();
    // Polled at 0, 2 and 4; the guest finished at 3.
    assert_eq!(report.passes, 3);
    assert_eq!(report.elapsed_units, 4);
    assert_eq!(sink.events().last(), Some(&SeatingEvent::AllServed));
}

#[tokio::test]
async fn test_seeded_config_draws_in_range() {
    let config = SeatingConfig {
        tables: 2,
        min_duration: 4,
        max_duration: 6,
        seed: Some(3),
        ..SeatingConfig::default()
    };
    let mut allocator = AllocatorBuilder::new(config)
        .with_sink(InMemoryEventSink::new())
        .build(SimulatedClock::new())
        .unwrap();
    allocator
        .admit([Guest::new("a"), Guest::new("b")])
        .unwrap();
    for table in allocator.tables() {
        let units = table.occupant().and_then(Guest::duration).unwrap();
        assert!((4..=6).contains(&units));
    }
}
