//! Tests for event sinks

use cafe_seating::core::{EventSink, InMemoryEventSink, SeatingEvent};

#[test]
fn test_event_display_lines() {
    let lines: Vec<String> = [
        SeatingEvent::Seated {
            guest: "Maria".into(),
            table: 1,
        },
        SeatingEvent::Queued {
            guest: "Oleg".into(),
        },
        SeatingEvent::SeatedFromQueue {
            guest: "Oleg".into(),
            table: 1,
        },
        SeatingEvent::AllServed,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(
        lines,
        vec![
            "Maria sat down at table 1",
            "Oleg is waiting in the queue",
            "Oleg left the queue and sat down at table 1",
            "All guests have been served!",
        ]
    );
}

#[test]
fn test_in_memory_sink_as_trait_object() {
    let sink = InMemoryEventSink::new();
    let mut boxed: Box<dyn EventSink> = Box::new(sink.clone());
    boxed.record(SeatingEvent::AllServed);
    assert_eq!(sink.events(), vec![SeatingEvent::AllServed]);
    assert!(!sink.is_empty());
}

#[test]
fn test_guest_accessor() {
    assert_eq!(
        SeatingEvent::Queued {
            guest: "Ilya".into()
        }
        .guest(),
        Some("Ilya")
    );
    assert_eq!(SeatingEvent::AllServed.guest(), None);
}
