//! Tests for utility functions

use cafe_seating::core::GuestState;
use cafe_seating::util::{guests_from, init_tracing, DEFAULT_GUESTS};

#[test]
fn test_default_roster() {
    assert_eq!(DEFAULT_GUESTS.len(), 12);
    assert_eq!(DEFAULT_GUESTS[0], "Maria");
    assert_eq!(DEFAULT_GUESTS[11], "Alexandra");
}

#[test]
fn test_guests_from_preserves_order() {
    let guests = guests_from(["Vakhtang", "Sergey"]);
    let names: Vec<_> = guests.iter().map(|g| g.name()).collect();
    assert_eq!(names, vec!["Vakhtang", "Sergey"]);
    assert!(guests.iter().all(|g| g.state() == GuestState::NotStarted));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
