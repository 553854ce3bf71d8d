//! Tests for error types

use cafe_seating::core::SeatingError;

#[test]
fn test_table_occupied_error() {
    let err = SeatingError::TableOccupied {
        table: 2,
        occupant: "Maria".to_string(),
    };
    assert_eq!(format!("{}", err), "table 2 is already occupied by Maria");
    assert!(err.is_invalid_state());
}

#[test]
fn test_table_already_free_error() {
    let err = SeatingError::TableAlreadyFree(4);
    assert_eq!(format!("{}", err), "table 4 is already free");
    assert!(err.is_invalid_state());
}

#[test]
fn test_queue_empty_is_not_invalid_state() {
    let err = SeatingError::QueueEmpty;
    assert_eq!(format!("{}", err), "waiting queue is empty");
    assert!(!err.is_invalid_state());
}

#[test]
fn test_duplicate_table_is_invalid_state() {
    let err = SeatingError::DuplicateTable(4);
    assert_eq!(format!("{}", err), "table 4 appears more than once");
    assert!(err.is_invalid_state());
}

#[test]
fn test_no_tables_error() {
    let err = SeatingError::NoTables(3);
    assert_eq!(format!("{}", err), "no tables available for 3 waiting guests");
    assert!(!err.is_invalid_state());
}

#[test]
fn test_config_error() {
    let err = SeatingError::Config("tables must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: tables must be greater than 0"
    );
}

#[test]
fn test_converts_into_anyhow() {
    let result: cafe_seating::core::AppResult<()> = Err(SeatingError::Drained.into());
    assert_eq!(result.unwrap_err().to_string(), "run already drained");
}
