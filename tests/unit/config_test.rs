//! Tests for configuration validation

use std::collections::HashMap;

use cafe_seating::config::{ClockConfig, SeatingConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config_is_valid() {
    let config = SeatingConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.tables, 5);
    assert_eq!(config.min_duration, 3);
    assert_eq!(config.max_duration, 10);
    assert_eq!(config.poll_interval_units, 1);
    assert_eq!(config.clock, ClockConfig::Tokio);
}

#[test]
fn test_config_invalid_tables() {
    let invalid = SeatingConfig {
        tables: 0,
        ..SeatingConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_duration_range() {
    let invalid = SeatingConfig {
        min_duration: 8,
        max_duration: 4,
        ..SeatingConfig::default()
    };
    let err = invalid.validate().unwrap_err();
    assert!(err.contains("min_duration"));
}

#[test]
fn test_config_invalid_time_unit() {
    let invalid = SeatingConfig {
        time_unit_ms: 0,
        ..SeatingConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_poll_interval() {
    let invalid = SeatingConfig {
        poll_interval_units: 0,
        ..SeatingConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "tables": 3,
        "min_duration": 1,
        "max_duration": 4,
        "clock": "simulated",
        "seed": 99
    }"#;

    let config = SeatingConfig::from_json_str(json).unwrap();
    assert_eq!(config.tables, 3);
    assert_eq!(config.max_duration, 4);
    assert_eq!(config.clock, ClockConfig::Simulated);
    assert_eq!(config.seed, Some(99));
    // Unspecified fields fall back to defaults.
    assert_eq!(config.time_unit_ms, 1000);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(SeatingConfig::from_json_str(r#"{"tables": 0}"#).is_err());
    assert!(SeatingConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_from_vars() {
    let config = SeatingConfig::from_vars(lookup(&[
        ("CAFE_TABLES", "2"),
        ("CAFE_MAX_DURATION", "6"),
        ("CAFE_CLOCK", "Simulated"),
        ("CAFE_SEED", " 17 "),
        ("CAFE_TIME_UNIT_MS", ""),
    ]))
    .unwrap();
    assert_eq!(config.tables, 2);
    assert_eq!(config.min_duration, 3);
    assert_eq!(config.max_duration, 6);
    assert_eq!(config.clock, ClockConfig::Simulated);
    assert_eq!(config.seed, Some(17));
    assert_eq!(config.time_unit_ms, 1000);
}

#[test]
fn test_config_from_vars_reports_bad_value() {
    let err = SeatingConfig::from_vars(lookup(&[("CAFE_TABLES", "many")])).unwrap_err();
    assert!(err.starts_with("CAFE_TABLES"));

    let err = SeatingConfig::from_vars(lookup(&[("CAFE_CLOCK", "sundial")])).unwrap_err();
    assert!(err.contains("sundial"));
}

#[test]
fn test_config_from_vars_validates() {
    assert!(SeatingConfig::from_vars(lookup(&[("CAFE_TABLES", "0")])).is_err());
}
