//! Seating run configuration.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_POLL_INTERVAL, MAX_DURATION, MIN_DURATION};

/// Clock selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockConfig {
    /// Real time on the tokio runtime.
    #[default]
    Tokio,
    /// Deterministic simulated time.
    Simulated,
}

impl FromStr for ClockConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokio" => Ok(Self::Tokio),
            "simulated" => Ok(Self::Simulated),
            other => Err(format!("unknown clock `{other}`")),
        }
    }
}

/// Seating run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    /// Number of tables, numbered from 1.
    pub tables: usize,
    /// Shortest occupation in time units.
    pub min_duration: u64,
    /// Longest occupation in time units.
    pub max_duration: u64,
    /// Wall-clock length of one time unit in milliseconds (tokio clock only).
    pub time_unit_ms: u64,
    /// Supervisor polling interval in time units.
    pub poll_interval_units: u64,
    /// Clock selection.
    pub clock: ClockConfig,
    /// Seed for the duration draw; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            tables: 5,
            min_duration: MIN_DURATION,
            max_duration: MAX_DURATION,
            time_unit_ms: 1000,
            poll_interval_units: DEFAULT_POLL_INTERVAL,
            clock: ClockConfig::Tokio,
            seed: None,
        }
    }
}

impl SeatingConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.tables == 0 {
            return Err("tables must be greater than 0".into());
        }
        if self.min_duration > self.max_duration {
            return Err(format!(
                "min_duration ({}) must not exceed max_duration ({})",
                self.min_duration, self.max_duration
            ));
        }
        if self.time_unit_ms == 0 {
            return Err("time_unit_ms must be greater than 0".into());
        }
        if self.poll_interval_units == 0 {
            return Err("poll_interval_units must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `.env` if present, then read `CAFE_*` variables over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable that failed to parse, or a
    /// validation message.
    pub fn from_env() -> Result<Self, String> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("ignoring unreadable .env file: {e}");
            }
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a variable lookup, falling back to defaults.
    ///
    /// Recognised keys: `CAFE_TABLES`, `CAFE_MIN_DURATION`, `CAFE_MAX_DURATION`,
    /// `CAFE_TIME_UNIT_MS`, `CAFE_POLL_INTERVAL`, `CAFE_CLOCK`, `CAFE_SEED`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable that failed to parse, or a
    /// validation message.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = parse_var(&lookup, "CAFE_TABLES")? {
            cfg.tables = v;
        }
        if let Some(v) = parse_var(&lookup, "CAFE_MIN_DURATION")? {
            cfg.min_duration = v;
        }
        if let Some(v) = parse_var(&lookup, "CAFE_MAX_DURATION")? {
            cfg.max_duration = v;
        }
        if let Some(v) = parse_var(&lookup, "CAFE_TIME_UNIT_MS")? {
            cfg.time_unit_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "CAFE_POLL_INTERVAL")? {
            cfg.poll_interval_units = v;
        }
        if let Some(v) = parse_var(&lookup, "CAFE_CLOCK")? {
            cfg.clock = v;
        }
        if let Some(v) = parse_var(&lookup, "CAFE_SEED")? {
            cfg.seed = Some(v);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key)
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| format!("{key}: cannot parse `{raw}`: {e}"))
        })
        .transpose()
}
