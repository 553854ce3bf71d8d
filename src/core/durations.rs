//! Sources for guest occupation durations.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::SeatingError;

/// Shortest default occupation, in time units.
pub const MIN_DURATION: u64 = 3;
/// Longest default occupation, in time units.
pub const MAX_DURATION: u64 = 10;

/// Supplies the duration a guest stays seated.
pub trait DurationSource: Send {
    /// Draw the next duration in time units.
    fn sample(&mut self) -> u64;
}

/// Uniform draw over a closed range, `[3, 10]` by default.
#[derive(Debug, Clone)]
pub struct UniformDurations {
    range: RangeInclusive<u64>,
    rng: StdRng,
}

impl UniformDurations {
    /// Uniform durations over `[min, max]` seeded from the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::Config`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, SeatingError> {
        Self::with_rng(min, max, StdRng::from_rng(&mut rand::rng()))
    }

    /// Uniform durations with a fixed seed, for reproducible runs.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::Config`] if `min > max`.
    pub fn seeded(min: u64, max: u64, seed: u64) -> Result<Self, SeatingError> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: u64, max: u64, rng: StdRng) -> Result<Self, SeatingError> {
        if min > max {
            return Err(SeatingError::Config(format!(
                "duration range is empty: {min} > {max}"
            )));
        }
        Ok(Self {
            range: min..=max,
            rng,
        })
    }

    /// Inclusive bounds of the draw.
    #[must_use]
    pub const fn range(&self) -> &RangeInclusive<u64> {
        &self.range
    }
}

impl Default for UniformDurations {
    fn default() -> Self {
        Self {
            range: MIN_DURATION..=MAX_DURATION,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl DurationSource for UniformDurations {
    fn sample(&mut self) -> u64 {
        self.rng.random_range(self.range.clone())
    }
}

/// Replays a fixed script of durations, then repeats a fallback.
#[derive(Debug, Clone)]
pub struct ScriptedDurations {
    script: VecDeque<u64>,
    fallback: u64,
}

impl ScriptedDurations {
    /// Durations taken from `script` in order, then `fallback` forever.
    pub fn new(script: impl IntoIterator<Item = u64>, fallback: u64) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    /// Every draw returns `units`.
    #[must_use]
    pub fn constant(units: u64) -> Self {
        Self::new([], units)
    }

    /// Scripted values not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DurationSource for ScriptedDurations {
    fn sample(&mut self) -> u64 {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}
