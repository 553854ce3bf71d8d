//! Builder turning a [`SeatingConfig`] into a ready [`Allocator`].

use crate::config::SeatingConfig;
use crate::core::{
    Allocator, Clock, DurationSource, EventSink, SeatingError, Table, TracingEventSink,
    UniformDurations,
};
use crate::infra::InMemoryQueue;

/// Assembles an allocator with numbered tables and an in-memory queue.
pub struct AllocatorBuilder {
    config: SeatingConfig,
    sink: Option<Box<dyn EventSink>>,
    durations: Option<Box<dyn DurationSource>>,
}

impl AllocatorBuilder {
    /// Start from a configuration.
    #[must_use]
    pub const fn new(config: SeatingConfig) -> Self {
        Self {
            config,
            sink: None,
            durations: None,
        }
    }

    /// Configuration this builder will apply.
    #[must_use]
    pub const fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Send events to `sink` instead of `tracing`.
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Use `durations` instead of the configured uniform draw.
    #[must_use]
    pub fn with_durations(mut self, durations: impl DurationSource + 'static) -> Self {
        self.durations = Some(Box::new(durations));
        self
    }

    /// Validate the configuration and build the allocator on `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::Config`] if the configuration is invalid.
    pub fn build<C>(self, clock: C) -> Result<Allocator<InMemoryQueue, C>, SeatingError>
    where
        C: Clock,
    {
        let cfg = self.config;
        cfg.validate()
            .map_err(|e| SeatingError::Config(format!("config invalid: {e}")))?;

        let durations: Box<dyn DurationSource> = match self.durations {
            Some(durations) => durations,
            None => Box::new(match cfg.seed {
                Some(seed) => UniformDurations::seeded(cfg.min_duration, cfg.max_duration, seed)?,
                None => UniformDurations::new(cfg.min_duration, cfg.max_duration)?,
            }),
        };
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(TracingEventSink) as Box<dyn EventSink>);

        tracing::debug!(tables = cfg.tables, clock = ?cfg.clock, "building allocator");
        Ok(
            Allocator::new(Table::numbered(cfg.tables), InMemoryQueue::new(), clock)?
                .with_boxed_parts(durations, sink)
                .with_poll_interval(cfg.poll_interval_units),
        )
    }
}
