//! Run driver: the caller-side setup around one allocator run.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::builders::AllocatorBuilder;
use crate::config::{ClockConfig, SeatingConfig};
use crate::core::{Allocator, Clock, EventSink, Guest, SeatingError, ServeReport};
use crate::infra::InMemoryQueue;
use crate::runtime::{SimulatedClock, TokioClock};
use crate::util::guests_from;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Identifier attached to every log line of the run.
    pub run_id: Uuid,
    /// Number of tables.
    pub tables: usize,
    /// Number of guests admitted.
    pub guests: usize,
    /// Guests served.
    pub served: usize,
    /// Table scans performed by the supervisor.
    pub passes: u64,
    /// Time units until the run drained.
    pub elapsed_units: u64,
}

/// Seat guests named `names` under `config` and serve them all.
///
/// With [`ClockConfig::Tokio`] this must run inside a tokio runtime.
///
/// # Errors
///
/// Returns [`SeatingError::Config`] for an invalid configuration, or whatever
/// aborted the run.
pub async fn run_simulation<N, S>(
    config: &SeatingConfig,
    names: &[N],
    sink: S,
) -> Result<RunSummary, SeatingError>
where
    N: AsRef<str>,
    S: EventSink + 'static,
{
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", %run_id);
    let guests = guests_from(names.iter().map(|n| n.as_ref().to_string()));
    let guest_count = guests.len();
    let builder = AllocatorBuilder::new(config.clone()).with_sink(sink);

    let report = match config.clock {
        ClockConfig::Tokio => {
            let clock = TokioClock::current(Duration::from_millis(config.time_unit_ms));
            serve_all(builder.build(clock)?, guests)
                .instrument(span)
                .await?
        }
        ClockConfig::Simulated => {
            serve_all(builder.build(SimulatedClock::new())?, guests)
                .instrument(span)
                .await?
        }
    };

    Ok(RunSummary {
        run_id,
        tables: config.tables,
        guests: guest_count,
        served: report.served,
        passes: report.passes,
        elapsed_units: report.elapsed_units,
    })
}

async fn serve_all<C>(
    mut allocator: Allocator<InMemoryQueue, C>,
    guests: Vec<Guest>,
) -> Result<ServeReport, SeatingError>
where
    C: Clock,
{
    tracing::info!(guests = guests.len(), tables = allocator.tables().len(), "run starting");
    allocator.admit(guests)?;
    allocator.serve().await
}
