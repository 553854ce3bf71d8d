//! Demo: seat the default guest list at the configured number of tables.
//!
//! Configuration comes from `CAFE_*` environment variables or a `.env` file.

use cafe_seating::config::SeatingConfig;
use cafe_seating::core::{AppResult, CallbackEventSink, SeatingEvent};
use cafe_seating::runtime::run_simulation;
use cafe_seating::util::{init_tracing, DEFAULT_GUESTS};

fn main() -> AppResult<()> {
    init_tracing();
    let config = SeatingConfig::from_env().map_err(anyhow::Error::msg)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get().max(1))
        .thread_name("cafe-worker")
        .enable_all()
        .build()?;

    let sink = CallbackEventSink::new(|event: &SeatingEvent| println!("{event}"));
    let summary = runtime.block_on(run_simulation(&config, &DEFAULT_GUESTS, sink))?;

    tracing::info!("run summary: {}", serde_json::to_string(&summary)?);
    Ok(())
}
