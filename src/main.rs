//! Entry point for the development seeding utility.
//!
//! Seeds the sample data set into an in-process row store and writes the
//! resulting tables as pretty-printed JSON, so the fixture file can be
//! loaded into a real backing store.

use std::path::PathBuf;
use std::process::ExitCode;

use offf_festival_core::seed::{
    MemoryStore,
    seed_sample_data,
};

/// Output path when none is given on the command line.
const DEFAULT_OUTPUT: &str = "seed-data.json";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let output: PathBuf =
        std::env::args().nth(1).map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    let mut store = MemoryStore::default();
    let summary = match seed_sample_data(&mut store).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Error seeding data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tables = store.into_tables();
    let json = match serde_json::to_string_pretty(&tables) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to encode seed data: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = std::fs::write(&output, json) {
        tracing::error!("Failed to write {:?}: {}", output, e);
        return ExitCode::FAILURE;
    }

    tracing::info!("Wrote {:?} ({:?})", output, summary);
    ExitCode::SUCCESS
}
