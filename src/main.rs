//! Roster cache CLI.
//!
//! Runs the daily roster pass: fetch the Sleeper player map (or load
//! today's cached copy), drop non-fantasy positions, and persist the
//! cleansed roster back as the new baseline.
//!
//! Usage: `rostercache [cache-dir]` - defaults to the platform cache
//! directory when no directory is given.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rostercache::filter::{default_excluded_positions, exclude_by_position};
use rostercache::{CacheConfig, CacheStore, SleeperClient};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(dir) => CacheConfig::in_dir(dir),
        None => CacheConfig::default_location()?,
    };

    let store = CacheStore::new(config)?;
    let client = SleeperClient::new()?;

    let players = store.get_dataset(&client).await?;
    info!(count = players.len(), "Roster loaded");

    let cleansed = exclude_by_position(&players, &default_excluded_positions());
    info!(
        kept = cleansed.len(),
        removed = players.len() - cleansed.len(),
        "Dropped non-fantasy positions"
    );

    store.save_dataset(&cleansed)?;
    Ok(())
}
