//! Cinema Graph server
//!
//! Loads configuration (see `cinema::config`), connects the configured store
//! and serves the GraphQL API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use cinema::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing::info!(
        backend = ?config.storage.backend,
        playground = config.graphql.playground,
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let builder = ServerBuilder::from_config(&config)
        .await
        .context("Failed to initialise storage")?;

    builder.serve(&config.bind_address()).await
}
