//! Smelter application entry point.
//!
//! Resolves configuration, builds the batch store, and serves the HTTP API
//! until the process is stopped.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{CliArgs, ConfigSource};
use smelter_api::{start_server, AppState};
use smelter_core::config::SmelterConfig;
use smelter_store::BatchStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let source = args.resolve_config_source();
    let loaded = match &source {
        ConfigSource::Explicit(path) => SmelterConfig::load(path),
        ConfigSource::Default(path) => SmelterConfig::load_or_default(path),
    };

    // RUST_LOG wins over --log-level and the config file.
    let level = args.resolve_log_level(
        loaded
            .as_ref()
            .ok()
            .map(|config| config.general.log_level.as_str()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting Smelter v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                path = %source.path().display(),
                error = %e,
                "Failed to load configuration"
            );
            return Err(e.into());
        }
    };
    args.apply_overrides(&mut config);
    tracing::info!(path = %source.path().display(), "Configuration resolved");

    let store = match BatchStore::seeded() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build batch store");
            return Err(e.into());
        }
    };

    let state = AppState::new(config, store);

    if let Err(e) = start_server(state).await {
        tracing::error!(error = %e, "API server stopped");
        return Err(e.into());
    }

    Ok(())
}
