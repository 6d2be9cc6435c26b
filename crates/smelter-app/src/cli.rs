//! CLI argument definitions for the Smelter service.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use smelter_core::config::SmelterConfig;

/// Smelter answers questions about production batch records over HTTP.
#[derive(Parser, Debug)]
#[command(name = "smelter", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Answer grade and material questions for timestamp lookups too.
    #[arg(long = "uniform-timestamp-rules")]
    pub uniform_timestamp_rules: bool,
}

/// Where the configuration path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag or `SMELTER_CONFIG`; a missing or bad file is fatal.
    Explicit(PathBuf),
    /// Platform default; a missing file means defaults.
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Default(p) => p,
        }
    }
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SMELTER_CONFIG env var > ~/.smelter/config.toml.
    pub fn resolve_config_source(&self) -> ConfigSource {
        self.config_source_from(std::env::var("SMELTER_CONFIG").ok())
    }

    fn config_source_from(&self, env_path: Option<String>) -> ConfigSource {
        if let Some(ref p) = self.config {
            return ConfigSource::Explicit(p.clone());
        }
        if let Some(p) = env_path {
            return ConfigSource::Explicit(PathBuf::from(p));
        }
        ConfigSource::Default(default_config_path())
    }

    /// Log level for the subscriber when `RUST_LOG` is unset.
    ///
    /// Priority: --log-level > config file > "info". `config_level` is `None`
    /// when the config file could not be loaded.
    pub fn resolve_log_level(&self, config_level: Option<&str>) -> String {
        self.log_level
            .as_deref()
            .or(config_level)
            .unwrap_or("info")
            .to_string()
    }

    /// Apply CLI flags and environment overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut SmelterConfig) {
        self.apply_overrides_from(
            config,
            std::env::var("SMELTER_HOST").ok(),
            std::env::var("SMELTER_PORT").ok(),
        );
    }

    fn apply_overrides_from(
        &self,
        config: &mut SmelterConfig,
        env_host: Option<String>,
        env_port: Option<String>,
    ) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        } else if let Some(host) = env_host.filter(|h| !h.is_empty()) {
            config.server.host = host;
        }

        if let Some(port) = self.port {
            config.server.port = port;
        } else if let Some(port) = env_port.and_then(|p| p.parse::<u16>().ok()) {
            config.server.port = port;
        }

        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }

        if self.uniform_timestamp_rules {
            config.interpreter.uniform_timestamp_rules = true;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".smelter").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".smelter").join("config.toml");
    }
    PathBuf::from("config.toml")
}
