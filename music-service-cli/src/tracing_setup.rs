//! Tracing setup for the music-service binary
//!
//! Usage:
//!   music-service --debug serve ...          # Debug logging for the service crates
//!   RUST_LOG=music_service_server=trace ...  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                                  # Replaces the default filter entirely

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Raise the service crates to debug (ignored when RUST_LOG is set)
    pub debug: bool,
}

impl TracingConfig {
    /// Filter used when RUST_LOG is absent: the service's own crates and
    /// request spans at `info`/`debug`, dependencies such as sqlx at `warn`.
    pub fn default_directives(&self) -> &'static str {
        if self.debug {
            "warn,music_service=debug,music_service_server=debug,tower_http=debug"
        } else {
            "warn,music_service=info,music_service_server=info,tower_http=info"
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

/// Install the console subscriber. Fails if one is already installed.
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
