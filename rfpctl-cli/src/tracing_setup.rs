//! Tracing setup for the rfpctl CLI
//!
//! Usage:
//!   rfpctl --debug ...            # Debug logging to console
//!   RUST_LOG=rfpctl=debug rfpctl  # Fine-grained log control
//!
//! In TUI mode the default filter drops to `error` so log lines do not
//! scribble over the alternate screen.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Running the TUI: keep console output quiet by default
    pub tui: bool,
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_filter = if config.debug {
        "debug"
    } else if config.tui {
        "error"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
