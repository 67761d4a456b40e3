//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter once at startup. `RUST_LOG`
//! takes precedence over the configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{HealthOpsError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for the configured level, letting `RUST_LOG` override it
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(format!("{},sqlx=warn,sea_orm=info", config.level))
        .map_err(|e| HealthOpsError::config(format!("Invalid log level {}: {}", config.level, e)))
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| HealthOpsError::internal(format!("Failed to install logger: {}", e)))
}
