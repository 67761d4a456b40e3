//! Top-level application configuration

use super::*;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the session secret
pub const ENV_SESSION_SECRET: &str = "HEALTHOPS_SESSION_SECRET";
/// Environment variable overriding (and enabling) the database URL
pub const ENV_DATABASE_URL: &str = "HEALTHOPS_DATABASE_URL";
/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "HEALTHOPS_HOST";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "HEALTHOPS_PORT";

/// Application configuration as read from YAML
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Apply environment variable overrides
    pub fn apply_env(mut self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))?;
        Ok(self)
    }

    pub(crate) fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(ENV_SESSION_SECRET) {
            self.auth.session_secret = secret;
        }
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.storage.database.url = url;
            self.storage.database.enabled = true;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.parse().map_err(|_| {
                crate::utils::error::HealthOpsError::Config(format!(
                    "{} must be a port number, got {:?}",
                    ENV_PORT, port
                ))
            })?;
        }
        Ok(())
    }
}
