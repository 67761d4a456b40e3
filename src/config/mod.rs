//! Configuration management
//!
//! This module handles loading, validation, and management of the service
//! configuration. Values come from a YAML file, then environment variables
//! (a `.env` file is honoured) override the sensitive ones.

pub mod models;

pub use models::*;

use crate::utils::error::{HealthOpsError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

const REDACTED: &str = "[REDACTED]";

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HealthOpsError::Config(format!("Failed to read config file: {}", e)))?;

        let app = Self::parse_yaml(&content)?.apply_env()?;
        let config = Self { app };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults and environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let app = AppConfig::default().apply_env()?;
        let config = Self { app };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, falling back to environment-only configuration
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path).await
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            Self::from_env()
        }
    }

    fn parse_yaml(content: &str) -> Result<AppConfig> {
        serde_yaml::from_str(content)
            .map_err(|e| HealthOpsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .server
            .validate()
            .map_err(|e| HealthOpsError::Config(format!("Server config error: {}", e)))?;

        self.app
            .storage
            .database
            .validate()
            .map_err(|e| HealthOpsError::Config(format!("Database config error: {}", e)))?;

        self.app
            .auth
            .validate()
            .map_err(|e| HealthOpsError::Config(format!("Auth config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string with the session secret masked
    pub fn to_yaml(&self) -> Result<String> {
        let mut app = self.app.clone();
        app.auth.session_secret = REDACTED.to_string();

        serde_yaml::to_string(&app)
            .map_err(|e| HealthOpsError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
