//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::config::models::auth::warn_insecure_config;
use crate::server::middleware::SessionCookie;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is behind an `Arc`; cloning per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Session cookie attributes
    cookie: SessionCookie,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, storage: StorageLayer) -> Self {
        let cookie = SessionCookie::new(
            config.auth().cookie_name.clone(),
            config.auth().cookie_secure,
        );
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage: Arc::new(storage),
            cookie,
        }
    }

    /// Build state from configuration: connects storage, wires the auth
    /// system to the store, and seeds the permission catalogue
    pub async fn initialize(config: Config, migrate: bool) -> crate::utils::error::Result<Self> {
        warn_insecure_config(config.auth());

        let storage = StorageLayer::new(config.storage()).await?;
        if migrate {
            storage.migrate().await?;
        }

        let auth = AuthSystem::new(config.auth(), storage.store())?;
        auth.rbac().ensure_catalog().await?;

        Ok(Self::new(config, auth, storage))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Session cookie attributes
    pub fn cookie(&self) -> &SessionCookie {
        &self.cookie
    }
}
