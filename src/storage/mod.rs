//! Storage layer
//!
//! Selects the backend for the credential store and role-permission graph
//! and owns its lifecycle: constructed once at startup, closed at shutdown.

/// Database storage module
pub mod database;
/// In-process storage module
pub mod memory;

pub use memory::MemoryStore;

use crate::config::StorageConfig;
use crate::core::traits::AuthStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer
#[derive(Clone)]
pub struct StorageLayer {
    /// Store handle shared with the auth system
    store: Arc<dyn AuthStore>,
    /// Database backend, when one is configured
    database: Option<Arc<database::Database>>,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("backend", &self.backend_name())
            .finish()
    }
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if config.database.enabled {
            debug!("Connecting to database");
            let database = Arc::new(database::Database::new(&config.database).await?);
            let store: Arc<dyn AuthStore> = database.clone();
            info!("Storage layer initialized ({:?})", database.backend_type());
            return Ok(Self {
                store,
                database: Some(database),
            });
        }

        warn!("Database disabled, using in-memory store; data is lost on shutdown");
        Ok(Self::in_memory())
    }

    /// Storage layer over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            database: None,
        }
    }

    /// Run database migrations. No-op for the in-memory store.
    pub async fn migrate(&self) -> Result<()> {
        match &self.database {
            Some(database) => database.migrate().await,
            None => {
                debug!("In-memory store needs no migrations");
                Ok(())
            }
        }
    }

    /// Store handle
    pub fn store(&self) -> Arc<dyn AuthStore> {
        self.store.clone()
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }

    /// Close all connections
    pub async fn close(&self) -> Result<()> {
        info!("Closing storage connections");
        if let Some(database) = &self.database {
            database.close().await?;
        }
        info!("Storage connections closed");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        match &self.database {
            Some(_) => "database",
            None => "memory",
        }
    }
}
