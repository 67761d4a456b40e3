//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite instance with migrations applied.

use healthops::config::DatabaseConfig;
use healthops::core::traits::AuthStore;
use healthops::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    pub fn config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            // An in-memory database lives on a single connection
            max_connections: 1,
            connection_timeout: 5,
            enabled: true,
        }
    }

    /// Create a migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&Self::config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// The database as an auth store
    pub fn store(&self) -> Arc<dyn AuthStore> {
        self.inner.clone()
    }
}
