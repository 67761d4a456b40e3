//! # HealthOps
//!
//! Authentication, sessions and role-permission access control for a
//! healthcare operations back office.
//!
//! ## Features
//!
//! - **Credential sign-in**: email and bcrypt-hashed password, with a single
//!   generic failure message regardless of cause
//! - **Stateless sessions**: signed tokens carrying a snapshot of the user's
//!   roles and permissions, re-issued as they age
//! - **Role-permission model**: users hold roles, roles grant permissions,
//!   seeded with `admin` and `staff`
//! - **Access guard**: handlers require a session, a role or a permission
//!   and redirect to sign-in or the unauthorized page otherwise
//! - **Route gate**: coarse perimeter check over protected path prefixes
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use healthops::{Config, HealthOps};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/healthops.yaml").await?;
//!     let app = HealthOps::new(config, true).await?;
//!     app.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{Access, AuthSystem, Denial, Requirement, SessionClaims};
pub use config::Config;
pub use core::traits::AuthStore;
pub use utils::error::{HealthOpsError, Result};

use tracing::info;

/// A configured HealthOps service
pub struct HealthOps {
    server: server::server::HttpServer,
}

impl HealthOps {
    /// Connect storage, seed the permission catalogue and build the server
    pub async fn new(config: Config, migrate: bool) -> Result<Self> {
        info!("Creating HealthOps instance");

        let server = server::server::HttpServer::new(&config, migrate).await?;
        Ok(Self { server })
    }

    /// Serve until shutdown
    pub async fn run(self) -> Result<()> {
        info!(
            "Starting HealthOps on {}",
            self.server.config().address()
        );
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "healthops");
    }
}
