//! Error types for HealthOps

use crate::auth::guard::Denial;
use crate::auth::types::AuthFailure;
use thiserror::Error;

/// Result type alias for HealthOps
pub type Result<T> = std::result::Result<T, HealthOpsError>;

/// Main error type for HealthOps
#[derive(Error, Debug)]
pub enum HealthOpsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Credential verification failed. The reason is kept for logs and
    /// tests only; the rendered message is always the same.
    #[error("{0}")]
    Authentication(AuthFailure),

    /// Access guard denial
    #[error("Access denied: {0}")]
    Denied(Denial),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
