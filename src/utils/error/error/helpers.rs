//! Helper functions for creating specific error types

use super::types::HealthOpsError;
use crate::auth::guard::Denial;
use crate::auth::types::AuthFailure;

/// Helper functions for creating specific errors
impl HealthOpsError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is a credential failure (any reason)
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Whether this error is an access guard denial
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}

impl From<AuthFailure> for HealthOpsError {
    fn from(failure: AuthFailure) -> Self {
        Self::Authentication(failure)
    }
}

impl From<Denial> for HealthOpsError {
    fn from(denial: Denial) -> Self {
        Self::Denied(denial)
    }
}
