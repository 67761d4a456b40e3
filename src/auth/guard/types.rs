//! Access decision types

use crate::auth::types::SessionClaims;
use crate::utils::error::{HealthOpsError, Result};
use std::fmt;

/// Unauthenticated landing page
pub const SIGN_IN_PATH: &str = "/signin";
/// Authenticated-but-forbidden landing page
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// What an operation asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Role(String),
    Permission(String),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Role(role) => write!(f, "role {}", role),
            Requirement::Permission(key) => write!(f, "permission {}", key),
        }
    }
}

/// Why access was denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// No valid session
    Unauthenticated,
    /// Valid session without the required role or permission
    Forbidden(Requirement),
}

impl Denial {
    /// Where the caller is sent
    pub fn redirect_path(&self) -> &'static str {
        match self {
            Denial::Unauthenticated => SIGN_IN_PATH,
            Denial::Forbidden(_) => UNAUTHORIZED_PATH,
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::Unauthenticated => f.write_str("authentication required"),
            Denial::Forbidden(requirement) => write!(f, "missing {}", requirement),
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Access {
    Granted(SessionClaims),
    Denied(Denial),
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted(_))
    }

    /// Convert into a `Result` so a handler can bail out with `?`
    pub fn into_result(self) -> Result<SessionClaims> {
        match self {
            Access::Granted(claims) => Ok(claims),
            Access::Denied(denial) => Err(HealthOpsError::Denied(denial)),
        }
    }
}
