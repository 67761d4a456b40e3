//! Authentication and authorization types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// The only message a user ever sees for a failed sign-in
pub const GENERIC_AUTH_FAILURE_MESSAGE: &str = "Invalid email or password";

/// Identity context carried by a session token.
///
/// A point-in-time snapshot of the user's roles and permissions taken when the
/// session was issued. It is never re-read from the store while the token lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub subject: Uuid,
    /// Role names
    pub roles: BTreeSet<String>,
    /// Permission keys
    pub permissions: BTreeSet<String>,
}

impl SessionClaims {
    /// Build claims, deduplicating roles and permissions
    pub fn new<R, P>(subject: Uuid, roles: R, permissions: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            subject,
            roles: roles.into_iter().map(Into::into).collect(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Check role membership
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Check permission membership
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Why a sign-in attempt failed. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailureReason {
    /// Malformed email or too-short password
    InvalidInput,
    /// No user with that email
    NotFound,
    /// User exists but has no password hash
    NoPassword,
    /// Password did not match
    WrongPassword,
}

impl AuthFailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthFailureReason::InvalidInput => "invalid_input",
            AuthFailureReason::NotFound => "not_found",
            AuthFailureReason::NoPassword => "no_password",
            AuthFailureReason::WrongPassword => "wrong_password",
        }
    }
}

/// Failed sign-in. `Display` is identical for every reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFailure {
    pub reason: AuthFailureReason,
}

impl AuthFailure {
    pub fn new(reason: AuthFailureReason) -> Self {
        Self { reason }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GENERIC_AUTH_FAILURE_MESSAGE)
    }
}

/// A freshly signed session, ready to be handed to the transport
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Claims embedded in the token
    pub claims: SessionClaims,
    /// Signed bearer token
    pub token: String,
    /// Lifetime of the token in seconds
    pub max_age: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deduplicate() {
        let claims = SessionClaims::new(
            Uuid::new_v4(),
            ["staff", "staff"],
            ["patients.read", "patients.write", "patients.read"],
        );

        assert_eq!(claims.roles.len(), 1);
        assert_eq!(claims.permissions.len(), 2);
        assert!(claims.has_role("staff"));
        assert!(claims.has_permission("patients.write"));
        assert!(!claims.has_permission("billing.write"));
    }

    #[test]
    fn test_claims_order_insensitive() {
        let subject = Uuid::new_v4();
        let a = SessionClaims::new(subject, ["a", "b"], ["x.read", "y.read"]);
        let b = SessionClaims::new(subject, ["b", "a"], ["y.read", "x.read"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_claims_are_valid() {
        let claims = SessionClaims::new(Uuid::new_v4(), Vec::<String>::new(), Vec::<String>::new());
        assert!(claims.roles.is_empty());
        assert!(!claims.has_permission("patients.read"));
    }

    #[test]
    fn test_failure_display_is_generic() {
        assert_eq!(
            AuthFailure::new(AuthFailureReason::NotFound).to_string(),
            AuthFailure::new(AuthFailureReason::WrongPassword).to_string()
        );
        assert_eq!(
            AuthFailure::new(AuthFailureReason::NoPassword).to_string(),
            GENERIC_AUTH_FAILURE_MESSAGE
        );
    }
}
