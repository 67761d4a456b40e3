//! Access guard

use super::reader::SessionReader;
use super::types::{Access, Denial, Requirement};
use crate::auth::types::SessionClaims;
use tracing::debug;

/// Imperative access checks run at the top of every protected operation
#[derive(Debug, Clone)]
pub struct AccessGuard {
    reader: SessionReader,
}

impl AccessGuard {
    pub fn new(reader: SessionReader) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &SessionReader {
        &self.reader
    }

    /// Require any valid session
    pub fn require_auth(&self, token: Option<&str>) -> Access {
        check_auth(self.reader.current_session(token))
    }

    /// Require a session holding `role`
    pub fn require_role(&self, token: Option<&str>, role: &str) -> Access {
        check_role(self.reader.current_session(token), role)
    }

    /// Require a session holding `permission`
    pub fn require_permission(&self, token: Option<&str>, permission: &str) -> Access {
        check_permission(self.reader.current_session(token), permission)
    }
}

/// Authentication check over already-decoded claims
pub fn check_auth(session: Option<SessionClaims>) -> Access {
    match session {
        Some(claims) => Access::Granted(claims),
        None => Access::Denied(Denial::Unauthenticated),
    }
}

pub fn check_role(session: Option<SessionClaims>, role: &str) -> Access {
    match check_auth(session) {
        Access::Granted(claims) if claims.has_role(role) => Access::Granted(claims),
        Access::Granted(claims) => {
            debug!("User {} lacks role {}", claims.subject, role);
            Access::Denied(Denial::Forbidden(Requirement::Role(role.to_string())))
        }
        denied => denied,
    }
}

pub fn check_permission(session: Option<SessionClaims>, permission: &str) -> Access {
    match check_auth(session) {
        Access::Granted(claims) if claims.has_permission(permission) => Access::Granted(claims),
        Access::Granted(claims) => {
            debug!("User {} lacks permission {}", claims.subject, permission);
            Access::Denied(Denial::Forbidden(Requirement::Permission(
                permission.to_string(),
            )))
        }
        denied => denied,
    }
}
