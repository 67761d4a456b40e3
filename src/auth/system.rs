//! Core authentication system implementation

use super::guard::{AccessGuard, SessionReader};
use super::jwt::SessionCodec;
use super::password::{verify_against_dummy, verify_password};
use super::rbac::RbacSystem;
use super::types::{AuthFailure, AuthFailureReason, IssuedSession, SessionClaims};
use super::validation::{is_valid_email, is_valid_password};
use crate::config::AuthConfig;
use crate::core::traits::AuthStore;
use crate::utils::error::{HealthOpsError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main authentication system
///
/// Owns the session codec and the access guard, and borrows the store handle
/// it was constructed with. Cloning is cheap.
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    pub(super) config: Arc<AuthConfig>,
    /// Credential store and role-permission graph
    pub(super) store: Arc<dyn AuthStore>,
    /// Session token codec
    pub(super) codec: Arc<SessionCodec>,
    /// Access guard
    pub(super) guard: Arc<AccessGuard>,
    /// RBAC system
    pub(super) rbac: Arc<RbacSystem>,
}

impl std::fmt::Debug for AuthSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSystem")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, store: Arc<dyn AuthStore>) -> Result<Self> {
        info!("Initializing authentication system");

        let config = Arc::new(config.clone());
        let codec = SessionCodec::new(&config)?;
        let guard = AccessGuard::new(SessionReader::new(codec.clone()));
        let rbac = RbacSystem::new(store.clone());

        info!("Authentication system initialized successfully");

        Ok(Self {
            config,
            store,
            codec: Arc::new(codec),
            guard: Arc::new(guard),
            rbac: Arc::new(rbac),
        })
    }

    /// Verify credentials and resolve the caller's claims.
    ///
    /// Every failure carries a reason for logging, but all of them render
    /// as the same message.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<SessionClaims> {
        if !is_valid_email(email) || !is_valid_password(password, self.config.password_min_length)
        {
            return Err(self.reject(email, AuthFailureReason::InvalidInput));
        }

        let Some(user) = self.store.find_user_by_email(email).await? else {
            verify_against_dummy(password);
            return Err(self.reject(email, AuthFailureReason::NotFound));
        };

        let Some(hash) = user.password_hash.as_deref().filter(|h| !h.is_empty()) else {
            verify_against_dummy(password);
            return Err(self.reject(email, AuthFailureReason::NoPassword));
        };

        if !verify_password(password, hash) {
            return Err(self.reject(email, AuthFailureReason::WrongPassword));
        }

        let claims = self.rbac.resolve_claims(user.id).await?;
        info!("User {} authenticated", user.id);
        Ok(claims)
    }

    /// Authenticate and encode the resulting claims into a session token
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IssuedSession> {
        let claims = self.authenticate(email, password).await?;
        let token = self.codec.encode(&claims)?;

        debug!("Issued session for user {}", claims.subject);
        Ok(IssuedSession {
            claims,
            token,
            max_age: self.codec.max_age(),
        })
    }

    fn reject(&self, email: &str, reason: AuthFailureReason) -> HealthOpsError {
        warn!("Sign-in failed for {}: {}", email, reason.as_str());
        AuthFailure::new(reason).into()
    }

    /// Get authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Get the store handle
    pub fn store(&self) -> &Arc<dyn AuthStore> {
        &self.store
    }

    /// Get session codec
    pub fn codec(&self) -> &SessionCodec {
        &self.codec
    }

    /// Get access guard
    pub fn guard(&self) -> &AccessGuard {
        &self.guard
    }

    /// Get RBAC system
    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }
}
