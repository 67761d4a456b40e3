//! User models
//!
//! Credential store records. A user may exist without a password hash when it
//! was provisioned through an external identity provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rbac::Role;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: Option<String>,
    /// Email address (unique, compared exactly as stored)
    pub email: String,
    /// Salted password hash
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(name: Option<String>, email: String, password_hash: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Whether this account can sign in with a password
    pub fn has_password(&self) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|hash| !hash.is_empty())
    }
}

/// A user together with the roles currently assigned to them
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRoles {
    #[serde(flatten)]
    pub user: User,
    pub roles: Vec<Role>,
}
