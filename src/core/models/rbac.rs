//! Role and permission models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    /// Unique role name
    pub name: String,
    pub description: Option<String>,
}

impl Role {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
        }
    }
}

/// Permission record, keyed by a dot-namespaced string such as `billing.write`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    /// Unique permission key
    pub key: String,
    pub description: Option<String>,
}

impl Permission {
    pub fn new(key: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.into(),
            description,
        }
    }

    /// Namespace part of the key (`billing` for `billing.write`)
    pub fn namespace(&self) -> &str {
        self.key.split('.').next().unwrap_or(&self.key)
    }
}

/// A role assigned to a user, with the permissions attached to that role
#[derive(Debug, Clone, Serialize)]
pub struct RoleGrant {
    pub role: Role,
    pub permissions: Vec<Permission>,
}

/// Payload for creating a role
#[derive(Debug, Clone, Deserialize)]
pub struct NewRole {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "permissionKeys")]
    pub permission_keys: Vec<String>,
}
