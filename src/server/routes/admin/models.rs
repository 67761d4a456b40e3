//! Admin request and response models

use crate::core::models::{Permission, Role, UserWithRoles};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An absent or empty role id leaves memberships unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignRoleRequest {
    #[serde(default, rename = "roleId")]
    pub role_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub users: Vec<UserWithRoles>,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize)]
pub struct RevokeResult {
    pub removed: bool,
}
