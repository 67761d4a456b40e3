//! Data store trait
//!
//! The credential store and role-permission graph as seen by the
//! authentication subsystem. Uniqueness is enforced on user email, role name,
//! permission key, and on both join pairs.

use crate::core::models::{NewRole, Permission, Role, RoleGrant, User, UserWithRoles};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Store operations needed for sign-in and access administration
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Find a user by email, compared exactly as stored
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by ID
    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Roles assigned to a user, each with its attached permissions
    async fn find_roles_for_user(&self, user_id: Uuid) -> Result<Vec<RoleGrant>>;

    /// Insert a user. Fails with `Conflict` if the email is taken.
    async fn create_user(&self, user: &User) -> Result<User>;

    /// Replace a user's password hash
    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()>;

    /// Delete a user and all of their role memberships.
    /// Returns `false` if no such user existed.
    async fn delete_user(&self, user_id: Uuid) -> Result<bool>;

    /// All users with their roles, newest first
    async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>>;

    /// Grant a role. Granting a role the user already holds is a no-op.
    async fn upsert_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()>;

    /// Revoke a role. Returns `false` if the user did not hold it.
    async fn delete_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<bool>;

    /// Create a role and attach the named permissions.
    /// Fails with `Conflict` on a duplicate name and `NotFound` on an unknown key.
    async fn create_role(&self, role: &NewRole) -> Result<Role>;

    /// Find a role by its unique name
    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>>;

    /// All roles ordered by name
    async fn list_roles(&self) -> Result<Vec<Role>>;

    /// Insert a permission or update the description of an existing key
    async fn upsert_permission(&self, key: &str, description: Option<&str>)
    -> Result<Permission>;

    /// All permissions ordered by key
    async fn list_permissions(&self) -> Result<Vec<Permission>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<()>;
}
