//! User and role management operations
//!
//! Callers are expected to have passed `admin.manage` (or, for
//! `change_password`, any session) through the access guard first.

use super::password::{hash_password, verify_password};
use super::system::AuthSystem;
use super::types::{AuthFailure, AuthFailureReason};
use super::validation::{is_valid_email, is_valid_password};
use crate::core::models::{NewRole, Role, User, UserWithRoles};
use crate::utils::error::{HealthOpsError, Result};
use tracing::info;
use uuid::Uuid;

impl AuthSystem {
    /// Create a new user with a password
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HealthOpsError::validation("Name is required"));
        }
        if !is_valid_email(email) {
            return Err(HealthOpsError::validation("Invalid email address"));
        }
        if !is_valid_password(password, self.config.password_min_length) {
            return Err(HealthOpsError::validation(format!(
                "Password must be at least {} characters",
                self.config.password_min_length
            )));
        }

        let password_hash = hash_password(password)?;
        let user = User::new(Some(name.to_string()), email.to_string(), Some(password_hash));

        let user = self.store.create_user(&user).await?;
        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Grant a role. Granting a role already held is a no-op.
    pub async fn grant_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()> {
        self.store.upsert_user_role(user_id, role_id).await?;
        info!("Granted role {} to user {}", role_id, user_id);
        Ok(())
    }

    /// Revoke a role. Returns whether the user held it.
    pub async fn revoke_role(&self, user_id: Uuid, role_id: Uuid) -> Result<bool> {
        let removed = self.store.delete_user_role(user_id, role_id).await?;
        if removed {
            info!("Revoked role {} from user {}", role_id, user_id);
        }
        Ok(removed)
    }

    /// Delete a user along with their role memberships
    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        if !self.store.delete_user(user_id).await? {
            return Err(HealthOpsError::not_found("User not found"));
        }
        info!("Deleted user {}", user_id);
        Ok(())
    }

    /// Create a role with permissions attached by key
    pub async fn create_role(&self, role: &NewRole) -> Result<Role> {
        if role.name.trim().is_empty() {
            return Err(HealthOpsError::validation("Role name is required"));
        }

        let created = self.store.create_role(role).await?;
        info!(
            "Created role {} with {} permissions",
            created.name,
            role.permission_keys.len()
        );
        Ok(created)
    }

    /// All users with their roles, newest first
    pub async fn list_users(&self) -> Result<Vec<UserWithRoles>> {
        self.store.list_users_with_roles().await
    }

    /// Change the caller's own password after checking the current one.
    ///
    /// Already-issued sessions are left as they are.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        if !is_valid_password(new_password, self.config.password_min_length) {
            return Err(HealthOpsError::validation(format!(
                "Password must be at least {} characters",
                self.config.password_min_length
            )));
        }

        let user = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| HealthOpsError::not_found("User not found"))?;

        let current_ok = user
            .password_hash
            .as_deref()
            .is_some_and(|hash| verify_password(current_password, hash));
        if !current_ok {
            return Err(AuthFailure::new(AuthFailureReason::WrongPassword).into());
        }

        let new_hash = hash_password(new_password)?;
        self.store.update_user_password(user_id, &new_hash).await?;

        info!("Password changed for user {}", user_id);
        Ok(())
    }
}
