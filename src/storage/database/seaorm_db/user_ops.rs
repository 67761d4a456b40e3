use crate::core::models::{User, UserWithRoles};
use crate::utils::error::{HealthOpsError, Result};
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user, user_role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id).one(&self.db).await?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email, exact match
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Create a new user
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain_user(user);

        entities::User::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    HealthOpsError::conflict("Email is already registered")
                }
                _ => HealthOpsError::Database(e),
            })?;

        Ok(user.clone())
    }

    /// Update user password
    pub async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        debug!("Updating password for user: {}", user_id);

        let mut user: user::ActiveModel = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| HealthOpsError::not_found("User not found"))?
            .into();

        user.password_hash = Set(Some(password_hash.to_string()));
        user.update(&self.db).await?;

        Ok(())
    }

    /// Delete a user and their role memberships
    pub async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        debug!("Deleting user: {}", user_id);

        let txn = self.db.begin().await?;

        entities::UserRole::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        let result = entities::User::delete_by_id(user_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    /// List users with their roles, newest first
    pub async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>> {
        let users = entities::User::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let roles: HashMap<Uuid, crate::core::models::Role> = entities::Role::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|role| (role.id, role.to_domain_role()))
            .collect();

        let mut memberships: HashMap<Uuid, Vec<crate::core::models::Role>> = HashMap::new();
        for edge in entities::UserRole::find().all(&self.db).await? {
            if let Some(role) = roles.get(&edge.role_id) {
                memberships.entry(edge.user_id).or_default().push(role.clone());
            }
        }

        Ok(users
            .into_iter()
            .map(|model| {
                let mut user_roles = memberships.remove(&model.id).unwrap_or_default();
                user_roles.sort_by(|a, b| a.name.cmp(&b.name));
                UserWithRoles {
                    user: model.to_domain_user(),
                    roles: user_roles,
                }
            })
            .collect())
    }

    /// Grant a role, doing nothing when the edge already exists
    pub async fn upsert_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()> {
        debug!("Granting role {} to user {}", role_id, user_id);

        if entities::User::find_by_id(user_id).one(&self.db).await?.is_none() {
            return Err(HealthOpsError::not_found("User not found"));
        }
        if entities::Role::find_by_id(role_id).one(&self.db).await?.is_none() {
            return Err(HealthOpsError::not_found("Role not found"));
        }

        let edge = user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
        };
        entities::UserRole::insert(edge)
            .on_conflict(
                sea_query::OnConflict::columns([user_role::Column::UserId, user_role::Column::RoleId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// Revoke a role; returns whether an edge was removed
    pub async fn delete_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<bool> {
        debug!("Revoking role {} from user {}", role_id, user_id);

        let result = entities::UserRole::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::RoleId.eq(role_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
