//! `AuthStore` implementation over SeaORM

use crate::core::models::{NewRole, Permission, Role, RoleGrant, User, UserWithRoles};
use crate::core::traits::AuthStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::types::SeaOrmDatabase;

#[async_trait]
impl AuthStore for SeaOrmDatabase {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        SeaOrmDatabase::find_user_by_email(self, email).await
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        SeaOrmDatabase::find_user_by_id(self, user_id).await
    }

    async fn find_roles_for_user(&self, user_id: Uuid) -> Result<Vec<RoleGrant>> {
        SeaOrmDatabase::find_roles_for_user(self, user_id).await
    }

    async fn create_user(&self, user: &User) -> Result<User> {
        SeaOrmDatabase::create_user(self, user).await
    }

    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        SeaOrmDatabase::update_user_password(self, user_id, password_hash).await
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        SeaOrmDatabase::delete_user(self, user_id).await
    }

    async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>> {
        SeaOrmDatabase::list_users_with_roles(self).await
    }

    async fn upsert_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()> {
        SeaOrmDatabase::upsert_user_role(self, user_id, role_id).await
    }

    async fn delete_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<bool> {
        SeaOrmDatabase::delete_user_role(self, user_id, role_id).await
    }

    async fn create_role(&self, role: &NewRole) -> Result<Role> {
        SeaOrmDatabase::create_role(self, role).await
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        SeaOrmDatabase::find_role_by_name(self, name).await
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        SeaOrmDatabase::list_roles(self).await
    }

    async fn upsert_permission(
        &self,
        key: &str,
        description: Option<&str>,
    ) -> Result<Permission> {
        SeaOrmDatabase::upsert_permission(self, key, description).await
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        SeaOrmDatabase::list_permissions(self).await
    }

    async fn health_check(&self) -> Result<()> {
        SeaOrmDatabase::health_check(self).await
    }
}
