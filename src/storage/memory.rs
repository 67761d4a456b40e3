//! In-process store
//!
//! Holds the same user/role/permission graph as the relational backend with
//! the same uniqueness rules. Used when no database is configured and in tests.

use crate::core::models::{NewRole, Permission, Role, RoleGrant, User, UserWithRoles};
use crate::core::traits::AuthStore;
use crate::utils::error::{HealthOpsError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    roles: HashMap<Uuid, Role>,
    permissions: HashMap<Uuid, Permission>,
    role_permissions: BTreeSet<(Uuid, Uuid)>,
    user_roles: BTreeSet<(Uuid, Uuid)>,
}

impl Tables {
    fn grants_for(&self, user_id: Uuid) -> Vec<RoleGrant> {
        let mut grants: Vec<RoleGrant> = self
            .user_roles
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|(_, role_id)| self.roles.get(role_id))
            .map(|role| {
                let mut permissions: Vec<Permission> = self
                    .role_permissions
                    .iter()
                    .filter(|(rid, _)| *rid == role.id)
                    .filter_map(|(_, pid)| self.permissions.get(pid).cloned())
                    .collect();
                permissions.sort_by(|a, b| a.key.cmp(&b.key));
                RoleGrant {
                    role: role.clone(),
                    permissions,
                }
            })
            .collect();
        grants.sort_by(|a, b| a.role.name.cmp(&b.role.name));
        grants
    }
}

/// Auth store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read();
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.tables.read().users.get(&user_id).cloned())
    }

    async fn find_roles_for_user(&self, user_id: Uuid) -> Result<Vec<RoleGrant>> {
        Ok(self.tables.read().grants_for(user_id))
    }

    async fn create_user(&self, user: &User) -> Result<User> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(HealthOpsError::conflict("Email is already registered"));
        }
        tables.users.insert(user.id, user.clone());
        debug!("Stored user {}", user.id);
        Ok(user.clone())
    }

    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        let mut tables = self.tables.write();
        let user = tables
            .users
            .get_mut(&user_id)
            .ok_or_else(|| HealthOpsError::not_found("User not found"))?;
        user.password_hash = Some(password_hash.to_string());
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write();
        let removed = tables.users.remove(&user_id).is_some();
        tables.user_roles.retain(|(uid, _)| *uid != user_id);
        Ok(removed)
    }

    async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>> {
        let tables = self.tables.read();
        let mut users: Vec<UserWithRoles> = tables
            .users
            .values()
            .map(|user| UserWithRoles {
                user: user.clone(),
                roles: tables
                    .grants_for(user.id)
                    .into_iter()
                    .map(|grant| grant.role)
                    .collect(),
            })
            .collect();
        users.sort_by(|a, b| b.user.created_at.cmp(&a.user.created_at));
        Ok(users)
    }

    async fn upsert_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&user_id) {
            return Err(HealthOpsError::not_found("User not found"));
        }
        if !tables.roles.contains_key(&role_id) {
            return Err(HealthOpsError::not_found("Role not found"));
        }
        tables.user_roles.insert((user_id, role_id));
        Ok(())
    }

    async fn delete_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<bool> {
        Ok(self.tables.write().user_roles.remove(&(user_id, role_id)))
    }

    async fn create_role(&self, new_role: &NewRole) -> Result<Role> {
        let mut tables = self.tables.write();
        if tables.roles.values().any(|r| r.name == new_role.name) {
            return Err(HealthOpsError::conflict(format!(
                "Role {} already exists",
                new_role.name
            )));
        }

        let mut permission_ids = Vec::with_capacity(new_role.permission_keys.len());
        for key in &new_role.permission_keys {
            let permission = tables
                .permissions
                .values()
                .find(|p| &p.key == key)
                .ok_or_else(|| HealthOpsError::not_found(format!("Unknown permission: {}", key)))?;
            permission_ids.push(permission.id);
        }

        let role = Role::new(new_role.name.clone(), new_role.description.clone());
        tables.roles.insert(role.id, role.clone());
        for permission_id in permission_ids {
            tables.role_permissions.insert((role.id, permission_id));
        }
        Ok(role)
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let tables = self.tables.read();
        Ok(tables.roles.values().find(|r| r.name == name).cloned())
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        let mut roles: Vec<Role> = self.tables.read().roles.values().cloned().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn upsert_permission(
        &self,
        key: &str,
        description: Option<&str>,
    ) -> Result<Permission> {
        let mut tables = self.tables.write();
        if let Some(existing) = tables.permissions.values_mut().find(|p| p.key == key) {
            existing.description = description.map(str::to_string);
            return Ok(existing.clone());
        }

        let permission = Permission::new(key, description.map(str::to_string));
        tables.permissions.insert(permission.id, permission.clone());
        Ok(permission)
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let mut permissions: Vec<Permission> =
            self.tables.read().permissions.values().cloned().collect();
        permissions.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(permissions)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(None, email.to_string(), Some("$2b$10$hash".to_string()))
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryStore::new();
        store.create_user(&user("a@healthops.local")).await.unwrap();

        let err = store.create_user(&user("a@healthops.local")).await.unwrap_err();
        assert!(matches!(err, HealthOpsError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_role_grants_and_cascade() {
        let store = MemoryStore::new();
        store
            .upsert_permission("patients.read", Some("View patients"))
            .await
            .unwrap();
        let role = store
            .create_role(&NewRole {
                name: "staff".to_string(),
                description: None,
                permission_keys: vec!["patients.read".to_string()],
            })
            .await
            .unwrap();
        let u = store.create_user(&user("a@healthops.local")).await.unwrap();

        store.upsert_user_role(u.id, role.id).await.unwrap();
        store.upsert_user_role(u.id, role.id).await.unwrap();

        let grants = store.find_roles_for_user(u.id).await.unwrap();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].permissions[0].key, "patients.read");

        assert!(store.delete_user(u.id).await.unwrap());
        assert!(store.find_roles_for_user(u.id).await.unwrap().is_empty());
        assert!(!store.delete_user(u.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_permission_key_rejected() {
        let store = MemoryStore::new();
        let err = store
            .create_role(&NewRole {
                name: "auditor".to_string(),
                description: None,
                permission_keys: vec!["audit.read".to_string()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, HealthOpsError::NotFound(_)));
        assert!(store.find_role_by_name("auditor").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_permission_keeps_id() {
        let store = MemoryStore::new();
        let first = store.upsert_permission("billing.read", None).await.unwrap();
        let second = store
            .upsert_permission("billing.read", Some("View billing"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.list_permissions().await.unwrap().len(), 1);
    }
}
