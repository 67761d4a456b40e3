use crate::core::models::{NewRole, Permission, Role, RoleGrant};
use crate::utils::error::{HealthOpsError, Result};
use sea_orm::*;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, permission, role, role_permission, user_role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Roles held by a user, each with its permissions
    pub async fn find_roles_for_user(&self, user_id: Uuid) -> Result<Vec<RoleGrant>> {
        debug!("Resolving roles for user: {}", user_id);

        let role_ids: Vec<Uuid> = entities::UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|edge| edge.role_id)
            .collect();
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = entities::Role::find()
            .filter(role::Column::Id.is_in(role_ids.clone()))
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await?;

        let edges = entities::RolePermission::find()
            .filter(role_permission::Column::RoleId.is_in(role_ids))
            .all(&self.db)
            .await?;

        let permission_ids: Vec<Uuid> = edges.iter().map(|edge| edge.permission_id).collect();
        let permissions: HashMap<Uuid, Permission> = if permission_ids.is_empty() {
            HashMap::new()
        } else {
            entities::Permission::find()
                .filter(permission::Column::Id.is_in(permission_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|model| (model.id, model.to_domain_permission()))
                .collect()
        };

        Ok(roles
            .into_iter()
            .map(|model| {
                let mut role_permissions: Vec<Permission> = edges
                    .iter()
                    .filter(|edge| edge.role_id == model.id)
                    .filter_map(|edge| permissions.get(&edge.permission_id).cloned())
                    .collect();
                role_permissions.sort_by(|a, b| a.key.cmp(&b.key));
                RoleGrant {
                    role: model.to_domain_role(),
                    permissions: role_permissions,
                }
            })
            .collect())
    }

    /// Create a role and attach its permissions by key
    pub async fn create_role(&self, new_role: &NewRole) -> Result<Role> {
        debug!("Creating role: {}", new_role.name);

        let txn = self.db.begin().await?;

        if entities::Role::find()
            .filter(role::Column::Name.eq(new_role.name.as_str()))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(HealthOpsError::conflict(format!(
                "Role {} already exists",
                new_role.name
            )));
        }

        let keys: BTreeSet<&String> = new_role.permission_keys.iter().collect();
        let mut permission_ids = Vec::with_capacity(keys.len());
        for key in keys {
            let found = entities::Permission::find()
                .filter(permission::Column::Key.eq(key.as_str()))
                .one(&txn)
                .await?
                .ok_or_else(|| HealthOpsError::not_found(format!("Unknown permission: {}", key)))?;
            permission_ids.push(found.id);
        }

        let created = Role::new(new_role.name.clone(), new_role.description.clone());
        role::ActiveModel {
            id: Set(created.id),
            name: Set(created.name.clone()),
            description: Set(created.description.clone()),
        }
        .insert(&txn)
        .await?;

        for permission_id in permission_ids {
            entities::RolePermission::insert(role_permission::ActiveModel {
                role_id: Set(created.id),
                permission_id: Set(permission_id),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(created)
    }

    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let model = entities::Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.to_domain_role()))
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        let models = entities::Role::find()
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models.iter().map(role::Model::to_domain_role).collect())
    }

    /// Insert a permission or refresh the description of an existing key
    pub async fn upsert_permission(
        &self,
        key: &str,
        description: Option<&str>,
    ) -> Result<Permission> {
        let existing = entities::Permission::find()
            .filter(permission::Column::Key.eq(key))
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(model) => {
                let mut active: permission::ActiveModel = model.into();
                active.description = Set(description.map(str::to_string));
                active.update(&self.db).await?
            }
            None => {
                permission::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    key: Set(key.to_string()),
                    description: Set(description.map(str::to_string)),
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(model.to_domain_permission())
    }

    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .order_by_asc(permission::Column::Key)
            .all(&self.db)
            .await?;
        Ok(models
            .iter()
            .map(permission::Model::to_domain_permission)
            .collect())
    }
}
