//! RBAC system core functionality

use crate::auth::types::SessionClaims;
use crate::core::models::{NewRole, Permission, Role};
use crate::core::traits::AuthStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::helpers::flatten_grants;
use super::permissions::PERMISSION_CATALOG;
use super::roles::DEFAULT_ROLES;

/// Role-permission graph backed by the data store
#[derive(Clone)]
pub struct RbacSystem {
    store: Arc<dyn AuthStore>,
}

impl std::fmt::Debug for RbacSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RbacSystem").finish_non_exhaustive()
    }
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }

    /// Resolve a user's roles and permissions into session claims.
    ///
    /// This is the only point where the graph is read for authorization, and
    /// it happens once per sign-in.
    pub async fn resolve_claims(&self, user_id: Uuid) -> Result<SessionClaims> {
        let grants = self.store.find_roles_for_user(user_id).await?;
        let claims = flatten_grants(user_id, &grants);

        debug!(
            "Resolved {} roles and {} permissions for user {}",
            claims.roles.len(),
            claims.permissions.len(),
            user_id
        );
        Ok(claims)
    }

    /// Make sure the permission catalogue and default roles exist.
    ///
    /// Safe to run on every start: permissions are upserted, and roles that
    /// already exist are left untouched.
    pub async fn ensure_catalog(&self) -> Result<()> {
        info!("Ensuring permission catalogue and default roles");

        for def in PERMISSION_CATALOG {
            self.store
                .upsert_permission(def.key, Some(def.description))
                .await?;
        }

        for def in DEFAULT_ROLES {
            if self.store.find_role_by_name(def.name).await?.is_some() {
                debug!("Role {} already exists", def.name);
                continue;
            }

            let new_role = NewRole {
                name: def.name.to_string(),
                description: Some(def.description.to_string()),
                permission_keys: PERMISSION_CATALOG
                    .iter()
                    .filter(|p| (def.grants)(p))
                    .map(|p| p.key.to_string())
                    .collect(),
            };
            self.store.create_role(&new_role).await?;
            info!("Created default role {}", def.name);
        }

        debug!("Permission catalogue holds {} keys", PERMISSION_CATALOG.len());
        Ok(())
    }

    /// List all roles
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.store.list_roles().await
    }

    /// List all permissions
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.store.list_permissions().await
    }
}
