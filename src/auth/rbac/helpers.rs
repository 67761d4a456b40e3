//! Helper functions for RBAC operations

use crate::auth::types::SessionClaims;
use crate::core::models::RoleGrant;
use uuid::Uuid;

/// Flatten role grants into session claims.
///
/// The permission set is exactly the union of the permissions attached to
/// each granted role. Duplicates collapse; an empty grant list is valid.
pub fn flatten_grants(subject: Uuid, grants: &[RoleGrant]) -> SessionClaims {
    SessionClaims::new(
        subject,
        grants.iter().map(|grant| grant.role.name.clone()),
        grants
            .iter()
            .flat_map(|grant| grant.permissions.iter().map(|p| p.key.clone())),
    )
}
