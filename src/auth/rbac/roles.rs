//! Default roles

use super::types::{PermissionDef, RoleDef};

pub const ADMIN_ROLE: &str = "admin";
pub const STAFF_ROLE: &str = "staff";

/// Roles created when absent. Existing roles are never modified.
pub const DEFAULT_ROLES: &[RoleDef] = &[
    RoleDef {
        name: ADMIN_ROLE,
        description: "Full system access",
        grants: |_| true,
    },
    RoleDef {
        name: STAFF_ROLE,
        description: "Clinical staff access",
        grants: |permission: &PermissionDef| !permission.key.starts_with("admin"),
    },
];
