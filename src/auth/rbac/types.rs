//! RBAC catalogue definitions

/// Permission catalogue entry
#[derive(Debug, Clone, Copy)]
pub struct PermissionDef {
    /// Permission key
    pub key: &'static str,
    /// Permission description
    pub description: &'static str,
}

/// Default role definition
#[derive(Debug, Clone, Copy)]
pub struct RoleDef {
    /// Role name
    pub name: &'static str,
    /// Role description
    pub description: &'static str,
    /// Which catalogue permissions the role receives
    pub grants: fn(&PermissionDef) -> bool,
}
