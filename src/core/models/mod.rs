//! Core data models
//!
//! Records held by the credential store and the role-permission graph.

pub mod rbac;
pub mod user;

pub use rbac::{NewRole, Permission, Role, RoleGrant};
pub use user::{User, UserWithRoles};
