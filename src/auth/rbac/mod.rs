//! Role-Based Access Control (RBAC) system
//!
//! Users hold roles, roles hold permissions. At sign-in the graph is
//! flattened into the role names and permission keys carried by the session.

mod helpers;
pub mod permissions;
pub mod roles;
mod system;
mod types;

pub use helpers::flatten_grants;
pub use system::RbacSystem;
pub use types::{PermissionDef, RoleDef};
