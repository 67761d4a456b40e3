//! Authentication and authorization system
//!
//! Credentials are checked once at sign-in, where the user's roles and
//! permissions are flattened into a signed session token. Every later
//! request is authorized from that token alone.

pub mod guard;
pub mod jwt;
pub mod password;
pub mod rbac;
mod system;
pub mod types;
mod user_management;
pub mod validation;

pub use guard::{Access, AccessGuard, Denial, Requirement, SessionReader};
pub use jwt::{DecodedSession, SessionCodec};
pub use system::AuthSystem;
pub use types::{AuthFailure, AuthFailureReason, IssuedSession, SessionClaims};
