//! Session reading and access checks
//!
//! The reader turns the request's session token into claims (or nothing),
//! and the guard compares those claims against what an operation requires.
//! Neither touches the store.

mod access;
mod reader;
#[cfg(test)]
mod tests;
mod types;

pub use access::AccessGuard;
pub use reader::SessionReader;
pub use types::{Access, Denial, Requirement, SIGN_IN_PATH, UNAUTHORIZED_PATH};
