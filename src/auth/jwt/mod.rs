//! Session token handling
//!
//! Encodes [`SessionClaims`](crate::auth::types::SessionClaims) into a signed,
//! stateless bearer token and decodes it back.

mod handler;
pub mod types;
mod utils;


pub use types::{DecodedSession, SessionCodec};
