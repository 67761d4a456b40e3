//! Session token types and wire format

use crate::auth::types::SessionClaims;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// `iss` of every session token
pub const SESSION_ISSUER: &str = "healthops";
/// `aud` of every session token
pub const SESSION_AUDIENCE: &str = "session";

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct SessionCodec {
    /// Encoding key for signing tokens
    pub(super) encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    pub(super) decoding_key: DecodingKey,
    /// JWT algorithm
    pub(super) algorithm: Algorithm,
    /// Token lifetime in seconds
    pub(super) max_age: u64,
    /// Token age in seconds after which it is re-issued
    pub(super) update_age: u64,
    /// Token issuer
    pub(super) issuer: String,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("algorithm", &self.algorithm)
            .field("max_age", &self.max_age)
            .field("update_age", &self.update_age)
            .field("issuer", &self.issuer)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// Token payload, tagged with its format version.
///
/// A payload with an unknown `ver` or a missing field fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "ver")]
pub enum TokenPayload {
    #[serde(rename = "1")]
    V1(TokenClaimsV1),
}

/// Version 1 of the session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaimsV1 {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Role names
    pub roles: BTreeSet<String>,
    /// Permission keys
    pub permissions: BTreeSet<String>,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// JWT ID
    pub jti: String,
}

impl TokenPayload {
    pub(super) fn into_decoded(self) -> DecodedSession {
        match self {
            TokenPayload::V1(claims) => DecodedSession {
                claims: SessionClaims {
                    subject: claims.sub,
                    roles: claims.roles,
                    permissions: claims.permissions,
                },
                issued_at: claims.iat,
                expires_at: claims.exp,
            },
        }
    }
}

/// A verified session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSession {
    pub claims: SessionClaims,
    /// Issued at timestamp (seconds since epoch)
    pub issued_at: u64,
    /// Expiration timestamp (seconds since epoch)
    pub expires_at: u64,
}
