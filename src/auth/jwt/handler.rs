//! Core session codec implementation

use super::types::{
    DecodedSession, SESSION_AUDIENCE, SESSION_ISSUER, SessionCodec, TokenClaimsV1, TokenPayload,
};
use super::utils::now_secs;
use crate::auth::types::SessionClaims;
use crate::config::AuthConfig;
use crate::utils::error::{HealthOpsError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;
use uuid::Uuid;

impl SessionCodec {
    /// Create a codec from the auth configuration
    pub fn new(config: &AuthConfig) -> Result<Self> {
        if config.session_secret.is_empty() {
            return Err(HealthOpsError::config("Session secret is required"));
        }

        let secret = config.session_secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            max_age: config.session_max_age,
            update_age: config.session_update_age,
            issuer: SESSION_ISSUER.to_string(),
        })
    }

    /// Sign a session token carrying `claims`
    pub fn encode(&self, claims: &SessionClaims) -> Result<String> {
        self.encode_at(claims, now_secs()?)
    }

    pub(crate) fn encode_at(&self, claims: &SessionClaims, issued_at: u64) -> Result<String> {
        let payload = TokenPayload::V1(TokenClaimsV1 {
            sub: claims.subject,
            roles: claims.roles.clone(),
            permissions: claims.permissions.clone(),
            iat: issued_at,
            exp: issued_at + self.max_age,
            iss: self.issuer.clone(),
            aud: SESSION_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        });

        let header = Header::new(self.algorithm);
        let token = encode(&header, &payload, &self.encoding_key)?;

        debug!("Created session token for user: {}", claims.subject);
        Ok(token)
    }

    /// Verify and decode a session token.
    ///
    /// Fails on a bad signature, an expired token, a foreign issuer or
    /// audience, and on any payload that is not a known claims version.
    pub fn decode(&self, token: &str) -> Result<DecodedSession> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[SESSION_AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        let token_data = decode::<TokenPayload>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims.into_decoded())
    }

    /// Whether an admitted session is old enough to be re-issued
    pub fn needs_refresh(&self, session: &DecodedSession) -> bool {
        match now_secs() {
            Ok(now) => now.saturating_sub(session.issued_at) >= self.update_age,
            Err(_) => false,
        }
    }

    /// Re-issue a token with the same claims and a fresh lifetime.
    ///
    /// The claims are copied from the old token as they are; roles granted or
    /// revoked since sign-in are not picked up.
    pub fn refresh(&self, session: &DecodedSession) -> Result<String> {
        self.encode(&session.claims)
    }
}
