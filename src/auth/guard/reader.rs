//! Session reader

use crate::auth::jwt::{DecodedSession, SessionCodec};
use crate::auth::types::SessionClaims;
use tracing::debug;

/// Decodes the current request's session token
#[derive(Debug, Clone)]
pub struct SessionReader {
    codec: SessionCodec,
}

impl SessionReader {
    pub fn new(codec: SessionCodec) -> Self {
        Self { codec }
    }

    /// Decode a token, treating every failure as "no session"
    pub fn decode(&self, token: Option<&str>) -> Option<DecodedSession> {
        let token = token.filter(|t| !t.is_empty())?;

        match self.codec.decode(token) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!("Discarding undecodable session token: {}", e);
                None
            }
        }
    }

    /// Claims of the current session, or `None` for an anonymous caller
    pub fn current_session(&self, token: Option<&str>) -> Option<SessionClaims> {
        self.decode(token).map(|session| session.claims)
    }

    pub fn codec(&self) -> &SessionCodec {
        &self.codec
    }
}
