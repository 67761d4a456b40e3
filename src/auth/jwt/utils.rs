//! Session codec utility functions

use super::types::{DecodedSession, SessionCodec};
use crate::utils::error::{HealthOpsError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in seconds since the epoch
pub(crate) fn now_secs() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| HealthOpsError::internal(format!("System time error: {}", e)))
}

impl SessionCodec {
    /// Token lifetime in seconds
    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    /// Get time until token expires
    pub fn time_until_expiry(&self, session: &DecodedSession) -> Option<u64> {
        let now = now_secs().ok()?;

        if session.expires_at > now {
            Some(session.expires_at - now)
        } else {
            None
        }
    }
}
