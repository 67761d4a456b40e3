//! Password hashing and verification using bcrypt

use crate::utils::error::{HealthOpsError, Result};
use once_cell::sync::Lazy;

/// bcrypt work factor
pub const BCRYPT_COST: u32 = 10;

/// Hash a password with a random salt
pub fn hash_password(password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(HealthOpsError::validation("Password cannot be empty"));
    }

    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| HealthOpsError::Crypto(format!("Failed to hash password: {}", e)))
}

/// Verify a password against its hash.
///
/// Returns `false` on mismatch and on an empty or malformed hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if hash.is_empty() {
        return false;
    }

    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Hash at the same cost as stored credentials, checked when there is no
/// stored hash to compare against.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| bcrypt::hash("healthops-unmatched-credential", BCRYPT_COST).ok());

/// Spend one bcrypt verification on a throwaway hash.
///
/// Unknown accounts and accounts without a password take as long to reject
/// as a wrong password.
pub fn verify_against_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}
