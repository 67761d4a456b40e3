//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication and session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign session tokens
    #[serde(default = "generate_secure_session_secret")]
    pub session_secret: String,
    /// Session lifetime in seconds
    #[serde(default = "default_session_max_age")]
    pub session_max_age: u64,
    /// Age in seconds after which an admitted session token is re-issued
    #[serde(default = "default_session_update_age")]
    pub session_update_age: u64,
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the session cookie `Secure`
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum accepted password length
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    /// Path prefixes that require a session
    #[serde(default = "default_protected_paths")]
    pub protected_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: generate_secure_session_secret(),
            session_max_age: default_session_max_age(),
            session_update_age: default_session_update_age(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min_length(),
            protected_paths: default_protected_paths(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.session_secret.len() < 32 {
            return Err(
                "Session secret must be at least 32 characters long for security".to_string(),
            );
        }

        if self.session_secret == "your-secret-key" || self.session_secret == "change-me" {
            return Err("Session secret must not use default values. Please generate a secure random secret.".to_string());
        }

        if self.session_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "Session secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.session_max_age < 300 {
            return Err("Session lifetime should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.session_max_age > 86400 * 30 {
            return Err(
                "Session lifetime should not exceed 30 days for security reasons".to_string(),
            );
        }

        if self.session_update_age > self.session_max_age {
            return Err("Session update age cannot exceed the session lifetime".to_string());
        }

        if self.cookie_name.is_empty() {
            return Err("Session cookie name cannot be empty".to_string());
        }

        if self.password_min_length == 0 {
            return Err("Minimum password length cannot be 0".to_string());
        }

        for path in &self.protected_paths {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(format!(
                    "Protected path must be an absolute, non-root prefix: {:?}",
                    path
                ));
            }
        }

        Ok(())
    }
}

/// Generate a secure random session secret
fn generate_secure_session_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Warn about insecure configuration in development
pub fn warn_insecure_config(config: &AuthConfig) {
    if !config.cookie_secure {
        warn!("Session cookie is not marked Secure. Enable auth.cookie_secure behind TLS.");
    }
}
