//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod storage;

pub use app::*;
pub use auth::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_session_max_age() -> u64 {
    86400 * 30 // 30 days
}

pub fn default_session_update_age() -> u64 {
    86400 // 24 hours
}

pub fn default_cookie_name() -> String {
    "session".to_string()
}

pub fn default_password_min_length() -> usize {
    8
}

pub fn default_protected_paths() -> Vec<String> {
    [
        "/dashboard",
        "/patients",
        "/appointments",
        "/providers",
        "/billing",
        "/admin",
        "/account",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
