//! Input shape checks for credentials and admin payloads

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// Whether `email` is a well-formed address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `password` meets the minimum length (in characters)
pub fn is_valid_password(password: &str, min_length: usize) -> bool {
    !password.is_empty() && password.chars().count() >= min_length
}
