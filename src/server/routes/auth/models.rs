//! Authentication request models

use serde::Deserialize;

/// Sign-in form. Missing fields deserialize as empty and fail as invalid
/// input, so they render like any other credential failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Query string of the sign-in page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInQuery {
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
}
