//! Helper functions for middleware

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::{self, HeaderMap};
use std::sync::Arc;
use url::Url;

const CALLBACK_BASE: &str = "http://healthops.invalid/";

/// Ordered set of path prefixes that need a session
#[derive(Debug, Clone)]
pub struct ProtectedPaths {
    prefixes: Arc<[String]>,
}

impl ProtectedPaths {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Segment-aware prefix match: `/admin` covers `/admin` and `/admin/x`
    /// but not `/administrator`
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

/// Extract the session token from the request's cookie headers
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Attributes of the session cookie
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie carrying a freshly issued token
    pub fn build(&self, token: String, max_age: u64) -> Cookie<'static> {
        Cookie::build(self.name.clone(), token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(CookieDuration::seconds(
                i64::try_from(max_age).unwrap_or(i64::MAX),
            ))
            .finish()
    }

    /// Expired cookie that clears the session
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = self.build(String::new(), 0);
        cookie.make_removal();
        cookie
    }
}

/// Sign-in URL that returns the caller to `target` afterwards
pub fn sign_in_redirect(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{}?callbackUrl={}", crate::auth::guard::SIGN_IN_PATH, encoded)
}

/// Accept only same-site relative callback targets
pub fn safe_callback(callback: Option<&str>) -> Option<&str> {
    callback.filter(|target| is_same_origin_path(target))
}

/// Browsers drop tabs and newlines and read `\` as `/`, so the target is
/// resolved the way they would and must keep the placeholder origin.
fn is_same_origin_path(target: &str) -> bool {
    if !target.starts_with('/')
        || target
            .chars()
            .any(|c| c.is_ascii_control() || c.is_whitespace())
    {
        return false;
    }

    let Ok(base) = Url::parse(CALLBACK_BASE) else {
        return false;
    };
    base.join(target)
        .is_ok_and(|resolved| resolved.origin() == base.origin())
}
