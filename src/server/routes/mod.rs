//! HTTP route modules
//!
//! Every protected handler runs the access guard as its first statement,
//! before reading or validating its payload.

pub mod account;
pub mod admin;
pub mod auth;
pub mod health;
pub mod pages;

use crate::server::state::AppState;
use crate::utils::error::{HealthOpsError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::de::DeserializeOwned;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }

    /// Convert the API response to an HTTP response
    pub fn to_http_response(&self) -> HttpResponse {
        if self.success {
            HttpResponse::Ok().json(self)
        } else {
            HttpResponse::BadRequest().json(self)
        }
    }
}

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(pages::configure_routes)
        .configure(auth::configure_routes)
        .configure(admin::configure_routes)
        .configure(account::configure_routes);
}

/// Session token of the current request, if any
pub fn session_token(req: &HttpRequest, state: &AppState) -> Option<String> {
    crate::server::middleware::extract_session_token(req.headers(), state.cookie().name())
}

/// Parse a JSON payload. Called only after the guard has admitted the caller.
pub fn parse_json<T: DeserializeOwned>(body: &web::Bytes) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| HealthOpsError::validation(format!("Invalid request body: {}", e)))
}
