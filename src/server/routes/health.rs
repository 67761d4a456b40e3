//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, error};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status information
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Overall status
    pub status: Cow<'static, str>,
    /// Storage reachable
    pub storage: bool,
    /// Check timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Service version
    pub version: Cow<'static, str>,
}

/// Basic health check endpoint
///
/// Reports 503 when the store cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let storage = match state.storage.health_check().await {
        Ok(()) => true,
        Err(e) => {
            error!("Storage health check failed: {}", e);
            false
        }
    };

    let status = HealthStatus {
        status: Cow::Borrowed(if storage { "healthy" } else { "unhealthy" }),
        storage,
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    let response = ApiResponse::success(status);
    if storage {
        Ok(HttpResponse::Ok().json(response))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(response))
    }
}
