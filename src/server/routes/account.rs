//! Self-service account endpoints

use crate::server::routes::{parse_json, session_token};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

/// Configure account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/account").route("/password", web::post().to(change_password)));
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Change the caller's own password. The current session is kept.
pub async fn change_password(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let claims = state
        .auth
        .guard()
        .require_auth(session_token(&req, &state).as_deref())
        .into_result()?;
    let payload: ChangePasswordRequest = parse_json(&body)?;

    state
        .auth
        .change_password(
            claims.subject,
            &payload.current_password,
            &payload.new_password,
        )
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
