//! Role administration

use super::require_admin;
use crate::core::models::NewRole;
use crate::server::routes::{ApiResponse, parse_json};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};

pub async fn create_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    require_admin(&req, &state)?;
    let payload: NewRole = parse_json(&body)?;

    let role = state.auth.create_role(&payload).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(role)))
}
