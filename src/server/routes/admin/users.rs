//! User administration

use super::models::{AdminOverview, AssignRoleRequest, CreateUserRequest, RevokeResult};
use super::{parse_id, require_admin};
use crate::server::routes::{ApiResponse, parse_json};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

/// Users with their roles, plus the role and permission catalogue
pub async fn overview(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    require_admin(&req, &state)?;

    let overview = AdminOverview {
        users: state.auth.list_users().await?,
        roles: state.auth.rbac().list_roles().await?,
        permissions: state.auth.rbac().list_permissions().await?,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(overview)))
}

pub async fn create_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let admin = require_admin(&req, &state)?;
    let payload: CreateUserRequest = parse_json(&body)?;

    let user = state
        .auth
        .create_user(&payload.name, &payload.email, &payload.password)
        .await?;

    debug!("User {} created by {}", user.id, admin.subject);
    Ok(HttpResponse::Created().json(ApiResponse::success(user)))
}

pub async fn assign_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    require_admin(&req, &state)?;
    let user_id = parse_id(&path, "user")?;
    let payload: AssignRoleRequest = if body.is_empty() {
        AssignRoleRequest::default()
    } else {
        parse_json(&body)?
    };

    let Some(raw_role_id) = payload.role_id.filter(|id| !id.trim().is_empty()) else {
        return Ok(HttpResponse::NoContent().finish());
    };
    let role_id = parse_id(raw_role_id.trim(), "role")?;

    state.auth.grant_role(user_id, role_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn revoke_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    require_admin(&req, &state)?;
    let (raw_user_id, raw_role_id) = path.into_inner();
    let user_id = parse_id(&raw_user_id, "user")?;
    let role_id = parse_id(&raw_role_id, "role")?;

    let removed = state.auth.revoke_role(user_id, role_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(RevokeResult { removed })))
}

pub async fn delete_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    require_admin(&req, &state)?;
    let user_id = parse_id(&path, "user")?;

    state.auth.delete_user(user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
