//! Admin endpoints for users, roles and role grants
//!
//! All of them require `admin.manage`. Bodies are taken as raw bytes and
//! parsed only after the guard admits the caller.

mod models;
mod roles;
mod users;

pub use models::{AdminOverview, AssignRoleRequest, CreateUserRequest, RevokeResult};
pub use roles::create_role;
pub use users::{assign_role, create_user, delete_user, overview, revoke_role};

use crate::auth::SessionClaims;
use crate::auth::rbac::permissions::ADMIN_MANAGE;
use crate::server::routes::session_token;
use crate::server::state::AppState;
use crate::utils::error::{HealthOpsError, Result};
use actix_web::{HttpRequest, web};
use uuid::Uuid;

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("", web::get().to(overview))
            .route("/users", web::post().to(create_user))
            .route("/users/{user_id}", web::delete().to(delete_user))
            .route("/users/{user_id}/roles", web::post().to(assign_role))
            .route(
                "/users/{user_id}/roles/{role_id}",
                web::delete().to(revoke_role),
            )
            .route("/roles", web::post().to(create_role)),
    );
}

/// Guard every admin operation
fn require_admin(req: &HttpRequest, state: &AppState) -> Result<SessionClaims> {
    state
        .auth
        .guard()
        .require_permission(session_token(req, state).as_deref(), ADMIN_MANAGE)
        .into_result()
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| HealthOpsError::validation(format!("Invalid {} id", what)))
}
