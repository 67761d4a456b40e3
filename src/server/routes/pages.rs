//! Public pages and protected section indexes

use crate::auth::SessionClaims;
use crate::auth::guard::UNAUTHORIZED_PATH;
use crate::auth::rbac::permissions::{
    APPOINTMENTS_READ, BILLING_READ, PATIENTS_READ, PROVIDERS_READ,
};
use crate::server::routes::{ApiResponse, session_token};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

/// Section index paths and the permission each requires
pub const SECTIONS: &[(&str, &str)] = &[
    ("/patients", PATIENTS_READ),
    ("/appointments", APPOINTMENTS_READ),
    ("/providers", PROVIDERS_READ),
    ("/billing", BILLING_READ),
];

/// Configure page routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route(UNAUTHORIZED_PATH, web::get().to(unauthorized))
        .route("/dashboard", web::get().to(dashboard));

    for &(path, permission) in SECTIONS {
        cfg.route(
            path,
            web::get().to(move |req: HttpRequest, state: web::Data<AppState>| {
                section_index(req, state, path, permission)
            }),
        );
    }
}

/// Identity context returned to a signed-in caller
#[derive(Debug, Serialize)]
pub struct SectionView<'a> {
    pub section: &'a str,
    pub user: &'a SessionClaims,
}

pub async fn home() -> HttpResponse {
    html_page(
        "HealthOps",
        r#"<p>Back-office operations for patients, providers, appointments and billing.</p>
<p><a href="/signin">Sign in</a></p>"#,
    )
}

pub async fn unauthorized() -> HttpResponse {
    html_page(
        "Unauthorized",
        r#"<p>You do not have access to this page.</p>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
    )
}

pub async fn dashboard(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let claims = state
        .auth
        .guard()
        .require_auth(session_token(&req, &state).as_deref())
        .into_result()?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SectionView {
        section: "dashboard",
        user: &claims,
    })))
}

async fn section_index(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: &'static str,
    permission: &'static str,
) -> Result<HttpResponse> {
    let claims = state
        .auth
        .guard()
        .require_permission(session_token(&req, &state).as_deref(), permission)
        .into_result()?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SectionView {
        section: path.trim_start_matches('/'),
        user: &claims,
    })))
}

/// Minimal HTML document
pub fn html_page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body><h1>{title}</h1>\n{body}\n</body></html>",
        title = escape_html(title),
    ))
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
