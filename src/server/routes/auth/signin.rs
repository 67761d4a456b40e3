//! Sign-in endpoints

use super::models::{SignInForm, SignInQuery};
use crate::server::middleware::safe_callback;
use crate::server::routes::pages::{escape_html, html_page};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Where a signed-in user lands without a callback
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// Sign-in form page
pub async fn signin_page(query: web::Query<SignInQuery>) -> HttpResponse {
    let callback = safe_callback(query.callback_url.as_deref()).unwrap_or(DEFAULT_LANDING_PATH);

    html_page(
        "Sign in",
        &format!(
            r#"<form method="post" action="/signin">
  <input type="hidden" name="callbackUrl" value="{}">
  <label>Email <input type="email" name="email" required></label>
  <label>Password <input type="password" name="password" required></label>
  <button type="submit">Sign in</button>
</form>"#,
            escape_html(callback)
        ),
    )
}

/// Verify credentials and set the session cookie
pub async fn signin(state: web::Data<AppState>, form: web::Form<SignInForm>) -> Result<HttpResponse> {
    let form = form.into_inner();
    let session = state.auth.sign_in(&form.email, &form.password).await?;

    let location = safe_callback(form.callback_url.as_deref()).unwrap_or(DEFAULT_LANDING_PATH);
    info!("User {} signed in", session.claims.subject);

    Ok(HttpResponse::SeeOther()
        .cookie(state.cookie().build(session.token, session.max_age))
        .insert_header((header::LOCATION, location))
        .finish())
}
