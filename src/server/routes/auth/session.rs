//! Sign-out endpoint

use crate::auth::guard::SIGN_IN_PATH;
use crate::server::state::AppState;
use actix_web::http::header;
use actix_web::{HttpResponse, web};

/// Clear the session cookie.
///
/// Tokens are stateless, so an already-copied token stays valid until it
/// expires.
pub async fn signout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::SeeOther()
        .cookie(state.cookie().removal())
        .insert_header((header::LOCATION, SIGN_IN_PATH))
        .finish()
}
