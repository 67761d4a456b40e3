//! Sign-in and sign-out endpoints

mod models;
mod session;
mod signin;

pub use models::SignInForm;
pub use session::signout;
pub use signin::{signin, signin_page};

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(crate::auth::guard::SIGN_IN_PATH)
            .route(web::get().to(signin_page))
            .route(web::post().to(signin)),
    )
    .route("/signout", web::post().to(signout));
}
