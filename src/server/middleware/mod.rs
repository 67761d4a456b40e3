//! HTTP middleware implementations
//!
//! - Route gate over the protected path prefixes
//! - Security response headers

mod helpers;
mod route_gate;
mod security;


pub use helpers::{
    ProtectedPaths, SessionCookie, extract_session_token, safe_callback, sign_in_redirect,
};
pub use route_gate::{GateDecision, RouteGate, RouteGateService};
pub use security::{SecurityHeadersMiddleware, SecurityHeadersMiddlewareService};
