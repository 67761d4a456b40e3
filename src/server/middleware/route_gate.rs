//! Route gate middleware
//!
//! Coarse perimeter check over the protected path prefixes. A matching
//! request needs a decodable session and nothing more; handlers still run the
//! access guard. Admitted sessions past the update age get a re-issued cookie
//! carrying the same claims.

use super::helpers::{ProtectedPaths, SessionCookie, extract_session_token, sign_in_redirect};
use crate::auth::{DecodedSession, SessionReader};
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// What the gate does with a request
#[derive(Debug)]
pub enum GateDecision {
    /// Path is not protected
    Pass,
    /// Protected path with a valid session
    Admit(DecodedSession),
    /// Protected path without a session; redirect target
    Redirect(String),
}

/// Route gate configuration shared by every worker
#[derive(Debug, Clone)]
pub struct RouteGate {
    paths: ProtectedPaths,
    reader: SessionReader,
    cookie: SessionCookie,
}

impl RouteGate {
    pub fn new(paths: ProtectedPaths, reader: SessionReader, cookie: SessionCookie) -> Self {
        Self {
            paths,
            reader,
            cookie,
        }
    }

    /// Decide for a request target (path plus optional query) and session token.
    /// The whole target becomes the callback.
    pub fn decide(&self, target: &str, token: Option<&str>) -> GateDecision {
        let path = target.split_once('?').map_or(target, |(path, _)| path);
        if !self.paths.matches(path) {
            return GateDecision::Pass;
        }

        match self.reader.decode(token) {
            Some(session) => GateDecision::Admit(session),
            None => {
                debug!("No session for protected path {}", path);
                GateDecision::Redirect(sign_in_redirect(target))
            }
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RouteGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RouteGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGateService {
            service: Rc::new(service),
            gate: Rc::new(self.clone()),
        }))
    }
}

/// Service implementation for the route gate
pub struct RouteGateService<S> {
    service: Rc<S>,
    gate: Rc<RouteGate>,
}

impl<S, B> Service<ServiceRequest> for RouteGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = extract_session_token(req.headers(), self.gate.cookie.name());

        let target = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.path().to_string(), |pq| pq.as_str().to_string());

        let session = match self.gate.decide(&target, token.as_deref()) {
            GateDecision::Pass => None,
            GateDecision::Admit(session) => Some(session),
            GateDecision::Redirect(location) => {
                let response = HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, location))
                    .finish();
                let res = req.into_response(response).map_into_right_body();
                return Box::pin(async move { Ok(res) });
            }
        };

        let service = self.service.clone();
        let gate = self.gate.clone();

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if let Some(session) = session.filter(|s| gate.reader.codec().needs_refresh(s)) {
                match gate.reader.codec().refresh(&session) {
                    Ok(token) => {
                        let cookie = gate.cookie.build(token, gate.reader.codec().max_age());
                        if let Err(e) = res.response_mut().add_cookie(&cookie) {
                            warn!("Failed to attach refreshed session cookie: {}", e);
                        } else {
                            debug!("Refreshed session for user {}", session.claims.subject);
                        }
                    }
                    Err(e) => warn!("Failed to refresh session: {}", e),
                }
            }

            Ok(res.map_into_left_body())
        })
    }
}
