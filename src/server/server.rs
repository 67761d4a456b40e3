//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::middleware::{ProtectedPaths, RouteGate, SecurityHeadersMiddleware};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{HealthOpsError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config, migrate: bool) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::initialize(config.clone(), migrate).await?;

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create a server over already-built state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let gate = RouteGate::new(
            ProtectedPaths::new(state.config.auth().protected_paths.iter().cloned()),
            state.auth.guard().reader().clone(),
            state.cookie().clone(),
        );
        let max_body_size = state.config.server().max_body_size;

        App::new()
            .app_data(state)
            .app_data(web::PayloadConfig::new(max_body_size))
            .app_data(web::FormConfig::default().limit(max_body_size))
            .wrap(gate)
            .wrap(SecurityHeadersMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "HealthOps")))
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and close storage once it stops
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let storage = self.state.storage.clone();
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        let result = server.await;
        storage.close().await?;
        result?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(error: std::io::Error, bind_addr: &str) -> HealthOpsError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            HealthOpsError::config(format!(
                "Address {} is already in use; set server.port or HEALTHOPS_PORT",
                bind_addr
            ))
        } else {
            HealthOpsError::Io(error)
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
