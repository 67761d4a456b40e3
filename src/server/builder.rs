//! Server startup from a loaded configuration

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the server from an already-loaded configuration and run it
pub async fn run_with_config(config: Config, migrate: bool) -> Result<()> {
    info!("Starting HealthOps");

    let server = HttpServer::new(&config, migrate).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!(
        "Protected paths: {}",
        config.auth().protected_paths.join(", ")
    );

    server.start().await
}
