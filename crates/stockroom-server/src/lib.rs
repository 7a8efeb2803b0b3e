//! HTTP layer for Stockroom
//!
//! Rocket routes and request guards over the application services:
//! login/logout, the product catalog REST API, and the role-gated
//! dashboard. Authorization decisions all route through the domain policy
//! table; this crate only translates them to HTTP statuses and redirects.

pub mod auth;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;

use init::{build_state, rocket_config};
use routes::stockroom_rocket;
use std::path::Path;
use stockroom_infrastructure::logging::init_logging;
use stockroom_infrastructure::ConfigLoader;

/// Load configuration, initialize logging, and launch the server
pub async fn run(
    config_path: Option<&Path>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(port) = port_override {
        config.server.port = port;
    }

    init_logging(&config.logging)?;

    let state = build_state(&config).await;
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Stockroom server starting"
    );

    let rocket = stockroom_rocket(state).configure(rocket_config(&config.server));
    rocket
        .launch()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> {
            Box::new(std::io::Error::other(format!("Rocket launch failed: {e}")))
        })?;

    Ok(())
}
