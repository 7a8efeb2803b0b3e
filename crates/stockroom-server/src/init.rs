//! Server state construction
//!
//! Wires configuration into the application services and completes the
//! session restore before any route can run, so handlers never observe
//! the store's `Unknown` state.

use rocket::config::{Config as RocketConfig, LogLevel};
use std::net::IpAddr;
use std::sync::Arc;
use stockroom_application::{AuthService, ProductService, SeedCredential};
use stockroom_infrastructure::config::ServerConfig;
use stockroom_infrastructure::{AppConfig, FileSessionStore, InMemoryProductRepository};

/// Shared service references managed by Rocket
pub struct AppState {
    /// Credential check issuing identities
    pub auth: Arc<AuthService>,
    /// Holder of the single current session
    pub session: Arc<FileSessionStore>,
    /// Policy-gated catalog operations
    pub products: Arc<ProductService>,
}

/// Build the application state from configuration
///
/// Restores the persisted session before returning; a corrupt record has
/// already been self-healed by the time any request is served.
pub async fn build_state(config: &AppConfig) -> AppState {
    let credentials = config
        .auth
        .users
        .iter()
        .map(|u| SeedCredential::new(u.email.clone(), u.password.clone(), u.role))
        .collect();
    let auth = Arc::new(AuthService::new(credentials));

    let session = Arc::new(FileSessionStore::new(&config.session.path));
    if let Some(identity) = session.restore().await {
        tracing::info!(email = %identity.email, "restored previous session");
    }

    let repository = Arc::new(InMemoryProductRepository::with_seed_data());
    let products = Arc::new(ProductService::new(repository));

    AppState {
        auth,
        session,
        products,
    }
}

/// Translate the server section into a Rocket configuration
pub fn rocket_config(config: &ServerConfig) -> RocketConfig {
    let address: IpAddr = config
        .host
        .parse()
        .unwrap_or_else(|_| IpAddr::from([127, 0, 0, 1]));
    RocketConfig {
        address,
        port: config.port,
        log_level: LogLevel::Normal,
        ..RocketConfig::default()
    }
}
