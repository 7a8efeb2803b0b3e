//! Configuration data types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stockroom_domain::Role;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Authentication seed identities
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session persistence configuration
    #[serde(default)]
    pub session: SessionConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-structured log lines
    pub json_format: bool,
    /// Optional log file path (daily rotation)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// One seed identity of the credential allow-list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// Login email
    pub email: String,
    /// Plaintext password (mock backend)
    pub password: String,
    /// Role granted on login
    pub role: Role,
}

/// Authentication configuration
///
/// This is mock authentication: credentials live in plaintext config and
/// gate a single-actor admin UI, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Credential allow-list checked by the auth service
    pub users: Vec<SeedUser>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: vec![
                SeedUser {
                    email: "manager@stockroom.dev".to_string(),
                    password: "password".to_string(),
                    role: Role::Manager,
                },
                SeedUser {
                    email: "storekeeper@stockroom.dev".to_string(),
                    password: "password".to_string(),
                    role: Role::StoreKeeper,
                },
            ],
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the single persisted identity record
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".stockroom/session.json"),
        }
    }
}
