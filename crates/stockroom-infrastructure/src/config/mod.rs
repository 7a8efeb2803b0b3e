//! Configuration management
//!
//! Typed configuration sections plus the figment-based loader that merges
//! defaults, a TOML file, and `STOCKROOM_*` environment variables.

pub mod data;
pub mod loader;

pub use data::{AppConfig, AuthConfig, LoggingConfig, SeedUser, ServerConfig, SessionConfig};
pub use loader::ConfigLoader;
