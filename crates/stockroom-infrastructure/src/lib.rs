//! Infrastructure layer for Stockroom
//!
//! Cross-cutting technical concerns and adapters behind the domain ports:
//! figment-based configuration loading, tracing initialization, the
//! in-memory product repository, and the file-backed session store.

pub mod adapters;
pub mod config;
pub mod logging;
pub mod session;

pub use adapters::InMemoryProductRepository;
pub use config::{AppConfig, ConfigLoader};
pub use session::{FileSessionStore, SessionState};
