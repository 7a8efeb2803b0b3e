//! Application layer for Stockroom
//!
//! Use cases orchestrating the domain contracts: credential authentication
//! issuing identities, and policy-gated product catalog operations. The
//! HTTP layer calls into this crate; this crate calls into the repository
//! port and never the other way around.

pub mod use_cases;

pub use use_cases::auth_service::{AuthService, SeedCredential};
pub use use_cases::product_service::{DashboardSummary, ProductService};
