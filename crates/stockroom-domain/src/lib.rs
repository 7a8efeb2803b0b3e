//! Domain layer for Stockroom
//!
//! Core business contracts for the inventory administration service:
//! entities ([`Identity`], [`Product`]), the role/action authorization
//! policy table, the product form validator, and the repository port
//! implemented by the infrastructure layer.
//!
//! This crate is pure: no I/O, no HTTP, no clock. Everything here is
//! directly unit-testable.

pub mod entities;
pub mod error;
pub mod policy;
pub mod repositories;
pub mod validation;

pub use entities::{Identity, Product, ProductDraft, Role};
pub use error::{Error, Result};
pub use policy::{can_perform, Action};
pub use repositories::ProductRepository;
pub use validation::{ProductForm, ValidationErrors};
