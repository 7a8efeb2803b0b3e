//! Product Repository Interface
//!
//! Port for the owning store of product records. Operations are async for
//! interface symmetry with a real remote backend even though the in-memory
//! adapter completes them synchronously.

use crate::entities::{Product, ProductDraft};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: Product Catalog CRUD
///
/// The implementer exclusively owns the canonical collection. Identifier
/// assignment is the repository's job: ids are unique across the whole
/// collection lifetime and never reused after deletion.
///
/// # Invariants
///
/// - `create(draft)` followed by `get(returned_id)` yields an equal record
/// - `delete(id)` followed by `get(id)` yields `None`
/// - every operation completes atomically regardless of whether the caller
///   is still listening
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Full current collection in insertion order
    async fn list(&self) -> Result<Vec<Product>>;

    /// Look up one record by id
    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// Assign a fresh unique id, append, and return the stored record
    async fn create(&self, draft: ProductDraft) -> Result<Product>;

    /// Replace the record matching `product.id`
    ///
    /// Full replace semantics, not a partial patch. Returns `None` when no
    /// record has that id; the collection is untouched in that case.
    async fn update(&self, product: Product) -> Result<Option<Product>>;

    /// Remove the record with the given id
    ///
    /// Returns whether a record was actually removed. Deleting an absent
    /// id is an idempotent no-op, not an error.
    async fn delete(&self, id: &str) -> Result<bool>;
}
