//! In-memory product repository
//!
//! Single-process catalog store behind the [`ProductRepository`] port.
//! Constructed explicitly and injected, never module-global state, so each
//! test gets its own isolated collection. Contents reset on process
//! restart by design.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use stockroom_domain::{Product, ProductDraft, ProductRepository, Result};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory implementation of the product repository port
///
/// Ids follow the `p{n}` scheme with a monotonically increasing counter
/// that is never reused, even after deletion. Every operation completes
/// entirely inside the lock scope, so an abandoned caller cannot leave the
/// collection half-mutated.
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    next_id: AtomicU64,
}

impl InMemoryProductRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a repository pre-loaded with the demo catalog rows
    pub fn with_seed_data() -> Self {
        let seed = seed_products();
        let next = seed.len() as u64 + 1;
        Self {
            products: RwLock::new(seed),
            next_id: AtomicU64::new(next),
        }
    }

    fn fresh_id(&self) -> String {
        format!("p{}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        let product = draft.with_id(self.fresh_id());
        let mut products = self.products.write().await;
        products.push(product.clone());
        debug!(id = %product.id, count = products.len(), "product stored");
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

/// The six demo catalog rows shipped with the original admin UI
fn seed_products() -> Vec<Product> {
    fn row(
        id: &str,
        name: &str,
        category: &str,
        price: f64,
        stock: u32,
        description: &str,
        tag: &str,
        discount: f64,
        discount_category: &str,
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            description: Some(description.to_string()),
            tag_keyword: Some(tag.to_string()),
            discount: Some(discount),
            discount_category: Some(discount_category.to_string()),
            views: Some(14_000),
            revenue: Some(164_000.0),
        }
    }

    vec![
        row(
            "p1",
            "Iphone 12 Pro",
            "Smartphone",
            1140.0,
            100,
            "Flagship smartphone with Pro camera system.",
            "Electronics",
            10.0,
            "Holiday",
        ),
        row(
            "p2",
            "Macbook Pro 2023",
            "Laptop",
            2140.0,
            80,
            "High-performance laptop for professionals.",
            "Electronics",
            15.0,
            "Seasonal",
        ),
        row(
            "p3",
            "Macbook Pro 2023",
            "Laptop",
            2140.0,
            80,
            "Second Macbook listing of the demo catalog.",
            "Electronics",
            15.0,
            "Seasonal",
        ),
        row(
            "p4",
            "Product Name Place Here",
            "Accessories",
            1000.0,
            160,
            "Placeholder catalog row.",
            "General",
            5.0,
            "Default",
        ),
        row(
            "p5",
            "Product Name Place Here",
            "Accessories",
            1000.0,
            160,
            "Placeholder catalog row.",
            "General",
            5.0,
            "Default",
        ),
        row(
            "p6",
            "Product Name Place Here",
            "Accessories",
            1000.0,
            160,
            "Placeholder catalog row.",
            "General",
            5.0,
            "Default",
        ),
    ]
}
