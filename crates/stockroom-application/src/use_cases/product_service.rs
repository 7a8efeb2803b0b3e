//! Product catalog use case
//!
//! Policy-gated orchestration over the product repository. Every mutation
//! routes through [`can_perform`] strictly before the repository is
//! touched, so a denied action can never remove data or partially apply.

use serde::Serialize;
use std::sync::Arc;
use stockroom_domain::{
    can_perform, Action, Error, Identity, Product, ProductDraft, ProductRepository, Result,
};
use tracing::{debug, info};

/// Aggregated dashboard figures
///
/// Sums of what the repository stores; the `views`/`revenue` inputs are
/// display-only seed attributes, so nothing here is derived analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of catalog records
    pub product_count: usize,
    /// Total units in stock across the catalog
    pub total_stock: u64,
    /// Sum of the stored view counters
    pub total_views: u64,
    /// Sum of the stored revenue figures
    pub total_revenue: f64,
}

/// Application service for the product catalog
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service backed by the given repository
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// List the full catalog in insertion order
    pub async fn list(&self, identity: &Identity) -> Result<Vec<Product>> {
        self.authorize(identity, Action::ViewProducts)?;
        self.repository.list().await
    }

    /// Look up one product by id
    pub async fn get(&self, identity: &Identity, id: &str) -> Result<Option<Product>> {
        self.authorize(identity, Action::ViewProducts)?;
        self.repository.get(id).await
    }

    /// Create a product from an already-validated draft
    pub async fn create(&self, identity: &Identity, draft: ProductDraft) -> Result<Product> {
        self.authorize(identity, Action::CreateProduct)?;
        let product = self.repository.create(draft).await?;
        info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replace an existing product record
    ///
    /// Returns `None` when no record carries `product.id`.
    pub async fn update(&self, identity: &Identity, product: Product) -> Result<Option<Product>> {
        self.authorize(identity, Action::EditProduct)?;
        let updated = self.repository.update(product).await?;
        if let Some(ref p) = updated {
            info!(id = %p.id, "product updated");
        }
        Ok(updated)
    }

    /// Delete a product by id
    ///
    /// Idempotent: deleting an absent id reports `false`, not an error.
    pub async fn delete(&self, identity: &Identity, id: &str) -> Result<bool> {
        self.authorize(identity, Action::DeleteProduct)?;
        let removed = self.repository.delete(id).await?;
        info!(id = %id, removed, "product delete");
        Ok(removed)
    }

    /// Build the dashboard rollup
    pub async fn dashboard_summary(&self, identity: &Identity) -> Result<DashboardSummary> {
        self.authorize(identity, Action::ViewDashboard)?;
        let products = self.repository.list().await?;

        Ok(DashboardSummary {
            product_count: products.len(),
            total_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
            total_views: products.iter().filter_map(|p| p.views).sum(),
            total_revenue: products.iter().filter_map(|p| p.revenue).sum(),
        })
    }

    /// Single policy enforcement point for this service
    fn authorize(&self, identity: &Identity, action: Action) -> Result<()> {
        if can_perform(identity.role, action) {
            Ok(())
        } else {
            debug!(role = %identity.role, %action, "action denied by policy");
            Err(Error::forbidden(identity.role, action))
        }
    }
}
