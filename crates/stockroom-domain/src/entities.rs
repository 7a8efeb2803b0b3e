//! Core entities
//!
//! The two record types the whole system revolves around: [`Identity`]
//! (an authenticated principal) and [`Product`] (a catalog record owned by
//! the product repository).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access tier of an authenticated principal
///
/// Serializes to the wire strings `"Manager"` and `"Store Keeper"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full product CRUD plus dashboard access
    Manager,
    /// Read-only access to the product catalog
    #[serde(rename = "Store Keeper")]
    StoreKeeper,
}

impl Role {
    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::StoreKeeper => "Store Keeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated principal with a role
///
/// Created by the auth gateway on successful login and immutable
/// thereafter. The token is an opaque, non-cryptographic placeholder: it
/// carries no signature and must not be trusted for real authorization in
/// any deployment intended for production use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable identifier of the principal
    pub id: String,
    /// Login email
    pub email: String,
    /// Access tier
    pub role: Role,
    /// Opaque session token issued at login
    pub token: String,
}

/// A catalog record
///
/// The repository exclusively owns the canonical collection; everything
/// else references products by value or id. The `discount`, `views` and
/// `revenue` fields are display-only seed attributes with no derivation
/// logic behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned at creation, never reused
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock, non-negative
    pub stock: u32,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search/tag keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_keyword: Option<String>,
    /// Discount percentage in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Discount campaign label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_category: Option<String>,
    /// Display-only view counter from seed data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Display-only revenue figure from seed data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

/// Product fields without an identifier, input to `create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock, non-negative
    pub stock: u32,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search/tag keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_keyword: Option<String>,
    /// Discount percentage in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Discount campaign label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_category: Option<String>,
    /// Display-only view counter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Display-only revenue figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

impl ProductDraft {
    /// Attach an identifier, producing a full product record
    pub fn with_id<S: Into<String>>(self, id: S) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            category: self.category,
            price: self.price,
            stock: self.stock,
            description: self.description,
            tag_keyword: self.tag_keyword,
            discount: self.discount,
            discount_category: self.discount_category,
            views: self.views,
            revenue: self.revenue,
        }
    }
}
