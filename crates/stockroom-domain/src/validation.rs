//! Product form validation
//!
//! Field-level validation of the raw strings a form submits, producing a
//! field → message map. Pure and synchronous: no repository or network
//! access happens here. An empty map means the form is valid.

use crate::entities::ProductDraft;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of field name to user-visible error message
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Raw product form fields as submitted
///
/// Numeric fields arrive as strings so that `"abc"` yields a field-level
/// message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Catalog category
    #[serde(default)]
    pub category: String,
    /// Unit price as entered
    #[serde(default)]
    pub price: String,
    /// Stock count as entered
    #[serde(default)]
    pub stock: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Search/tag keyword
    #[serde(default)]
    pub tag_keyword: Option<String>,
    /// Discount percentage as entered
    #[serde(default)]
    pub discount: Option<String>,
    /// Discount campaign label
    #[serde(default)]
    pub discount_category: Option<String>,
    /// Display-only view counter
    #[serde(default)]
    pub views: Option<u64>,
    /// Display-only revenue figure
    #[serde(default)]
    pub revenue: Option<f64>,
}

impl ProductForm {
    /// Validate all fields, returning a field → message map
    ///
    /// Rules:
    /// - `name`, `category`: required, non-empty after trimming
    /// - `price`: must parse as a number strictly greater than 0
    /// - `stock`: must parse as an integer greater than or equal to 0
    /// - `discount`: when present and non-empty, a number in [0, 100]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Product name is required.".to_string());
        }
        if self.category.trim().is_empty() {
            errors.insert("category", "Category is required.".to_string());
        }
        if parse_positive_number(&self.price).is_none() {
            errors.insert("price", "Price must be a positive number.".to_string());
        }
        if parse_non_negative_integer(&self.stock).is_none() {
            errors.insert("stock", "Stock must be a non-negative integer.".to_string());
        }
        if let Some(discount) = non_empty(self.discount.as_deref()) {
            if parse_percentage(discount).is_none() {
                errors.insert("discount", "Discount must be between 0 and 100.".to_string());
            }
        }

        errors
    }

    /// Convert a validated form into a draft ready for the repository
    ///
    /// Returns the error map when any field fails validation. Optional
    /// display-only fields pass through untouched; empty optional strings
    /// collapse to `None`.
    pub fn into_draft(self) -> Result<ProductDraft, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        // validate() guarantees these parses succeed
        let price = parse_positive_number(&self.price).unwrap_or_default();
        let stock = parse_non_negative_integer(&self.stock).unwrap_or_default();
        let discount = non_empty(self.discount.as_deref()).and_then(parse_percentage);

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            stock,
            description: self.description.filter(|s| !s.trim().is_empty()),
            tag_keyword: self.tag_keyword.filter(|s| !s.trim().is_empty()),
            discount,
            discount_category: self.discount_category.filter(|s| !s.trim().is_empty()),
            views: self.views,
            revenue: self.revenue,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_positive_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn parse_non_negative_integer(raw: &str) -> Option<u32> {
    // Strict integer parse: "1.5" is rejected rather than truncated
    raw.trim().parse::<u32>().ok()
}

fn parse_percentage(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}
