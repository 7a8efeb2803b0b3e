//! HTTP request handlers

pub mod auth_handlers;
pub mod dashboard_handlers;
pub mod product_handlers;
