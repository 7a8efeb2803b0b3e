//! Dashboard handler
//!
//! Managers get the aggregated summary. An authenticated identity without
//! dashboard permission is redirected to the product list before anything
//! renders: a UX routing rule, not an error condition.

use rocket::response::{Redirect, Responder};
use rocket::serde::json::Json;
use rocket::{get, State};
use std::sync::Arc;
use stockroom_application::{DashboardSummary, ProductService};
use stockroom_domain::{can_perform, Action};
use tracing::debug;

use crate::auth::CurrentUser;
use crate::models::{api_error, ApiError};

/// Either the dashboard payload or the read-only redirect
#[derive(Responder)]
pub enum DashboardPage {
    /// Aggregated figures for roles with dashboard access
    Summary(Json<DashboardSummary>),
    /// See-other redirect to the product list
    Redirect(Redirect),
}

/// Render the dashboard, or redirect read-only roles to the catalog
#[get("/dashboard")]
pub async fn dashboard(
    user: CurrentUser,
    products: &State<Arc<ProductService>>,
) -> Result<DashboardPage, ApiError> {
    if !can_perform(user.identity().role, Action::ViewDashboard) {
        debug!(role = %user.identity().role, "redirecting to product list");
        return Ok(DashboardPage::Redirect(Redirect::to("/products")));
    }

    let summary = products
        .dashboard_summary(user.identity())
        .await
        .map_err(|e| api_error(&e))?;
    Ok(DashboardPage::Summary(Json(summary)))
}
