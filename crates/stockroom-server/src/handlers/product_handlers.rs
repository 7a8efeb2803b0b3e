//! Product catalog handlers
//!
//! REST surface over the policy-gated product service. Bodies for create
//! and update arrive as raw form strings so that a bad numeric field
//! yields a 422 with a per-field message instead of a deserialization
//! failure.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};
use std::sync::Arc;
use stockroom_application::ProductService;
use stockroom_domain::{Product, ProductForm};

use crate::auth::CurrentUser;
use crate::models::{
    api_error, product_not_found, validation_failed, ApiError, DeleteResponse,
};

/// List the catalog in insertion order
#[get("/products")]
pub async fn list_products(
    user: CurrentUser,
    products: &State<Arc<ProductService>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let catalog = products
        .list(user.identity())
        .await
        .map_err(|e| api_error(&e))?;
    Ok(Json(catalog))
}

/// Fetch one product by id
#[get("/products/<id>")]
pub async fn get_product(
    user: CurrentUser,
    products: &State<Arc<ProductService>>,
    id: &str,
) -> Result<Json<Product>, ApiError> {
    let product = products
        .get(user.identity(), id)
        .await
        .map_err(|e| api_error(&e))?;
    product.map(Json).ok_or_else(|| product_not_found(id))
}

/// Create a product (Manager only)
///
/// The body is validated field by field before the policy check or the
/// repository ever run.
#[post("/products", format = "json", data = "<form>")]
pub async fn create_product(
    user: CurrentUser,
    products: &State<Arc<ProductService>>,
    form: Json<ProductForm>,
) -> Result<(Status, Json<Product>), ApiError> {
    let draft = form.into_inner().into_draft().map_err(validation_failed)?;
    let product = products
        .create(user.identity(), draft)
        .await
        .map_err(|e| api_error(&e))?;
    Ok((Status::Created, Json(product)))
}

/// Replace a product record (Manager only)
///
/// Full replace semantics: the stored record becomes exactly the
/// submitted fields under the path id.
#[put("/products/<id>", format = "json", data = "<form>")]
pub async fn update_product(
    user: CurrentUser,
    products: &State<Arc<ProductService>>,
    id: &str,
    form: Json<ProductForm>,
) -> Result<Json<Product>, ApiError> {
    let draft = form.into_inner().into_draft().map_err(validation_failed)?;
    let updated = products
        .update(user.identity(), draft.with_id(id))
        .await
        .map_err(|e| api_error(&e))?;
    updated.map(Json).ok_or_else(|| product_not_found(id))
}

/// Delete a product by id (Manager only)
///
/// Idempotent: a second delete reports `deleted: false` with status 200.
#[delete("/products/<id>")]
pub async fn delete_product(
    user: CurrentUser,
    products: &State<Arc<ProductService>>,
    id: &str,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = products
        .delete(user.identity(), id)
        .await
        .map_err(|e| api_error(&e))?;
    Ok(Json(DeleteResponse { deleted }))
}
