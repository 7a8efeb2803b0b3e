//! Route definitions
//!
//! Mounts the full API surface and the JSON error catchers.

use rocket::serde::json::Json;
use rocket::{catch, catchers, routes, Build, Rocket};

use crate::handlers::auth_handlers::{login, logout, me};
use crate::handlers::dashboard_handlers::dashboard;
use crate::handlers::product_handlers::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::init::AppState;
use crate::models::ApiErrorBody;

/// Create the Stockroom rocket instance
///
/// Routes:
/// - POST `/api/auth/login` - Authenticate and open the session
/// - POST `/api/auth/logout` - Close the session
/// - GET `/api/auth/me` - Current identity
/// - GET `/products` - List the catalog
/// - GET `/products/<id>` - Fetch one product
/// - POST `/products` - Create a product (Manager)
/// - PUT `/products/<id>` - Replace a product (Manager)
/// - DELETE `/products/<id>` - Delete a product (Manager)
/// - GET `/dashboard` - Summary (Manager) or redirect to `/products`
pub fn stockroom_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state.auth)
        .manage(state.session)
        .manage(state.products)
        .mount(
            "/",
            routes![
                login,
                logout,
                me,
                list_products,
                get_product,
                create_product,
                update_product,
                delete_product,
                dashboard,
            ],
        )
        .register(
            "/",
            catchers![unauthorized, forbidden, not_found, unprocessable],
        )
}

#[catch(401)]
fn unauthorized() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::message("Authentication required"))
}

#[catch(403)]
fn forbidden() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::message("Action not permitted"))
}

#[catch(404)]
fn not_found() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::message("Resource not found"))
}

#[catch(422)]
fn unprocessable() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::message("Unprocessable request body"))
}
