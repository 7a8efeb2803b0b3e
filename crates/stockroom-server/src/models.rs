//! API data models
//!
//! Request and response bodies for the HTTP surface, plus the mapping
//! from domain errors to statuses.

use rocket::http::Status;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use stockroom_domain::{Error, ValidationErrors};

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email
    #[serde(default)]
    pub email: String,
    /// Password
    #[serde(default)]
    pub password: String,
}

/// Generic action response
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    /// Whether the action succeeded
    pub success: bool,
    /// Result message
    pub message: String,
}

impl ActionResponse {
    /// Create a success response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Delete result body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Whether a record was actually removed
    pub deleted: bool,
}

/// Error body for failed requests
///
/// Either a plain message or, for form validation failures, the
/// field → message map.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    /// Plain error message
    Message {
        /// User-visible message
        message: String,
    },
    /// Per-field validation messages
    Validation {
        /// Field name → error message
        errors: ValidationErrors,
    },
}

impl ApiErrorBody {
    /// Build a plain message body
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Build a validation error body
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation { errors }
    }
}

/// Status-plus-body error type shared by the handlers
pub type ApiError = (Status, Json<ApiErrorBody>);

/// Map a domain error to its HTTP representation
///
/// Login failures stay deliberately generic; policy denials become 403;
/// repository misses become 404; everything else is a 500.
pub fn api_error(err: &Error) -> ApiError {
    match err {
        Error::InvalidCredentials => (
            Status::Unauthorized,
            Json(ApiErrorBody::message("Invalid credentials")),
        ),
        Error::Forbidden { .. } => (
            Status::Forbidden,
            Json(ApiErrorBody::message(err.to_string())),
        ),
        Error::NotFound { .. } => (
            Status::NotFound,
            Json(ApiErrorBody::message(err.to_string())),
        ),
        _ => (
            Status::InternalServerError,
            Json(ApiErrorBody::message("Internal server error")),
        ),
    }
}

/// 404 body for a missing product
pub fn product_not_found(id: &str) -> ApiError {
    (
        Status::NotFound,
        Json(ApiErrorBody::message(format!("Product '{id}' not found"))),
    )
}

/// 422 body for a failed form validation
pub fn validation_failed(errors: ValidationErrors) -> ApiError {
    (
        Status::UnprocessableEntity,
        Json(ApiErrorBody::validation(errors)),
    )
}
