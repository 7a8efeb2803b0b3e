//! Authentication handlers
//!
//! Login validates the credential pair and persists the resulting session;
//! logout clears it. A failed login answers with one generic message so
//! the response never confirms which field was wrong.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, post, State};
use std::sync::Arc;
use stockroom_application::AuthService;
use stockroom_domain::Identity;
use stockroom_infrastructure::FileSessionStore;
use tracing::warn;

use crate::auth::CurrentUser;
use crate::models::{api_error, ActionResponse, ApiError, ApiErrorBody, LoginRequest};

/// Authenticate a credential pair and open the session
#[post("/api/auth/login", format = "json", data = "<body>")]
pub async fn login(
    body: Json<LoginRequest>,
    auth: &State<Arc<AuthService>>,
    session: &State<Arc<FileSessionStore>>,
) -> Result<Json<Identity>, ApiError> {
    let identity = auth
        .authenticate(&body.email, &body.password)
        .map_err(|e| api_error(&e))?;

    session.set(identity.clone()).await.map_err(|e| {
        warn!(error = %e, "failed to persist session");
        (
            Status::InternalServerError,
            Json(ApiErrorBody::message("Failed to persist session")),
        )
    })?;

    Ok(Json(identity))
}

/// Close the current session
#[post("/api/auth/logout")]
pub async fn logout(
    _user: CurrentUser,
    session: &State<Arc<FileSessionStore>>,
) -> Result<Json<ActionResponse>, ApiError> {
    session.clear().await.map_err(|e| api_error(&e))?;
    Ok(Json(ActionResponse::success("Logged out")))
}

/// Current authenticated identity
///
/// The server-side counterpart of the client's session rehydration probe.
#[get("/api/auth/me")]
pub async fn me(user: CurrentUser) -> Json<Identity> {
    Json(user.0)
}
