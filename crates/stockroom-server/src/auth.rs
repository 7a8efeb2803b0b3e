//! Request authentication
//!
//! Resolves the `Authorization: Bearer <token>` header against the
//! session store via a Rocket request guard. Role checks stay out of this
//! module: handlers route those through the domain policy table.

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use std::sync::Arc;
use stockroom_domain::Identity;
use stockroom_infrastructure::FileSessionStore;

/// Request guard carrying the authenticated identity
///
/// ```rust,ignore
/// #[get("/products")]
/// async fn list(user: CurrentUser) -> ... {
///     let identity = user.identity();
/// }
/// ```
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    /// The authenticated identity behind this request
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

/// Why authentication of a request failed
#[derive(Debug)]
pub enum AuthGuardError {
    /// No bearer token was supplied
    MissingToken,
    /// The token does not match the current session
    InvalidToken,
    /// The session store was not wired into Rocket
    Unavailable,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = AuthGuardError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let session = match request.rocket().state::<Arc<FileSessionStore>>() {
            Some(session) => session,
            None => {
                return Outcome::Error((
                    Status::InternalServerError,
                    AuthGuardError::Unavailable,
                ));
            }
        };

        let token = request
            .headers()
            .get_one("Authorization")
            .and_then(|header| header.strip_prefix("Bearer "));
        let Some(token) = token else {
            return Outcome::Error((Status::Unauthorized, AuthGuardError::MissingToken));
        };

        match session.current().await {
            Some(identity) if identity.token == token => Outcome::Success(CurrentUser(identity)),
            _ => Outcome::Error((Status::Unauthorized, AuthGuardError::InvalidToken)),
        }
    }
}
