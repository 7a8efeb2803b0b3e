//! Authentication use case
//!
//! Validates credentials against a fixed allow-list of seed identities and
//! issues an [`Identity`] with an opaque token. This is mock
//! authentication by design: no hashing, no storage, no constant-time
//! comparison. The token is a placeholder and must never be trusted as a
//! real credential.

use stockroom_domain::{Error, Identity, Result, Role};
use tracing::{info, warn};
use uuid::Uuid;

/// One (email, password, role) entry of the credential allow-list
#[derive(Debug, Clone)]
pub struct SeedCredential {
    /// Login email
    pub email: String,
    /// Plaintext password (mock backend, see crate docs)
    pub password: String,
    /// Role granted on successful login
    pub role: Role,
}

impl SeedCredential {
    /// Create a new seed credential
    pub fn new<E, P>(email: E, password: P, role: Role) -> Self
    where
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Auth gateway: credential check producing an identity
///
/// Stateless apart from the allow-list; persisting the resulting session
/// is the session store's job, not this service's.
pub struct AuthService {
    users: Vec<SeedCredential>,
}

impl AuthService {
    /// Create an auth service with the given allow-list
    pub fn new(users: Vec<SeedCredential>) -> Self {
        Self { users }
    }

    /// Create an auth service with the two default seed identities
    pub fn with_default_seed() -> Self {
        Self::new(vec![
            SeedCredential::new("manager@stockroom.dev", "password", Role::Manager),
            SeedCredential::new("storekeeper@stockroom.dev", "password", Role::StoreKeeper),
        ])
    }

    /// Validate a credential pair and issue an identity
    ///
    /// Returns [`Error::InvalidCredentials`] for empty fields and for any
    /// pair not in the allow-list. The error carries no hint about which
    /// field was wrong.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity> {
        if email.is_empty() || password.is_empty() {
            warn!("login attempt with empty credential field");
            return Err(Error::InvalidCredentials);
        }

        let matched = self
            .users
            .iter()
            .enumerate()
            .find(|(_, user)| user.email == email && user.password == password);

        match matched {
            Some((index, user)) => {
                let identity = Identity {
                    id: (index + 1).to_string(),
                    email: user.email.clone(),
                    role: user.role,
                    token: issue_token(),
                };
                info!(email = %identity.email, role = %identity.role, "login succeeded");
                Ok(identity)
            }
            None => {
                warn!(email = %email, "login failed");
                Err(Error::InvalidCredentials)
            }
        }
    }
}

/// Issue a fresh opaque session token
///
/// Uuid-derived placeholder with no cryptographic meaning.
fn issue_token() -> String {
    format!("tok-{}", Uuid::new_v4().simple())
}
