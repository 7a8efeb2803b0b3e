//! Session Store
//!
//! Holds the single current authenticated identity and persists it across
//! process restarts as one JSON record at a well-known path. Only this
//! module reads or writes that record.
//!
//! State machine: `Unknown` (before restore completes) transitions to
//! `Anonymous` or `Authenticated` via [`FileSessionStore::restore`];
//! `set` moves Anonymous to Authenticated after a successful login;
//! `clear` returns to Anonymous. Reads during `Unknown` report "not yet
//! decided" rather than "anonymous" so callers never mistake an
//! unrestored session for a logged-out one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stockroom_domain::{Error, Identity, Result};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Lifecycle state of the session store
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Restore has not completed; no authorization decision may be trusted
    Unknown,
    /// No identity is logged in
    Anonymous,
    /// An identity is current
    Authenticated(Identity),
}

/// On-disk shape of the persisted session record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    identity: Identity,
    saved_at: DateTime<Utc>,
}

/// File-backed store of the current identity
pub struct FileSessionStore {
    path: PathBuf,
    state: RwLock<SessionState>,
}

impl FileSessionStore {
    /// Create a store over the given record path, in the `Unknown` state
    ///
    /// Call [`restore`](Self::restore) before trusting any authorization
    /// decision.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            state: RwLock::new(SessionState::Unknown),
        }
    }

    /// Read the persisted identity, if any
    ///
    /// Fails soft: a missing file means Anonymous, and corrupt or
    /// unreadable content is cleared and treated as absent rather than
    /// surfaced to the caller. After this returns, the store is out of the
    /// `Unknown` state.
    pub async fn restore(&self) -> Option<Identity> {
        let mut state = self.state.write().await;

        match self.read_record() {
            Ok(Some(identity)) => {
                debug!(email = %identity.email, "session restored");
                *state = SessionState::Authenticated(identity.clone());
                Some(identity)
            }
            Ok(None) => {
                *state = SessionState::Anonymous;
                None
            }
            Err(e) => {
                // Self-heal: a corrupt record degrades to "logged out"
                warn!(error = %e, "clearing unreadable session record");
                if let Err(remove_err) = std::fs::remove_file(&self.path) {
                    if remove_err.kind() != std::io::ErrorKind::NotFound {
                        warn!(error = %remove_err, "failed to remove session record");
                    }
                }
                *state = SessionState::Anonymous;
                None
            }
        }
    }

    /// Persist the identity and make it current
    pub async fn set(&self, identity: Identity) -> Result<()> {
        let record = PersistedSession {
            identity: identity.clone(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io_with_source("failed to create session directory", e)
                })?;
            }
        }
        std::fs::write(&self.path, json)
            .map_err(|e| Error::io_with_source("failed to write session record", e))?;

        let mut state = self.state.write().await;
        *state = SessionState::Authenticated(identity);
        Ok(())
    }

    /// Remove the current identity and its persisted copy
    pub async fn clear(&self) -> Result<()> {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(Error::io_with_source("failed to remove session record", e));
            }
        }

        let mut state = self.state.write().await;
        *state = SessionState::Anonymous;
        Ok(())
    }

    /// The current identity, if authenticated
    ///
    /// Also `None` while the store is still `Unknown`; check
    /// [`state`](Self::state) when the distinction matters.
    pub async fn current(&self) -> Option<Identity> {
        match &*self.state.read().await {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    /// Whether an identity is currently authenticated
    pub async fn is_authenticated(&self) -> bool {
        matches!(&*self.state.read().await, SessionState::Authenticated(_))
    }

    /// Current lifecycle state
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Parse the on-disk record
    fn read_record(&self) -> Result<Option<Identity>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::corrupt_session(e.to_string())),
        };

        let record: PersistedSession = serde_json::from_str(&raw)
            .map_err(|e| Error::corrupt_session(e.to_string()))?;
        Ok(Some(record.identity))
    }
}
