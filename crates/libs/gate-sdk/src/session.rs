//! Client-side session context.
//!
//! The session is an explicit object rather than ambient global state: it
//! is hydrated from persisted storage once at startup, passed to whatever
//! needs the token, and cleared explicitly on logout. The stored file
//! holds the issued token and a cached user projection, mirroring what
//! the service returned at login.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::account::UserApi;
use crate::prelude::*;

/// An authenticated client-side session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued at login or registration.
    pub token: String,
    /// Cached projection of the authenticated identity.
    pub user: UserApi,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserApi) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// File-backed persistence for a [`Session`].
///
/// # Examples
///
/// ```rust
/// use gate_sdk::account::UserApi;
/// use gate_sdk::session::{Session, SessionStore};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SessionStore::new(std::env::temp_dir().join("gate-session.json"));
/// let session = Session::new(
///     "some-token",
///     UserApi { id: Uuid::new_v4(), email: "a@x.com".into() },
/// );
///
/// store.save(&session)?;
/// assert_eq!(store.load()?, Some(session));
/// store.clear()?;
/// assert_eq!(store.load()?, None);
/// # Ok(())
/// # }
/// ```
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Hydrates the persisted session, if any.
    ///
    /// A missing or unreadable file means "no session"; an unparseable one
    /// is treated the same way, since a corrupt session is useless to the
    /// caller and the token inside it may be stale anyway.
    pub fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw).ok())
    }

    /// Persists the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Explicit teardown: forget the persisted session.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
