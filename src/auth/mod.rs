//! Session token storage and the login guard.
//!
//! Tokens are opaque bearer credentials issued by the backend at login.
//! The store keeps them in a JSON file under the platform config
//! directory; `CREWPLAN_TOKEN` overrides the file for one-off use.
//!
//! A missing or expired session is a precondition miss, not an error:
//! [`SessionStore::token`] returns `None` and callers are expected to
//! skip network work entirely rather than report a failure.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that bypasses the session file.
const TOKEN_ENV: &str = "CREWPLAN_TOKEN";

/// Errors from reading or writing the session file.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("could not locate a config directory for the session file")]
    NoConfigDir,

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// An opaque bearer credential proving an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// On-disk shape of a stored session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    token: String,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    use_env: bool,
}

impl SessionStore {
    /// Store under the platform config directory, e.g.
    /// `~/.config/crewplan/session.json` on Linux.
    pub fn open_default() -> Result<Self, AuthError> {
        let dirs = ProjectDirs::from("io", "crewplan", "crewplan").ok_or(AuthError::NoConfigDir)?;
        Ok(Self {
            path: dirs.config_dir().join("session.json"),
            use_env: true,
        })
    }

    /// Store at an explicit path, ignoring the environment override.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_env: false,
        }
    }

    /// Persist a session token. `expires_at` of `None` means the backend
    /// did not communicate a lifetime; the token is kept until logout.
    pub fn login(
        &self,
        token: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let session = StoredSession {
            token: token.into(),
            expires_at,
        };
        fs::write(&self.path, serde_json::to_vec_pretty(&session)?)?;
        Ok(())
    }

    /// Destroy the stored session. Succeeds when no session exists.
    pub fn logout(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The login guard: the current token, or `None` when logged out,
    /// when the session file is unreadable, or when the session expired.
    pub fn token(&self) -> Option<AuthToken> {
        if self.use_env {
            if let Ok(token) = std::env::var(TOKEN_ENV) {
                if !token.is_empty() {
                    return Some(AuthToken(token));
                }
            }
        }
        let raw = fs::read(&self.path).ok()?;
        let session: StoredSession = serde_json::from_slice(&raw).ok()?;
        if let Some(expires_at) = session.expires_at {
            if expires_at <= Utc::now() {
                return None;
            }
        }
        Some(AuthToken(session.token))
    }

    pub fn logged_in(&self) -> bool {
        self.token().is_some()
    }
}
