use std::path::{Path, PathBuf};

use keyring::Entry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CompanionError;

use super::AuthSession;

/// The part of a session that survives restarts: who was signed in. Tokens
/// are not cached here; the refresh token goes to the OS keyring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    pub uid: String,
    pub email: String,
}

/// Persists the signed-in user across launches: uid/email as a small JSON
/// file in the data directory, the refresh token in the OS keyring. Keyring
/// failures are logged and swallowed; worst case the user signs in again.
pub struct SessionStore {
    path: PathBuf,
    service: String,
}

const KEYRING_USER: &str = "refresh-token";

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>, service: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            service: service.into(),
        }
    }

    /// Store at the default location: `<data dir>/cf-companion/session.json`.
    pub fn open_default() -> Result<Self, CompanionError> {
        let base = dirs::data_dir()
            .ok_or_else(|| CompanionError::Config("No data directory on this platform".to_string()))?;
        Ok(Self::new(
            base.join("cf-companion").join("session.json"),
            "cf-companion",
        ))
    }

    pub fn save(&self, session: &AuthSession) -> Result<(), CompanionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CompanionError::Config(format!("Failed to create data dir: {}", e)))?;
        }
        let stored = StoredSession {
            uid: session.uid.clone(),
            email: session.email.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| CompanionError::Config(format!("Failed to serialize session: {}", e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| CompanionError::Config(format!("Failed to write session file: {}", e)))?;
        info!("Saved session for {} to {:?}", session.email, self.path);

        match Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => {
                if let Err(e) = entry.set_password(&session.refresh_token) {
                    warn!("Failed to store refresh token in keyring: {}", e);
                }
            }
            Err(e) => warn!("Failed to open keyring entry: {}", e),
        }
        Ok(())
    }

    /// The signed-in user from the last launch, if any.
    pub fn current(&self) -> Option<StoredSession> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// The refresh token from the keyring, if one was stored.
    pub fn refresh_token(&self) -> Option<String> {
        let entry = Entry::new(&self.service, KEYRING_USER).ok()?;
        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!("Failed to read refresh token: {}", e);
                None
            }
        }
    }

    pub fn sign_out(&self) -> Result<(), CompanionError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| CompanionError::Config(format!("Failed to remove session file: {}", e)))?;
            info!("Removed session file {:?}", self.path);
        }
        if let Ok(entry) = Entry::new(&self.service, KEYRING_USER) {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => warn!("Failed to delete refresh token: {}", e),
            }
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
