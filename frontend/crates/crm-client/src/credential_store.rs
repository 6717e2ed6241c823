//! Holds the bearer token and cached permission list.
//!
//! Backend failures never leave this type: reads that fail are reported as
//! absent, writes that fail are logged. The session layer above decides what
//! a missing credential means.

use crate::storage::{KeyValueStore, MemoryStore};

use std::sync::Arc;

use crm_core::Credential;
use log::{debug, warn};

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-encoded permission list
pub const PERMISSIONS_KEY: &str = "permissions";

pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The live credential, if a non-empty token is stored.
    pub fn get(&self) -> Option<Credential> {
        let token = self.token()?;
        Some(Credential::new(token, self.permissions()))
    }

    pub fn token(&self) -> Option<String> {
        match self.backend.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Reading stored token failed: {e}");
                None
            }
        }
    }

    /// Stored permissions; empty when none were stored or they don't parse.
    pub fn permissions(&self) -> Vec<String> {
        let raw = match self.backend.get_item(PERMISSIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Reading stored permissions failed: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Stored permissions are not a JSON string list: {e}");
            Vec::new()
        })
    }

    /// Persist the token, and the permissions when given.
    pub fn set(&self, token: &str, permissions: Option<&[String]>) {
        if let Err(e) = self.backend.set_item(TOKEN_KEY, token) {
            warn!("Storing token failed: {e}");
        } else {
            debug!("Token stored");
        }

        if let Some(permissions) = permissions {
            self.set_permissions(permissions);
        }
    }

    pub fn set_permissions(&self, permissions: &[String]) {
        let encoded = match serde_json::to_string(permissions) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Encoding permissions failed: {e}");
                return;
            }
        };

        match self.backend.set_item(PERMISSIONS_KEY, &encoded) {
            Ok(()) => debug!("Permissions stored: {permissions:?}"),
            Err(e) => warn!("Storing permissions failed: {e}"),
        }
    }

    /// Remove token and permissions. Safe to call repeatedly.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, PERMISSIONS_KEY] {
            if let Err(e) = self.backend.remove_item(key) {
                warn!("Removing {key} failed: {e}");
            }
        }
        debug!("Token and permissions removed");
    }
}
