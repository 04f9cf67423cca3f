//! Token Store abstraction over the persisted session credential.
//!
//! # Design
//! The client layer only ever reads the credential, once per request, under
//! the fixed key [`TOKEN_KEY`]. Writing (login stores it, logout clears it)
//! belongs to the owning application. The trait keeps the lookup synchronous:
//! it is defined as a fast key-value read and must not add latency to the
//! request path.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Fixed key under which the session token is persisted.
pub const TOKEN_KEY: &str = "token";

/// A token read failed. Propagated as-is; the request is never sent.
#[derive(Debug, Error)]
#[error("token store read failed: {0}")]
pub struct TokenStoreError(pub String);

/// Read accessor for a persisted session credential.
///
/// `Ok(None)` means no credential is stored, which is not an error; the
/// request simply goes out unauthenticated.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;
}

/// In-memory key-value store, the process-local stand-in for the browser's
/// persistent storage. `set`/`remove` are for the owning application; the
/// client only calls `get`.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: String) {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(key);
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let values = self
            .values
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }
}
