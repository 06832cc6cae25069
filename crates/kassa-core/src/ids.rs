//! Idempotence keys for state-mutating API calls.
//!
//! The API deduplicates retried requests by the `Idempotence-Key` header. The key is
//! chosen by the caller; a UUID v4 is the recommended form, so [`IdempotenceKey::generate`]
//! produces one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied token that makes a retried request take effect at most once.
///
/// Reuse the same key when retrying a failed create/capture/cancel call.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdempotenceKey(String);

impl IdempotenceKey {
    /// Wrap a caller-chosen key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generate a fresh random key (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Return the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdempotenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdempotenceKey({})", self.0)
    }
}

impl fmt::Display for IdempotenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for IdempotenceKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for IdempotenceKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<uuid::Uuid> for IdempotenceKey {
    fn from(value: uuid::Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<&IdempotenceKey> for IdempotenceKey {
    fn from(value: &IdempotenceKey) -> Self {
        value.clone()
    }
}

impl AsRef<str> for IdempotenceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
