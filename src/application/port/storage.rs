// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence port.
//!
//! Models the browser's `localStorage` / `sessionStorage`: synchronous,
//! string keys, string values. Adapters live in
//! [`crate::infrastructure::storage`].

use crate::error::StorageError;

/// Stable key holding the selected language code.
pub const LANGUAGE_KEY: &str = "language";
/// Stable key holding `dark` or `light`.
pub const THEME_KEY: &str = "theme";
/// Stable key holding the JSON user snapshot.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Session key holding the last page load time in epoch millis.
pub const LAST_PAGE_LOAD_KEY: &str = "lastPageLoad";

/// Synchronous string key-value store.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the write.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Removes every key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the write.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Writes `value` and logs instead of failing.
///
/// Persistence is best-effort: the caller's in-memory state stays
/// authoritative when the write is lost.
pub fn set_best_effort(storage: &mut dyn Storage, key: &str, value: &str) -> bool {
    match storage.set(key, value) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, "failed to persist value: {}", err);
            false
        }
    }
}

/// Removes `key` and logs instead of failing.
pub fn remove_best_effort(storage: &mut dyn Storage, key: &str) -> bool {
    match storage.remove(key) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, "failed to remove value: {}", err);
            false
        }
    }
}
