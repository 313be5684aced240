//! File-backed key-value store.
//!
//! `LocalStore` persists one JSON document per fixed string key, mirroring a
//! browser-style key-value store. Reads are forgiving: a missing, unreadable,
//! or corrupt document reads as absent rather than failing the caller, so a
//! damaged file never wedges the services built on top. Writes replace the
//! whole document for a key.
//!
//! There is no schema version tag on stored documents; a format change
//! invalidates previously stored data, which then reads as empty.

use std::fs;
use std::path::{Path, PathBuf};

use bizforge_core::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::paths::BizforgePaths;

/// Fixed keys for the persisted application state.
pub mod keys {
    /// The resident user profile.
    pub const USER: &str = "bizforge_user";
    /// The saved-projects array (the vault).
    pub const VAULT: &str = "bizforge_vault";
    /// The global deployment ledger.
    pub const LEDGER: &str = "bizforge_global_ledger";
    /// The capped audit log array.
    pub const AUDIT_LOGS: &str = "bizforge_audit_logs";
    /// The user feedback array.
    pub const FEEDBACK: &str = "bizforge_user_feedback";
}

/// A key-value store writing one JSON file per key under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Creates a store rooted at the given directory, creating it if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Creates a store at the default platform data location.
    pub fn default_location() -> Result<Self> {
        let dir = BizforgePaths::store_dir()
            .map_err(|e| bizforge_core::BizforgeError::config(e.to_string()))?;
        Self::new(dir)
    }

    /// Reads the document stored under `key`.
    ///
    /// Returns `None` when the key has never been written, and also when the
    /// stored document is unreadable or fails to parse - corrupt state is
    /// treated as empty rather than surfaced as an error.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read store document, treating as empty");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "corrupt store document, treating as empty");
                None
            }
        }
    }

    /// Reads the array stored under `key`, or an empty vector.
    pub fn read_vec<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read(key).unwrap_or_default()
    }

    /// Replaces the document stored under `key`.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    /// Removes the document stored under `key`, if present.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();
        assert_eq!(store.read::<Vec<String>>("absent"), None);
        assert!(store.read_vec::<String>("absent").is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        let value = vec!["a".to_string(), "b".to_string()];
        store.write("list", &value).unwrap();

        assert_eq!(store.read::<Vec<String>>("list"), Some(value));
    }

    #[test]
    fn test_corrupt_document_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        std::fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();

        assert_eq!(store.read::<Vec<String>>("broken"), None);
    }

    #[test]
    fn test_remove_clears_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        store.write("gone", &1u32).unwrap();
        store.remove("gone").unwrap();
        assert_eq!(store.read::<u32>("gone"), None);

        // Removing an absent key is not an error
        store.remove("never-written").unwrap();
    }

    #[test]
    fn test_independent_stores_do_not_interfere() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let store_a = LocalStore::new(dir_a.path()).unwrap();
        let store_b = LocalStore::new(dir_b.path()).unwrap();

        store_a.write(keys::USER, &"alice").unwrap();
        assert_eq!(store_b.read::<String>(keys::USER), None);
    }
}
