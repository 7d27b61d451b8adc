// SPDX-License-Identifier: MPL-2.0
//! File-backed key-value storage using CBOR format.
//!
//! The whole map is rewritten on every mutation, so the file always reflects
//! the last successful write. A failed write keeps the new value in memory
//! and reports the error.

use crate::app::paths;
use crate::application::port::Storage;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Preferences file name within the data directory.
pub const PREFERENCES_FILE: &str = "preferences.cbor";

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the preferences file in the resolved data directory.
    ///
    /// Returns `None` when no data directory can be determined.
    pub fn open_default() -> Option<(Self, Option<String>)> {
        Self::open_in(None)
    }

    /// Opens the preferences file under `base_dir`, or the resolved data
    /// directory when `None`.
    pub fn open_in(base_dir: Option<PathBuf>) -> Option<(Self, Option<String>)> {
        let mut path = paths::get_app_data_dir_with_override(base_dir)?;
        path.push(PREFERENCES_FILE);
        Some(Self::open(path))
    }

    /// Opens `path`, starting empty when it does not exist.
    ///
    /// An unreadable or corrupt file also starts empty; the second element
    /// then carries a warning.
    pub fn open(path: PathBuf) -> (Self, Option<String>) {
        match read_entries(&path) {
            Ok(entries) => (Self { path, entries }, None),
            Err(err) => {
                let warning = format!("ignoring preferences at {}: {}", path.display(), err);
                (
                    Self {
                        path,
                        entries: BTreeMap::new(),
                    },
                    Some(warning),
                )
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        ciborium::into_writer(&self.entries, &mut writer)
            .map_err(|err| StorageError::Encode(err.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let file = fs::File::open(path)?;
    ciborium::from_reader(BufReader::new(file)).map_err(|err| StorageError::Decode(err.to_string()))
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(PREFERENCES_FILE);

        let (mut storage, warning) = FileStorage::open(path.clone());
        assert!(warning.is_none());
        storage.set("language", "hi").expect("write succeeds");
        storage.set("theme", "dark").expect("write succeeds");
        storage.remove("theme").expect("remove succeeds");

        let (reopened, warning) = FileStorage::open(path);
        assert!(warning.is_none());
        assert_eq!(reopened.get("language"), Some("hi".to_string()));
        assert_eq!(reopened.get("theme"), None);
    }

    #[test]
    fn corrupt_file_starts_empty_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, b"\xff\xff not cbor").expect("write garbage");

        let (storage, warning) = FileStorage::open(path);
        assert!(warning.is_some());
        assert_eq!(storage.get("language"), None);
    }

    #[test]
    fn open_in_uses_base_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (storage, _) =
            FileStorage::open_in(Some(temp_dir.path().to_path_buf())).expect("path resolves");
        assert_eq!(storage.path(), temp_dir.path().join(PREFERENCES_FILE));
    }

    #[test]
    fn failed_write_keeps_value_in_memory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        // A directory where the file should be makes File::create fail.
        let path = temp_dir.path().join("blocked");
        fs::create_dir(&path).expect("create dir");

        let mut storage = FileStorage {
            path,
            entries: BTreeMap::new(),
        };
        assert!(storage.set("language", "bn").is_err());
        assert_eq!(storage.get("language"), Some("bn".to_string()));
    }
}
