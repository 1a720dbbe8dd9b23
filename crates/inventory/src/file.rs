//! JSON file persistence for [`InventoryStore`].
//!
//! The document is a single JSON object mapping item names to integer
//! quantities. No version tag, no atomic rename: a save overwrites in place.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockbook_core::DomainError;

use crate::store::InventoryStore;

/// Path used when the caller does not name one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access inventory file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("inventory file {path:?} is not a valid JSON object of quantities: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory for {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("inventory file {path:?} holds invalid stock: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

impl StoreError {
    /// True when the file does not exist or does not hold a usable inventory.
    ///
    /// `load_or_empty` recovers from the missing-file and bad-JSON cases.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            StoreError::Parse { .. } | StoreError::Invalid { .. } => true,
            StoreError::Encode { .. } => false,
        }
    }
}

/// A JSON inventory document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFile {
    path: PathBuf,
}

impl Default for InventoryFile {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the inventory. Every failure is returned to the caller.
    pub fn load(&self) -> Result<InventoryStore, StoreError> {
        let raw = self.read_raw()?;
        let store = InventoryStore::from_entries(raw).map_err(|source| StoreError::Invalid {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), items = store.len(), "inventory loaded");
        Ok(store)
    }

    /// Read the inventory, starting empty when the file is missing or malformed.
    ///
    /// Entries with a blank name or a quantity below 1 are skipped with a
    /// warning; the rest of the file is kept. Failures other than a missing
    /// file or bad JSON (e.g. permission denied) are still returned.
    pub fn load_or_empty(&self) -> Result<InventoryStore, StoreError> {
        let raw = match self.read_raw() {
            Ok(raw) => raw,
            Err(err) if err.is_recoverable() => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not load inventory; starting with an empty inventory"
                );
                return Ok(InventoryStore::new());
            }
            Err(err) => return Err(err),
        };

        let (store, rejected) = InventoryStore::from_entries_lossy(raw);
        for (item, err) in &rejected {
            tracing::warn!(
                path = %self.path.display(),
                item = %item,
                error = %err,
                "skipping invalid inventory entry"
            );
        }

        tracing::debug!(path = %self.path.display(), items = store.len(), "inventory loaded");
        Ok(store)
    }

    fn read_raw(&self) -> Result<BTreeMap<String, i64>, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the inventory as indented JSON, replacing any existing file.
    pub fn save(&self, store: &InventoryStore) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(store).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), items = store.len(), "inventory saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_in(dir: &TempDir) -> InventoryFile {
        InventoryFile::new(dir.path().join("inventory.json"))
    }

    #[test]
    fn default_path_is_inventory_json() {
        assert_eq!(InventoryFile::default().path(), Path::new("inventory.json"));
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        let mut store = InventoryStore::new();
        store.add("apple", 7).unwrap();
        store.add("banana", 2).unwrap();

        file.save(&store).unwrap();
        let loaded = file.load().unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn save_writes_indented_object() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        let mut store = InventoryStore::new();
        store.add("apple", 7).unwrap();
        file.save(&store).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "{\n  \"apple\": 7\n}");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), r#"{"old": 1, "stale": 2}"#).unwrap();

        file.save(&InventoryStore::new()).unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "{}");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = InventoryFile::new(dir.path().join("nope").join("inventory.json"));

        let err = file.save(&InventoryStore::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = file_in(&dir).load().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn load_or_empty_on_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = file_in(&dir).load_or_empty().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_or_empty_on_malformed_json_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), "{ not json").unwrap();

        assert!(matches!(file.load().unwrap_err(), StoreError::Parse { .. }));
        assert!(file.load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn load_rejects_non_object_document() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), "[1, 2, 3]").unwrap();

        assert!(matches!(file.load().unwrap_err(), StoreError::Parse { .. }));
    }

    #[test]
    fn load_rejects_non_integer_quantities() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), r#"{"apple": "seven"}"#).unwrap();

        assert!(matches!(file.load().unwrap_err(), StoreError::Parse { .. }));
    }

    #[test]
    fn load_rejects_non_positive_quantities() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), r#"{"apple": 3, "pear": 0}"#).unwrap();

        let err = file.load().unwrap_err();
        assert!(matches!(err, StoreError::Invalid { .. }));
    }

    #[test]
    fn load_or_empty_skips_non_positive_entries_and_keeps_the_rest() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), r#"{"apple": 3, "pear": 0, "fig": -1}"#).unwrap();

        let store = file.load_or_empty().unwrap();
        assert_eq!(store.get_quantity("apple"), 3);
        assert!(!store.contains("pear"));
        assert!(!store.contains("fig"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_or_empty_propagates_other_io_errors() {
        let dir = TempDir::new().unwrap();
        let file = InventoryFile::new(dir.path());

        let err = file.load_or_empty().unwrap_err();
        match err {
            StoreError::Io { ref source, .. } => {
                assert_ne!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Io error when the path is a directory"),
        }
        assert!(!err.is_recoverable());
    }

    #[test]
    fn load_reads_hand_written_file() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), r#"{"banana": 2, "apple": 10}"#).unwrap();

        let store = file.load().unwrap();
        assert_eq!(store.get_quantity("apple"), 10);
        assert_eq!(store.low_stock(5), vec!["banana"]);
    }
}
