use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use stockroom_inventory::ApparelItem;

use crate::error::StoreError;

/// File-backed store for the whole apparel collection.
///
/// Every operation reads or rewrites the entire file; there is no partial
/// update, no index, and no caching between calls. There is also no locking:
/// two concurrent load-mutate-save cycles can interleave and silently lose
/// one writer's update (single-writer assumption).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Remember the backing path. Performs no IO.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full persisted collection.
    pub fn load(&self) -> Result<Vec<ApparelItem>, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Overwrite the backing file with the full collection, pretty-printed.
    pub fn save(&self, items: &[ApparelItem]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(items).map_err(|e| StoreError::Malformed {
            path: self.path.display().to_string(),
            source: e,
        })?;
        fs::write(&self.path, raw).map_err(|e| self.io_error(e))?;
        debug!(count = items.len(), "inventory file rewritten");
        Ok(())
    }

    /// Seed the file with an empty collection (creating parent directories)
    /// if it does not exist yet.
    ///
    /// Bootstrap-only: per-request loads stay strict and fail on a missing
    /// file.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        debug!("seeding empty inventory file at {}", self.path.display());
        fs::write(&self.path, "[]").map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("inventory.json"))
    }

    fn item(code: &str, size: &str, quantity: u64, price: f64) -> ApparelItem {
        ApparelItem {
            code: code.to_string(),
            size: size.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn save_then_load_returns_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let items = vec![item("A", "M", 10, 5.0), item("B", "S", 2, 1.5)];
        store.save(&items).unwrap();

        assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn save_rewrites_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&[item("A", "M", 10, 5.0)]).unwrap();
        store.save(&[item("B", "S", 2, 1.5)]).unwrap();

        assert_eq!(store.load().unwrap(), vec![item("B", "S", 2, 1.5)]);
    }

    #[test]
    fn save_writes_human_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&[item("A", "M", 10, 5.0)]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  "), "expected indented output: {raw}");
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        match store.load().unwrap_err() {
            StoreError::Io { .. } => {}
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_fails_on_malformed_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        match store.load().unwrap_err() {
            StoreError::Malformed { .. } => {}
            other => panic!("Expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn ensure_exists_seeds_an_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data").join("inventory.json"));

        store.ensure_exists().unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn ensure_exists_leaves_an_existing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&[item("A", "M", 10, 5.0)]).unwrap();

        store.ensure_exists().unwrap();

        assert_eq!(store.load().unwrap(), vec![item("A", "M", 10, 5.0)]);
    }
}
