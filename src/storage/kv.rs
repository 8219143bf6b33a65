//! Local key-value backends
//!
//! The expense store persists one blob under one key. Backends only need to
//! read a key and overwrite it in full.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_bytes, write_atomic};

/// Byte-oriented key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> ExpenseResult<()>;
}

/// Stores each key as `<dir>/<key>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> ExpenseResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ExpenseError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        read_bytes(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &[u8]) -> ExpenseResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}

/// In-memory backend; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> ExpenseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());
        assert!(store.get("expenses").unwrap().is_none());
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("data"));

        store.set("expenses", b"[1,2,3]").unwrap();
        assert_eq!(store.get("expenses").unwrap().unwrap(), b"[1,2,3]");
        assert!(temp_dir.path().join("data").join("expenses.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../escape", b"x").is_err());
        assert!(store.set("", b"x").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[test]
    fn test_memory_store_clones_share_contents() {
        let store = MemoryKeyValueStore::new();
        let other = store.clone();

        store.set("expenses", b"[]").unwrap();
        assert_eq!(other.get("expenses").unwrap().unwrap(), b"[]");
        assert!(other.get("missing").unwrap().is_none());
    }
}
