//! Storage layer for the expense tracker
//!
//! A key-value abstraction with file and in-memory backends, and the expense
//! store that persists its whole list under a single key.

pub mod expenses;
pub mod file_io;
pub mod kv;

pub use expenses::{ExpenseStore, StoreEvent, EXPENSES_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the expense store backed by files under the data directory
pub fn open_file_store(paths: &ExpensePaths) -> Result<ExpenseStore, ExpenseError> {
    paths.ensure_directories()?;
    Ok(ExpenseStore::open(FileKeyValueStore::new(paths.data_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut store = open_file_store(&paths).unwrap();
        assert!(temp_dir.path().join("data").exists());

        store.add("Coffee", crate::models::Money::from_cents(450), "Food");
        assert!(paths.expenses_file().exists());
    }
}
