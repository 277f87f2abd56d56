//! Persistent key-value store using redb.
//!
//! One table of string keys to string values. Every `set` and `remove` is
//! its own write transaction, so readers never observe a partial value.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use super::KeyValueStore;
use crate::error::ShowcaseResult;

const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// File name of the store inside the data directory
pub const STORE_FILE: &str = "showcase.redb";

/// redb-backed store, the persistent counterpart to `localStorage`
#[derive(Clone)]
pub struct DiskStore {
    db: Arc<RwLock<Database>>,
}

impl DiskStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates parent directories and the key-value table if missing.
    pub fn new(path: impl AsRef<Path>) -> ShowcaseResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!("Opened key-value store at {:?}", path);

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the store under a data directory
    pub fn in_dir(data_dir: impl AsRef<Path>) -> ShowcaseResult<Self> {
        Self::new(data_dir.as_ref().join(STORE_FILE))
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> ShowcaseResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> ShowcaseResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> ShowcaseResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (DiskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskStore::in_dir(temp_dir.path()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let store = DiskStore::new(&db_path);
        assert!(store.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_set_get_remove() {
        let (store, _temp) = create_test_store();

        assert!(store.get("missing").unwrap().is_none());

        store.set("key", "[1,2,3]").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("[1,2,3]"));

        store.remove("key").unwrap();
        assert!(store.get("key").unwrap().is_none());
    }

    #[test]
    fn test_values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = DiskStore::in_dir(temp_dir.path()).unwrap();
            store.set("enchantedGalleryMedia", "[]").unwrap();
        }

        {
            let store = DiskStore::in_dir(temp_dir.path()).unwrap();
            assert_eq!(
                store.get("enchantedGalleryMedia").unwrap().as_deref(),
                Some("[]")
            );
        }
    }
}
