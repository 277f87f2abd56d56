//! Persistent storage for the media collection.
//!
//! Two layers:
//! - [`KeyValueStore`]: a string key-value store, the stand-in for the
//!   browser's `localStorage` / `sessionStorage`. [`DiskStore`] persists to
//!   redb, [`MemoryStore`] lives for the process.
//! - [`MediaStore`]: the storage adapter. Reads and writes the whole media
//!   collection as one JSON array under [`MEDIA_KEY`].
//!
//! Loading never fails: a missing key, a read error, malformed JSON or a
//! non-array value all come back as an empty collection, which makes the
//! catalog reseed.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{ShowcaseError, ShowcaseResult};
use crate::types::MediaRecord;

// Submodules
mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Key under which the media collection is persisted
pub const MEDIA_KEY: &str = "enchantedGalleryMedia";

/// A string key-value store.
///
/// Implementations must make `set` atomic from the caller's view: a reader
/// sees either the old value or the new one, never a partial write.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> ShowcaseResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> ShowcaseResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> ShowcaseResult<()>;
}

/// Storage adapter for the media collection
#[derive(Clone)]
pub struct MediaStore {
    store: Arc<dyn KeyValueStore>,
}

impl MediaStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted collection.
    ///
    /// Fails soft: anything unreadable yields an empty vector. Individual
    /// records that don't validate are dropped, as are repeated ids.
    pub fn load(&self) -> Vec<MediaRecord> {
        match self.store.get(MEDIA_KEY) {
            Ok(Some(raw)) => parse_records(&raw),
            Ok(None) => {
                tracing::debug!("No persisted media collection under '{}'", MEDIA_KEY);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read media collection: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the stored value.
    pub fn save(&self, records: &[MediaRecord]) -> ShowcaseResult<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| ShowcaseError::Serialization(e.to_string()))?;
        self.store.set(MEDIA_KEY, &json)?;
        tracing::debug!(count = records.len(), "Saved media collection");
        Ok(())
    }

    /// Drop the persisted collection. The next hydrate reseeds.
    pub fn clear(&self) -> ShowcaseResult<()> {
        self.store.remove(MEDIA_KEY)
    }
}

/// Parse a stored JSON array into valid, id-unique records.
pub fn parse_records(raw: &str) -> Vec<MediaRecord> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!("Ignoring malformed media collection: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<MediaRecord>(value) {
            Ok(record) if seen.insert(record.id) => Some(record),
            Ok(record) => {
                tracing::warn!(index, id = %record.id, "Dropping media record with duplicate id");
                None
            }
            Err(e) => {
                tracing::warn!(index, "Dropping invalid media record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MediaId, MediaKind};
    use chrono::NaiveDate;

    fn record(id: u32, favorite: bool) -> MediaRecord {
        MediaRecord {
            id: MediaId::new(id).unwrap(),
            title: format!("Item {}", id),
            description: String::new(),
            kind: MediaKind::Image,
            url: format!("https://example.com/{}.jpg", id),
            uploaded: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            favorite,
        }
    }

    fn memory_media_store() -> (MediaStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (MediaStore::new(kv.clone()), kv)
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let (store, _kv) = memory_media_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let (store, _kv) = memory_media_store();
        let records = vec![record(2, false), record(1, true)];

        store.save(&records).unwrap();
        assert_eq!(store.load(), records);
    }

    #[test]
    fn test_save_overwrites_previous_collection() {
        let (store, _kv) = memory_media_store();
        store.save(&[record(1, false), record(2, false)]).unwrap();
        store.save(&[record(3, true)]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.get(), 3);
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let (store, kv) = memory_media_store();
        kv.set(MEDIA_KEY, "{not json").unwrap();
        assert!(store.load().is_empty());

        kv.set(MEDIA_KEY, "null").unwrap();
        assert!(store.load().is_empty());

        kv.set(MEDIA_KEY, r#"{"id": 1}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_invalid_records_are_dropped() {
        let raw = r#"[
            {"id":1,"title":"ok","type":"image","url":"u","date":"2023-01-01","favorite":true},
            {"id":2,"title":"no url","type":"image","date":"2023-01-01"},
            {"id":0,"title":"zero","type":"image","url":"u","date":"2023-01-01"},
            {"id":3,"title":"bad date","type":"video","url":"u","date":"yesterday"},
            {"id":1,"title":"dup","type":"video","url":"u","date":"2023-01-01"},
            "garbage",
            {"id":4,"title":"ok too","type":"video","url":"u","date":"2023-02-02"}
        ]"#;

        let ids: Vec<u32> = parse_records(raw).iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_clear_removes_collection() {
        let (store, kv) = memory_media_store();
        store.save(&[record(1, false)]).unwrap();
        store.clear().unwrap();

        assert!(kv.get(MEDIA_KEY).unwrap().is_none());
        assert!(store.load().is_empty());
    }
}
