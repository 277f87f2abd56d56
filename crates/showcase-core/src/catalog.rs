//! The in-memory media catalog.
//!
//! Source of truth for the current session. Hydrated once from the
//! [`MediaStore`], falling back to the seed list, and written back after
//! every mutation.

use crate::seed::seed_records;
use crate::storage::MediaStore;
use crate::types::{MediaId, MediaRecord};

/// Authoritative list of media records for the session
pub struct Catalog {
    records: Vec<MediaRecord>,
    store: MediaStore,
}

impl Catalog {
    /// Load the catalog from storage.
    ///
    /// If storage yields nothing (absent, unreadable or malformed), the seed
    /// list is installed and immediately persisted.
    pub fn hydrate(store: MediaStore) -> Self {
        let mut records = store.load();

        if records.is_empty() {
            records = seed_records();
            tracing::info!("No stored media found, seeding {} records", records.len());
            if let Err(e) = store.save(&records) {
                tracing::warn!("Failed to persist seed collection: {}", e);
            }
        } else {
            tracing::debug!("Hydrated catalog with {} records", records.len());
        }

        Self { records, store }
    }

    /// All records in insertion order (seed order or load order)
    pub fn all(&self) -> &[MediaRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: MediaId) -> Option<&MediaRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flip the favorite flag of `id` and persist the whole collection.
    ///
    /// Returns the new flag, or `None` when `id` is unknown (nothing
    /// changes and nothing is written). A failed write is logged; the
    /// in-memory flip stands.
    pub fn toggle_favorite(&mut self, id: MediaId) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.favorite = !record.favorite;
        let favorite = record.favorite;

        if let Err(e) = self.store.save(&self.records) {
            tracing::warn!(%id, "Failed to persist favorite toggle: {}", e);
        }

        Some(favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, MEDIA_KEY};
    use std::sync::Arc;

    fn id(raw: u32) -> MediaId {
        MediaId::new(raw).unwrap()
    }

    fn empty_store() -> (MediaStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (MediaStore::new(kv.clone()), kv)
    }

    #[test]
    fn test_hydrate_empty_store_seeds_and_persists() {
        let (store, kv) = empty_store();
        assert!(kv.get(MEDIA_KEY).unwrap().is_none());

        let catalog = Catalog::hydrate(store.clone());

        assert_eq!(catalog.len(), 6);
        assert!(kv.get(MEDIA_KEY).unwrap().is_some());
        assert_eq!(store.load(), catalog.all());
    }

    #[test]
    fn test_hydrate_keeps_stored_order() {
        let (store, _kv) = empty_store();
        let mut records = seed_records();
        records.reverse();
        records.truncate(2);
        store.save(&records).unwrap();

        let catalog = Catalog::hydrate(store);
        let ids: Vec<u32> = catalog.all().iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![6, 5]);
    }

    #[test]
    fn test_toggle_favorite_flips_and_persists() {
        let (store, _kv) = empty_store();
        let mut catalog = Catalog::hydrate(store.clone());

        assert_eq!(catalog.toggle_favorite(id(2)), Some(true));
        assert!(catalog.get(id(2)).unwrap().favorite);

        let stored = store.load();
        assert!(stored.iter().find(|r| r.id == id(2)).unwrap().favorite);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (store, kv) = empty_store();
        let mut catalog = Catalog::hydrate(store);
        let before = kv.get(MEDIA_KEY).unwrap();

        assert_eq!(catalog.toggle_favorite(id(99)), None);
        assert_eq!(kv.get(MEDIA_KEY).unwrap(), before);
    }
}
