//! Catalog behaviour against a real on-disk store
//!
//! Each test opens a redb-backed store in a temp dir; "reloading the page"
//! means dropping the catalog and hydrating again from a fresh store handle.

use std::sync::Arc;

use showcase_core::{
    render, Action, AdminGate, Catalog, DiskStore, Filter, GallerySession, KeyValueStore,
    MediaId, MediaStore, MemoryStore, MEDIA_KEY,
};
use tempfile::TempDir;

fn id(raw: u32) -> MediaId {
    MediaId::new(raw).unwrap()
}

fn open_store(dir: &TempDir) -> MediaStore {
    MediaStore::new(Arc::new(DiskStore::in_dir(dir.path()).unwrap()))
}

#[test]
fn test_hydrate_empty_store_yields_seed_titles() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);

    let catalog = Catalog::hydrate(store.clone());
    let titles: Vec<&str> = catalog.all().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Mystical Forest",
            "Northern Lights Dance",
            "Enchanted Waterfall",
            "Starry Night Sky",
            "Magical Portal",
            "Crystal Cave",
        ]
    );

    // Hydrating wrote the seed as a side effect
    assert_eq!(store.load(), catalog.all());
}

#[test]
fn test_toggle_survives_reload() {
    let temp = TempDir::new().unwrap();

    {
        let mut catalog = Catalog::hydrate(open_store(&temp));
        assert!(catalog.get(id(1)).unwrap().favorite);
        assert_eq!(catalog.toggle_favorite(id(1)), Some(false));
    }

    let catalog = Catalog::hydrate(open_store(&temp));
    assert!(!catalog.get(id(1)).unwrap().favorite);
    assert_eq!(catalog.len(), 6);
}

#[test]
fn test_favorite_filter_on_seed() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::hydrate(open_store(&temp));

    let ids: Vec<u32> = render(catalog.all(), Filter::FavoriteOnly)
        .iter()
        .map(|item| item.id.get())
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn test_corrupt_store_reseeds() {
    let temp = TempDir::new().unwrap();
    let kv = Arc::new(DiskStore::in_dir(temp.path()).unwrap());
    kv.set(MEDIA_KEY, "[{\"id\": \"one\"}, 42").unwrap();

    let catalog = Catalog::hydrate(MediaStore::new(kv.clone()));
    assert_eq!(catalog.len(), 6);

    let raw = kv.get(MEDIA_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 6);
}

#[test]
fn test_clear_then_hydrate_reseeds_after_changes() {
    let temp = TempDir::new().unwrap();
    let store = open_store(&temp);

    let mut catalog = Catalog::hydrate(store.clone());
    catalog.toggle_favorite(id(2));
    drop(catalog);

    store.clear().unwrap();
    let catalog = Catalog::hydrate(store);
    assert!(!catalog.get(id(2)).unwrap().favorite);
}

#[test]
fn test_session_flow_with_admin_gate() {
    let temp = TempDir::new().unwrap();
    let mut session = GallerySession::new(Catalog::hydrate(open_store(&temp)));

    session.dispatch(Action::SetFilter(Filter::VideoOnly));
    session.dispatch(Action::SelectItem(id(5)));
    let detail = session.detail().unwrap();
    assert_eq!(detail.title, "Magical Portal");
    assert_eq!(detail.kind_label, "Video");
    assert_eq!(detail.uploaded_label, "Uploaded: December 10, 2023");

    session.dispatch(Action::ToggleFavorite(id(5)));
    assert_eq!(session.detail().unwrap().favorite_action, "Add to Favorites");
    session.dispatch(Action::EscapePressed);
    assert!(session.detail().is_none());

    let gate = AdminGate::new(Arc::new(MemoryStore::new()));
    assert!(!gate.submit("wrong").is_granted());
    assert!(!gate.is_authenticated());
    assert!(gate.submit("magic123").is_granted());
    assert!(gate.is_authenticated());
}
