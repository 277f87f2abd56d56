//! Property-based tests for the catalog and view projection
//!
//! Uses proptest to check the filter and toggle invariants over arbitrary
//! catalogs and operation sequences.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use showcase_core::{
    render, Action, Catalog, Filter, GallerySession, MediaId, MediaKind, MediaRecord,
    MediaStore, MemoryStore,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop::sample::select(Filter::ALL.to_vec())
}

/// Catalogs of up to 30 records with unique ids and random kind/favorite
fn catalog_strategy() -> impl Strategy<Value = Vec<MediaRecord>> {
    prop::collection::btree_set(1u32..500, 1..30)
        .prop_flat_map(|ids| {
            let n = ids.len();
            (
                Just(ids),
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            )
        })
        .prop_map(|(ids, images, favorites)| {
            ids.into_iter()
                .zip(images)
                .zip(favorites)
                .map(|((raw, image), favorite)| MediaRecord {
                    id: MediaId::new(raw).unwrap(),
                    title: format!("Item {}", raw),
                    description: String::new(),
                    kind: if image { MediaKind::Image } else { MediaKind::Video },
                    url: format!("https://example.com/{}", raw),
                    uploaded: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                    favorite,
                })
                .collect()
        })
}

fn stored_catalog(records: &[MediaRecord]) -> Catalog {
    let store = MediaStore::new(Arc::new(MemoryStore::new()));
    store.save(records).unwrap();
    Catalog::hydrate(store)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// render(C, f) is an order-preserving subsequence of C
    #[test]
    fn render_is_ordered_subsequence(records in catalog_strategy(), filter in filter_strategy()) {
        let items = render(&records, filter);

        let mut cursor = records.iter();
        for item in &items {
            prop_assert!(cursor.any(|r| r.id == item.id), "item {} out of order", item.id);
        }
        let all_match = items.iter().all(|item| {
            let record = records.iter().find(|r| r.id == item.id).unwrap();
            filter.matches(record)
        });
        prop_assert!(all_match);
    }

    /// Every record that matches the filter is shown
    #[test]
    fn render_includes_all_matches(records in catalog_strategy(), filter in filter_strategy()) {
        let expected = records.iter().filter(|r| filter.matches(r)).count();
        prop_assert_eq!(render(&records, filter).len(), expected);
    }

    /// Toggle is an involution: toggle(toggle(x)) == x, in memory and in storage
    #[test]
    fn toggle_is_involution(records in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let target = records[pick.index(records.len())].id;
        let original = records.iter().find(|r| r.id == target).unwrap().favorite;

        let store = MediaStore::new(Arc::new(MemoryStore::new()));
        store.save(&records).unwrap();
        let mut catalog = Catalog::hydrate(store.clone());

        prop_assert_eq!(catalog.toggle_favorite(target), Some(!original));
        prop_assert_eq!(catalog.toggle_favorite(target), Some(original));
        prop_assert_eq!(store.load(), records);
    }

    /// Dispatching never changes catalog size or order
    #[test]
    fn dispatch_preserves_catalog_shape(
        records in catalog_strategy(),
        ops in prop::collection::vec((0u32..500, 0u8..6), 0..40)
    ) {
        let mut session = GallerySession::new(stored_catalog(&records));

        for (raw, op) in ops {
            let target = MediaId::new(raw + 1).unwrap();
            let action = match op {
                0 => Action::SelectItem(target),
                1 => Action::ToggleFavorite(target),
                2 => Action::CloseLightbox,
                3 => Action::BackdropClick,
                4 => Action::EscapePressed,
                _ => Action::SetFilter(Filter::ALL[(raw % 4) as usize]),
            };
            session.dispatch(action);

            if let Some(detail) = session.detail() {
                let record = session.catalog().get(detail.id).unwrap();
                prop_assert_eq!(detail.favorite, record.favorite);
            }
        }

        let ids: Vec<MediaId> = session.catalog().all().iter().map(|r| r.id).collect();
        let expected: Vec<MediaId> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(ids, expected);
    }
}
