//! The fixed seed collection used when nothing is persisted.

use chrono::NaiveDate;

use crate::types::{MediaId, MediaKind, MediaRecord};

/// Number of records in the seed list
pub const SEED_COUNT: usize = 6;

struct SeedEntry {
    id: u32,
    title: &'static str,
    description: &'static str,
    kind: MediaKind,
    url: &'static str,
    date: (i32, u32, u32),
    favorite: bool,
}

const SEED: [SeedEntry; SEED_COUNT] = [
    SeedEntry {
        id: 1,
        title: "Mystical Forest",
        description: "A magical forest with glowing flora and fauna",
        kind: MediaKind::Image,
        url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        date: (2023, 10, 15),
        favorite: true,
    },
    SeedEntry {
        id: 2,
        title: "Northern Lights Dance",
        description: "Aurora borealis illuminating the night sky",
        kind: MediaKind::Video,
        url: "https://assets.mixkit.co/videos/preview/mixkit-aurora-borealis-over-a-frozen-lake-41551-large.mp4",
        date: (2023, 11, 22),
        favorite: false,
    },
    SeedEntry {
        id: 3,
        title: "Enchanted Waterfall",
        description: "A waterfall with magical glowing waters",
        kind: MediaKind::Image,
        url: "https://images.unsplash.com/photo-1519681393784-d120267933ba?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        date: (2023, 9, 5),
        favorite: true,
    },
    SeedEntry {
        id: 4,
        title: "Starry Night Sky",
        description: "The Milky Way galaxy visible in a clear night sky",
        kind: MediaKind::Image,
        url: "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        date: (2023, 8, 30),
        favorite: false,
    },
    SeedEntry {
        id: 5,
        title: "Magical Portal",
        description: "A portal to another dimension opening in the forest",
        kind: MediaKind::Video,
        url: "https://assets.mixkit.co/videos/preview/mixkit-magic-portal-in-the-forest-41540-large.mp4",
        date: (2023, 12, 10),
        favorite: true,
    },
    SeedEntry {
        id: 6,
        title: "Crystal Cave",
        description: "A cave filled with glowing crystals",
        kind: MediaKind::Image,
        url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        date: (2023, 7, 18),
        favorite: false,
    },
];

/// Build the seed collection in its fixed order
pub fn seed_records() -> Vec<MediaRecord> {
    SEED.iter()
        .filter_map(|entry| {
            let (y, m, d) = entry.date;
            Some(MediaRecord {
                id: MediaId::new(entry.id)?,
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                kind: entry.kind,
                url: entry.url.to_string(),
                uploaded: NaiveDate::from_ymd_opt(y, m, d)?,
                favorite: entry.favorite,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_complete() {
        let records = seed_records();
        assert_eq!(records.len(), SEED_COUNT);

        let ids: Vec<u32> = records.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_seed_favorites_and_kinds() {
        let records = seed_records();
        let favorites: Vec<u32> = records
            .iter()
            .filter(|r| r.favorite)
            .map(|r| r.id.get())
            .collect();
        assert_eq!(favorites, vec![1, 3, 5]);

        let videos: Vec<&str> = records
            .iter()
            .filter(|r| r.kind == MediaKind::Video)
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(videos, vec!["Northern Lights Dance", "Magical Portal"]);
    }
}
