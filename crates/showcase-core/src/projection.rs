//! View projection: pure functions from catalog state to display models.
//!
//! Nothing here touches storage or mutates the catalog. The UI re-runs
//! [`render`] after every catalog mutation and every filter change.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ShowcaseError;
use crate::types::{MediaId, MediaKind, MediaRecord};

pub const ADD_FAVORITE_LABEL: &str = "Add to Favorites";
pub const REMOVE_FAVORITE_LABEL: &str = "Remove from Favorites";

/// Active grid filter. Exactly one is active at a time; resets on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    ImageOnly,
    VideoOnly,
    FavoriteOnly,
}

impl Filter {
    /// Every filter, in filter-bar order
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::ImageOnly,
        Filter::VideoOnly,
        Filter::FavoriteOnly,
    ];

    /// Stable name, as used by the filter buttons
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::ImageOnly => "image",
            Filter::VideoOnly => "video",
            Filter::FavoriteOnly => "favorite",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::ImageOnly => "Images",
            Filter::VideoOnly => "Videos",
            Filter::FavoriteOnly => "Favorites",
        }
    }

    /// Whether `record` passes this filter
    pub fn matches(&self, record: &MediaRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::ImageOnly => record.kind == MediaKind::Image,
            Filter::VideoOnly => record.kind == MediaKind::Video,
            Filter::FavoriteOnly => record.favorite,
        }
    }
}

impl FromStr for Filter {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ShowcaseError::InvalidFilter(s.to_string()))
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One card in the gallery grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub favorite: bool,
    pub title: String,
    pub url: String,
}

impl From<&MediaRecord> for GridItem {
    fn from(record: &MediaRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind,
            favorite: record.favorite,
            title: record.title.clone(),
            url: record.url.clone(),
        }
    }
}

/// Fields shown by the lightbox for a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: MediaId,
    pub kind: MediaKind,
    pub title: String,
    pub description: String,
    pub url: String,
    pub kind_label: &'static str,
    pub uploaded_label: String,
    pub favorite: bool,
    pub favorite_action: &'static str,
}

/// Project the catalog through `filter`.
///
/// Stable: the result is a subsequence of `records` in the same order.
pub fn render(records: &[MediaRecord], filter: Filter) -> Vec<GridItem> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .map(GridItem::from)
        .collect()
}

/// Map a record to its lightbox view
pub fn detail_view(record: &MediaRecord) -> DetailView {
    DetailView {
        id: record.id,
        kind: record.kind,
        title: record.title.clone(),
        description: record.description.clone(),
        url: record.url.clone(),
        kind_label: record.kind.label(),
        uploaded_label: format!("Uploaded: {}", format_upload_date(record.uploaded)),
        favorite: record.favorite,
        favorite_action: favorite_action_label(record.favorite),
    }
}

/// Label of the lightbox favorite button for the current flag
pub fn favorite_action_label(favorite: bool) -> &'static str {
    if favorite {
        REMOVE_FAVORITE_LABEL
    } else {
        ADD_FAVORITE_LABEL
    }
}

/// Long US date, e.g. "October 15, 2023"
pub fn format_upload_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
