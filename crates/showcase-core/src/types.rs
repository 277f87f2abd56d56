//! Core types for the Media Showcase

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ShowcaseError;

/// Unique identifier for a media record.
///
/// Always a positive integer, stable within a session. Zero is rejected at
/// the serde boundary so invalid stored records never reach the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MediaId(u32);

impl MediaId {
    /// Create a MediaId, returning `None` for zero
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Get the raw integer value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for MediaId {
    type Error = ShowcaseError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| ShowcaseError::Serialization("media id must be positive".into()))
    }
}

impl From<MediaId> for u32 {
    fn from(id: MediaId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of media a record points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Stored name (`image` / `video`)
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Display label (`Image` / `Video`)
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
        }
    }
}

/// A single media item in the gallery.
///
/// Serialized with the field names of the persisted collection:
/// `id`, `title`, `description`, `type`, `url`, `date`, `favorite`.
/// `description` and `favorite` fall back to empty/false when absent or
/// `null`; every other field is mandatory. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Unique identifier within the catalog
    pub id: MediaId,
    /// Display title
    pub title: String,
    /// Display description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Image or video
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// External resource locator (not validated)
    pub url: String,
    /// Upload date, display only
    #[serde(rename = "date")]
    pub uploaded: NaiveDate,
    /// The only field mutated after creation
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite: bool,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
