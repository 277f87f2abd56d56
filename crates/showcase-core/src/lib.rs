//! Media Showcase Core Library
//!
//! Catalog, view projection and storage for a single-page media gallery.
//!
//! ## Overview
//!
//! ```text
//! KeyValueStore ─▶ MediaStore ─▶ Catalog ─▶ render / detail_view ─▶ UI
//!                      ▲             │
//!                      └── save ◀────┘ toggle_favorite
//! ```
//!
//! - [`MediaStore`] reads and writes the whole collection as one JSON value
//!   and never fails a load; bad data reads as empty.
//! - [`Catalog`] hydrates from the store, seeding six sample records when
//!   the store is empty, and persists after every favorite toggle.
//! - [`projection`] holds pure functions from catalog + [`Filter`] to grid
//!   items and lightbox views.
//! - [`GallerySession`] owns the catalog, filter and lightbox state for one
//!   page session and is the only place UI gestures mutate state.
//! - [`AdminGate`] is a placeholder UI gate, not a security boundary.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use showcase_core::{Action, Catalog, DiskStore, Filter, GallerySession, MediaStore};
//!
//! let store = MediaStore::new(Arc::new(DiskStore::in_dir("./data")?));
//! let mut session = GallerySession::new(Catalog::hydrate(store));
//!
//! session.dispatch(Action::SetFilter(Filter::FavoriteOnly));
//! for item in session.visible() {
//!     println!("{} {}", item.id, item.title);
//! }
//! ```

pub mod admin;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod notice;
pub mod projection;
pub mod seed;
pub mod storage;
pub mod types;

// Re-exports
pub use admin::{AdminGate, AdminOutcome, ADMIN_KEY, ADMIN_SESSION_KEY};
pub use catalog::Catalog;
pub use config::ShowcaseConfig;
pub use dispatch::{Action, GallerySession, Lightbox, LightboxEvent};
pub use error::{ShowcaseError, ShowcaseResult};
pub use notice::{Notice, NoticeLevel};
pub use projection::{detail_view, render, DetailView, Filter, GridItem};
pub use seed::seed_records;
pub use storage::{DiskStore, KeyValueStore, MediaStore, MemoryStore, MEDIA_KEY};
pub use types::*;
