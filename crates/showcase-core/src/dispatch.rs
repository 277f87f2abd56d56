//! Event dispatch for the gallery page.
//!
//! [`GallerySession`] owns the catalog, the active filter and the lightbox
//! for one page session. UI gestures become [`Action`]s; `dispatch` applies
//! the mutation, then the caller re-renders from [`GallerySession::visible`]
//! and [`GallerySession::detail`].
//!
//! ```text
//!              Select(id)                 Close / Backdrop / Escape
//!   Closed ─────────────────▶ Open(id) ─────────────────────────────▶ Closed
//!                              │   ▲
//!                              └───┘ FavoriteToggled(id): refresh in place
//! ```

use crate::catalog::Catalog;
use crate::notice::Notice;
use crate::projection::{detail_view, render, DetailView, Filter, GridItem};
use crate::types::MediaId;

/// Lightbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(MediaId),
}

/// Inputs to the lightbox state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    /// A grid item was clicked outside its favorite control
    Select(MediaId),
    /// The close control was clicked
    Close,
    /// The backdrop around the content was clicked
    Backdrop,
    /// Escape was pressed
    Escape,
    /// The favorite flag of a record changed
    FavoriteToggled(MediaId),
}

impl Lightbox {
    /// Next state. `Select` of an id the catalog doesn't know is ignored.
    pub fn next(self, event: LightboxEvent, catalog: &Catalog) -> Lightbox {
        match event {
            LightboxEvent::Select(id) if catalog.get(id).is_some() => Lightbox::Open(id),
            LightboxEvent::Select(_) => self,
            LightboxEvent::Close | LightboxEvent::Backdrop | LightboxEvent::Escape => {
                Lightbox::Closed
            }
            LightboxEvent::FavoriteToggled(_) => self,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

/// A user gesture on the gallery page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectItem(MediaId),
    ToggleFavorite(MediaId),
    CloseLightbox,
    BackdropClick,
    EscapePressed,
    SetFilter(Filter),
}

/// Page-session state: catalog, filter and lightbox
pub struct GallerySession {
    catalog: Catalog,
    filter: Filter,
    lightbox: Lightbox,
}

impl GallerySession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: Filter::default(),
            lightbox: Lightbox::default(),
        }
    }

    /// Apply one gesture. Returns a notice to show, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Notice> {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::SelectItem(id) => {
                self.lightbox = self.lightbox.next(LightboxEvent::Select(id), &self.catalog);
                None
            }
            Action::ToggleFavorite(id) => {
                let favorite = self.catalog.toggle_favorite(id)?;
                self.lightbox = self
                    .lightbox
                    .next(LightboxEvent::FavoriteToggled(id), &self.catalog);
                Some(Notice::favorite_changed(favorite))
            }
            Action::CloseLightbox => {
                self.lightbox = self.lightbox.next(LightboxEvent::Close, &self.catalog);
                None
            }
            Action::BackdropClick => {
                self.lightbox = self.lightbox.next(LightboxEvent::Backdrop, &self.catalog);
                None
            }
            Action::EscapePressed => {
                self.lightbox = self.lightbox.next(LightboxEvent::Escape, &self.catalog);
                None
            }
            Action::SetFilter(filter) => {
                self.filter = filter;
                None
            }
        }
    }

    /// Grid items for the active filter
    pub fn visible(&self) -> Vec<GridItem> {
        render(self.catalog.all(), self.filter)
    }

    /// Lightbox content, rebuilt from the live record
    pub fn detail(&self) -> Option<DetailView> {
        match self.lightbox {
            Lightbox::Open(id) => self.catalog.get(id).map(detail_view),
            Lightbox::Closed => None,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
