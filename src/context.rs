//! Shared state for the showcase UI.
//!
//! Startup resources are installed once from `main` ([`install`]); the App
//! component turns them into Dioxus contexts:
//!
//! - `Signal<GallerySession>` - catalog, filter and lightbox ([`use_gallery`])
//! - `AdminGate` - tab-lifetime admin flag ([`use_admin_gate`])
//! - `Signal<NoticeBoard>` - the notification in the corner ([`use_notices`])
//! - `ShowcaseConfig` - durations and counts ([`use_config`])

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use dioxus::prelude::*;
use showcase_core::{
    AdminGate, GallerySession, MediaStore, MemoryStore, Notice, ShowcaseConfig,
};

/// Resources opened before the window launches
#[derive(Clone)]
pub struct AppServices {
    pub config: ShowcaseConfig,
    pub media: MediaStore,
    /// Lives as long as the window, like a browser tab's session storage
    pub session_store: Arc<MemoryStore>,
}

impl AppServices {
    /// In-memory services, used when nothing was installed
    fn in_memory() -> Self {
        Self {
            config: ShowcaseConfig::default(),
            media: MediaStore::new(Arc::new(MemoryStore::new())),
            session_store: Arc::new(MemoryStore::new()),
        }
    }
}

static SERVICES: OnceLock<AppServices> = OnceLock::new();

/// Install startup resources. Only the first call has an effect.
pub fn install(services: AppServices) {
    if SERVICES.set(services).is_err() {
        tracing::warn!("App services already installed");
    }
}

/// Installed resources, or an in-memory fallback
pub fn services() -> &'static AppServices {
    SERVICES.get_or_init(|| {
        tracing::warn!("No app services installed, gallery will not persist");
        AppServices::in_memory()
    })
}

/// The notification currently on screen.
///
/// Each post gets a sequence number so a dismiss timer only clears the
/// notice it was started for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    seq: u64,
    current: Option<Notice>,
}

impl NoticeBoard {
    /// Show `notice`, replacing any current one. Returns its sequence number.
    pub fn post(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Clear the notice if it is still the one posted as `seq`
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Post a notice and schedule its dismissal after `ttl`
pub fn post_notice(mut board: Signal<NoticeBoard>, notice: Notice, ttl: Duration) {
    let seq = board.write().post(notice);
    spawn(async move {
        tokio::time::sleep(ttl).await;
        board.write().dismiss(seq);
    });
}

/// Hook to access the gallery session from context.
///
/// # Example
///
/// ```ignore
/// let mut gallery = use_gallery();
/// let notice = gallery.write().dispatch(Action::SetFilter(Filter::ImageOnly));
/// let items = gallery.read().visible();
/// ```
pub fn use_gallery() -> Signal<GallerySession> {
    use_context::<Signal<GallerySession>>()
}

pub fn use_admin_gate() -> AdminGate {
    use_context::<AdminGate>()
}

pub fn use_notices() -> Signal<NoticeBoard> {
    use_context::<Signal<NoticeBoard>>()
}

pub fn use_config() -> ShowcaseConfig {
    use_context::<ShowcaseConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_dismiss_keeps_newer_notice() {
        let mut board = NoticeBoard::default();
        let first = board.post(Notice::info("Item added to favorites!"));
        let second = board.post(Notice::info("Item removed from favorites!"));

        board.dismiss(first);
        assert_eq!(
            board.current().map(|n| n.message.as_str()),
            Some("Item removed from favorites!")
        );

        board.dismiss(second);
        assert!(board.current().is_none());
    }
}
