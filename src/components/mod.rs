//! Page-level components for the showcase.

mod admin_modal;
mod gallery_grid;
mod lightbox;
mod nav_header;
mod notification;
mod page_chrome;

pub use admin_modal::AdminKeyModal;
pub use gallery_grid::{GalleryCard, GalleryGrid};
pub use lightbox::LightboxView;
pub use nav_header::NavHeader;
pub use notification::NotificationToast;
pub use page_chrome::{LoadingIndicator, SiteFooter};
