use dioxus::prelude::*;
use showcase_core::{AdminGate, Catalog, GallerySession};
use showcase_ui::ParticleField;

use crate::components::NotificationToast;
use crate::context::{services, NoticeBoard};
use crate::pages::{Showcase, Upload};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Gallery page: hero, filterable grid, lightbox
/// - `/upload` - Admin-gated upload page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Showcase {},
    #[route("/upload")]
    Upload {},
}

/// Root application component.
///
/// Hydrates the catalog once per window and provides the shared contexts.
#[component]
pub fn App() -> Element {
    let services = services();

    let gallery: Signal<GallerySession> =
        use_signal(|| GallerySession::new(Catalog::hydrate(services.media.clone())));
    let notices: Signal<NoticeBoard> = use_signal(NoticeBoard::default);

    use_context_provider(|| gallery);
    use_context_provider(|| notices);
    use_context_provider(|| AdminGate::new(services.session_store.clone()));
    use_context_provider(|| services.config.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        ParticleField { count: services.config.particle_count }
        Router::<Route> {}
        NotificationToast {}
    }
}
