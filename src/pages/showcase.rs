//! Gallery page.
//!
//! Every gesture on this page goes through one dispatch callback: mutate the
//! session, post the notice if any, and let the signal re-render the grid
//! and lightbox from the new state.

use std::rc::Rc;

use dioxus::prelude::*;
use showcase_core::Action;
use showcase_ui::FilterPills;

use crate::components::{GalleryGrid, LightboxView, LoadingIndicator, NavHeader, SiteFooter};
use crate::context::{post_notice, use_config, use_gallery, use_notices};

#[component]
pub fn Showcase() -> Element {
    let mut gallery = use_gallery();
    let notices = use_notices();
    let config = use_config();
    let mut loading = use_signal(|| true);
    let mut root = use_signal(|| None::<Rc<MountedData>>);

    let loading_delay = config.loading_delay;
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(loading_delay).await;
            loading.set(false);
        });
    });

    let notice_ttl = config.notice_duration;
    let dispatch = use_callback(move |action: Action| {
        let was_open = gallery.read().lightbox().is_open();
        let notice = gallery.write().dispatch(action);
        if let Some(notice) = notice {
            post_notice(notices, notice, notice_ttl);
        }
        // The lightbox took focus with it; hand it back to the page
        if was_open && !gallery.read().lightbox().is_open() {
            if let Some(node) = root() {
                spawn(async move {
                    if let Err(e) = node.set_focus(true).await {
                        tracing::debug!("Page focus failed: {:?}", e);
                    }
                });
            }
        }
    });

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            dispatch.call(Action::EscapePressed);
        }
    };

    let (items, detail, filter) = {
        let session = gallery.read();
        (session.visible(), session.detail(), session.filter())
    };

    rsx! {
        div {
            class: "showcase",
            tabindex: "0",
            onkeydown: on_keydown,
            // Take focus up front so Escape reaches the page without a click
            onmounted: move |evt: MountedEvent| async move {
                let node = evt.data();
                root.set(Some(node.clone()));
                if let Err(e) = node.set_focus(true).await {
                    tracing::debug!("Page focus failed: {:?}", e);
                }
            },

            NavHeader {}

            section { id: "home", class: "hero",
                h1 { class: "hero-title", "Magical Media Showcase" }
                p { class: "hero-subtitle",
                    "A collection of enchanted images and videos from realms near and far"
                }
                a { class: "btn-primary", href: "#gallery", "Explore the Gallery" }
            }

            section { id: "gallery", class: "gallery-section",
                h2 { class: "section-title", "Media Gallery" }
                FilterPills {
                    selected: filter,
                    on_select: move |f| dispatch.call(Action::SetFilter(f)),
                }
                if loading() {
                    LoadingIndicator {}
                }
                GalleryGrid { items, on_action: dispatch }
            }

            section { id: "about", class: "about-section",
                h2 { class: "section-title", "About the Showcase" }
                p {
                    "Browse the collection, open any piece for a closer look, and mark the ones "
                    "you love as favorites. Your favorites are remembered between visits."
                }
            }

            if let Some(detail) = detail {
                LightboxView { detail, on_action: dispatch }
            }

            SiteFooter {}
        }
    }
}
