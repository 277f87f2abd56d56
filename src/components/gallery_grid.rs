//! Gallery grid and its cards.
//!
//! Cards only emit [`Action`]s; the page owns dispatch. Clicking a card
//! opens the lightbox, clicking its heart toggles the favorite without
//! opening anything.

use dioxus::prelude::*;
use showcase_core::{Action, GridItem, MediaKind};
use showcase_ui::heart_glyph;

/// Grid of media cards, in projection order
#[component]
pub fn GalleryGrid(items: Vec<GridItem>, on_action: EventHandler<Action>) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "gallery-empty", "No media matches this filter." }
        };
    }

    rsx! {
        div { id: "galleryGrid", class: "gallery-grid",
            for item in items.iter() {
                GalleryCard { key: "{item.id}", item: item.clone(), on_action }
            }
        }
    }
}

/// A single media card with a favorite control
#[component]
pub fn GalleryCard(item: GridItem, on_action: EventHandler<Action>) -> Element {
    let id = item.id;
    let favorite_class = if item.favorite {
        "favorite-btn active"
    } else {
        "favorite-btn"
    };
    let favorite_label = if item.favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
        div {
            class: "gallery-item",
            "data-id": "{id}",
            "data-type": item.kind.as_str(),
            "data-favorite": "{item.favorite}",
            onclick: move |_| on_action.call(Action::SelectItem(id)),

            div { class: "media-container",
                if item.kind == MediaKind::Image {
                    img { src: "{item.url}", alt: "{item.title}", "loading": "lazy" }
                } else {
                    video { "preload": "metadata",
                        source { src: "{item.url}", r#type: "video/mp4" }
                    }
                }
            }

            div { class: "media-overlay",
                h3 { class: "media-title", "{item.title}" }
                span { class: "media-type", {item.kind.label()} }
            }

            button {
                class: favorite_class,
                "aria-label": favorite_label,
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_action.call(Action::ToggleFavorite(id));
                },
                {heart_glyph(item.favorite)}
            }
        }
    }
}
