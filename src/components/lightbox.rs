//! Lightbox overlay for a single record.
//!
//! Closes on the close button, a click on the backdrop, or Escape (handled
//! by the page, which receives the bubbled keydown once the overlay has
//! focus).

use dioxus::prelude::*;
use showcase_core::{Action, DetailView, MediaKind};
use showcase_ui::{heart_glyph, Button, ButtonVariant, CloseButton};

#[component]
pub fn LightboxView(detail: DetailView, on_action: EventHandler<Action>) -> Element {
    let id = detail.id;
    let heart = heart_glyph(detail.favorite);
    let favorite_class = if detail.favorite { "active" } else { "" };

    rsx! {
        div {
            id: "lightboxModal",
            class: "lightbox-modal active",
            tabindex: "-1",
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("Lightbox focus failed: {:?}", e);
                }
            },
            onclick: move |_| on_action.call(Action::BackdropClick),

            div {
                class: "lightbox-content",
                onclick: move |evt| evt.stop_propagation(),

                CloseButton { onclick: move |_| on_action.call(Action::CloseLightbox) }

                div { class: "lightbox-media",
                    if detail.kind == MediaKind::Image {
                        img { id: "lightboxImage", src: "{detail.url}", alt: "{detail.title}" }
                    } else {
                        video { id: "lightboxVideo", src: "{detail.url}", controls: true }
                    }
                }

                div { class: "lightbox-info",
                    h2 { id: "lightboxTitle", "{detail.title}" }
                    p { id: "lightboxDescription", "{detail.description}" }
                    div { class: "lightbox-meta",
                        span { id: "lightboxDate", "{detail.uploaded_label}" }
                        span { id: "lightboxType", class: "media-type", {detail.kind_label} }
                    }
                    Button {
                        variant: ButtonVariant::Favorite,
                        class: favorite_class.to_string(),
                        onclick: move |_| on_action.call(Action::ToggleFavorite(id)),
                        "{heart} {detail.favorite_action}"
                    }
                }
            }
        }
    }
}
