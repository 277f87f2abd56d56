//! Top navigation bar.
//!
//! In-page anchors scroll to the page sections; the admin link routes to
//! the gated upload page.

use dioxus::prelude::*;

use crate::app::Route;

/// In-page sections, as (anchor, label)
const SECTIONS: [(&str, &str); 3] = [("#home", "Home"), ("#gallery", "Gallery"), ("#about", "About")];

#[component]
pub fn NavHeader() -> Element {
    let mut active = use_signal(|| SECTIONS[0].0);
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            Link { class: "logo", to: Route::Showcase {}, "\u{2728} Magical Media Showcase" }

            button {
                class: "menu-toggle",
                "aria-label": "Toggle navigation",
                onclick: move |_| menu_open.set(!menu_open()),
                "\u{2630}"
            }

            ul { class: if menu_open() { "nav-links open" } else { "nav-links" },
                for (anchor, label) in SECTIONS {
                    li { key: "{anchor}",
                        a {
                            class: if active() == anchor { "nav-link active" } else { "nav-link" },
                            href: anchor,
                            onclick: move |_| active.set(anchor),
                            "{label}"
                        }
                    }
                }
                li {
                    Link { class: "nav-link admin-link", to: Route::Upload {}, "Upload" }
                }
            }
        }
    }
}
