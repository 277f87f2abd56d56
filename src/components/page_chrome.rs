//! Loading indicator and footer.

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { id: "loadingIndicator", class: "loading-indicator",
            div { class: "spinner" }
            p { "Summoning the gallery..." }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            p {
                "\u{00A9} "
                span { id: "currentYear", "{year}" }
                " Magical Media Showcase. All enchantments reserved."
            }
        }
    }
}
