//! Upload page behind the admin gate.
//!
//! While the session flag is unset the key prompt is shown. A matching key
//! sets the flag and reveals the page; anything else posts a rejection and
//! leaves the prompt open. The gate is a UI placeholder, not access control.

use dioxus::prelude::*;
use showcase_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{AdminKeyModal, NavHeader, SiteFooter};
use crate::context::{post_notice, use_admin_gate, use_config, use_notices};

#[component]
pub fn Upload() -> Element {
    let gate = use_admin_gate();
    let notices = use_notices();
    let config = use_config();
    let navigator = use_navigator();

    let mut authenticated = use_signal({
        let gate = gate.clone();
        move || gate.is_authenticated()
    });
    let mut prompt_open = use_signal(|| true);

    let notice_ttl = config.notice_duration;
    let on_submit = move |input: String| {
        let outcome = gate.submit(&input);
        post_notice(notices, outcome.notice().clone(), notice_ttl);
        if outcome.is_granted() {
            authenticated.set(true);
        }
    };

    rsx! {
        div { class: "upload-page",
            NavHeader {}

            if authenticated() {
                section { class: "upload-section",
                    h2 { class: "section-title", "Upload Media" }
                    p { class: "upload-note",
                        "Uploading is not available in this gallery yet. "
                        "The collection is curated from the built-in sample media."
                    }
                    Button {
                        onclick: move |_| { navigator.push(Route::Showcase {}); },
                        "Back to the Gallery"
                    }
                }
            } else if prompt_open() {
                AdminKeyModal {
                    on_submit: on_submit,
                    on_cancel: move |_| prompt_open.set(false),
                }
            } else {
                section { class: "upload-section locked",
                    h2 { class: "section-title", "Admin Access Required" }
                    p { class: "upload-note", "Enter the admin key to open the upload page." }
                    div { class: "upload-actions",
                        Button {
                            onclick: move |_| prompt_open.set(true),
                            "Enter Admin Key"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| { navigator.push(Route::Showcase {}); },
                            "Back to the Gallery"
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}
