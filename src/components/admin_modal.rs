//! Admin key prompt.
//!
//! Collects a key and hands it to the page; checking it is the gate's job.

use dioxus::prelude::*;
use showcase_ui::{Button, ButtonVariant, CloseButton};

#[component]
pub fn AdminKeyModal(on_submit: EventHandler<String>, on_cancel: EventHandler<()>) -> Element {
    let mut key_input = use_signal(String::new);

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Enter => on_submit.call(key_input.read().clone()),
        Key::Escape => on_cancel.call(()),
        _ => {}
    };

    rsx! {
        div { id: "adminModal", class: "modal-overlay active",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "section-title", "Admin Access" }
                    CloseButton { onclick: move |_| on_cancel.call(()) }
                }

                div { class: "modal-body",
                    label { class: "input-label", r#for: "adminKeyInput", "Admin key" }
                    input {
                        id: "adminKeyInput",
                        class: "input-field",
                        r#type: "password",
                        placeholder: "Enter the admin key...",
                        autofocus: true,
                        value: "{key_input}",
                        oninput: move |e| key_input.set(e.value()),
                        onkeydown: on_keydown,
                    }
                }

                footer { class: "modal-footer",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        onclick: move |_| on_submit.call(key_input.read().clone()),
                        "Submit"
                    }
                }
            }
        }
    }
}
