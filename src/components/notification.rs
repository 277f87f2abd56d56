//! Corner notification driven by the shared notice board.

use dioxus::prelude::*;

use crate::context::use_notices;

#[component]
pub fn NotificationToast() -> Element {
    let board = use_notices();
    let current = board.read().current().cloned();

    rsx! {
        if let Some(notice) = current {
            div {
                class: format!("notification {}", notice.level.class()),
                role: "status",
                "{notice.message}"
            }
        }
    }
}
