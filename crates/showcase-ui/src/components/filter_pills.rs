//! Filter Pills Component
//!
//! Row of mutually exclusive filter buttons above the gallery grid.

use dioxus::prelude::*;
use showcase_core::Filter;

/// Displays one button per [`Filter`]; exactly one carries `active`
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(Filter::default);
///
/// rsx! {
///     FilterPills {
///         selected: filter(),
///         on_select: move |f| filter.set(f)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(selected: Filter, on_select: EventHandler<Filter>) -> Element {
    rsx! {
        div {
            class: "filter-bar",
            role: "radiogroup",
            "aria-label": "Filter gallery",
            for filter in Filter::ALL {
                button {
                    key: "{filter}",
                    class: pill_class(filter == selected),
                    role: "radio",
                    "aria-checked": if filter == selected { "true" } else { "false" },
                    "data-filter": "{filter}",
                    onclick: move |_| on_select.call(filter),
                    {filter.label()}
                }
            }
        }
    }
}

fn pill_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}
