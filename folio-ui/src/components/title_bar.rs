//! Title bar view component

use crate::components::icons::BookOpenIcon;
use dioxus::prelude::*;

/// Title bar view (pure, props-based)
#[component]
pub fn TitleBarView(
    title: String,
    /// Short status text on the right, e.g. how many books are shown
    #[props(default)]
    status: Option<String>,
) -> Element {
    rsx! {
        header { class: "title-bar",
            div { class: "title-bar-brand",
                BookOpenIcon { class: "icon icon-brand" }
                h1 { "{title}" }
            }
            if let Some(status) = status {
                span { class: "title-bar-status", "{status}" }
            }
        }
    }
}

/// Status line for the title bar: visible rows out of the generated window
pub fn catalog_status(visible: usize, generated: usize) -> String {
    if visible == generated {
        format!("{visible} books")
    } else {
        format!("{visible} of {generated} books")
    }
}
