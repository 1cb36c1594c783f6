//! App layout view component
//!
//! Provides the overall app structure with a slot for the title bar above the
//! main content.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional title bar at the top
    #[props(default)]
    title_bar: Option<Element>,
) -> Element {
    rsx! {
        div { class: "app-layout",
            if let Some(tb) = title_bar {
                {tb}
            }
            main { class: "app-content", {children} }
        }
    }
}
