//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Spinner shown in the table footer while a page is loading
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading-spinner",
            LoaderIcon { class: "icon spin" }
            p { "Loading..." }
        }
    }
}
