use crate::catalog_service::CatalogService;
use dioxus::prelude::*;
use folio_core::{FilterKind, Language};
use folio_ui::{BookTableView, FilterBarView, PageContainer};
use tracing::debug;

#[component]
pub fn Books() -> Element {
    let mut service: Signal<CatalogService> = use_context();
    let state = service.peek().store();

    rsx! {
        PageContainer {
            FilterBarView {
                state,
                on_language_change: move |language: Language| {
                    service.write().switch_language(language);
                },
                on_seed_change: move |seed: i64| {
                    service.write().set_seed(seed);
                },
                on_filter_change: move |(kind, value): (FilterKind, f64)| {
                    service.write().set_filter(kind, value);
                },
            }
            h3 { class: "section-title", "Book Table" }
            BookTableView {
                state,
                on_load_more: move |_| {
                    debug!("Loading next page");
                    service.write().request_next_page();
                },
            }
        }
    }
}
