use crate::catalog_service::CatalogService;
use crate::Route;
use dioxus::prelude::*;
use folio_ui::stores::CatalogUiStateStoreExt;
use folio_ui::{catalog_status, AppLayoutView, TitleBarView};

#[component]
pub fn AppLayout() -> Element {
    let service: Signal<CatalogService> = use_context();
    let state = service.peek().store();

    let visible = state.books().read().len();
    let generated = *state.page().read();

    rsx! {
        AppLayoutView {
            title_bar: rsx! {
                TitleBarView {
                    title: "Book Catalog".to_string(),
                    status: catalog_status(visible, generated),
                }
            },
            Outlet::<Route> {}
        }
    }
}
