pub mod bootstrap;
pub mod catalog_service;
pub mod config;
pub mod pages;
pub mod random;
pub mod storage;

use catalog_service::CatalogService;
use dioxus::prelude::*;
use pages::{AppLayout, Books};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Books {},
}

#[component]
pub fn App() -> Element {
    // One catalog for the whole app, created with the stored config
    use_context_provider(|| Signal::new(CatalogService::new(config::load_config())));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
