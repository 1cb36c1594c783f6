//! CatalogService - owns the catalog and keeps the view store in sync
//!
//! Components reach it through `use_context::<Signal<CatalogService>>()`
//! and call one of the operation methods. Each method runs the catalog
//! operation and then copies the changed fields into `Store<CatalogUiState>`,
//! which views read through lenses.

use crate::random::BrowserRandom;
use folio_core::{Catalog, CatalogConfig, FakeBookGenerator, FilterKind, Language};
use dioxus::prelude::*;
use folio_ui::stores::{CatalogUiState, CatalogUiStateStoreExt};
use tracing::warn;

pub struct CatalogService {
    catalog: Catalog<FakeBookGenerator, BrowserRandom>,
    store: Store<CatalogUiState>,
}

impl CatalogService {
    /// Build the catalog, load its first window and seed the store from it.
    /// An invalid config is logged and replaced by the defaults.
    pub fn new(config: CatalogConfig) -> Self {
        let mut catalog = match Catalog::new(config, FakeBookGenerator, BrowserRandom) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Rejected catalog config ({}), using defaults", e);
                Catalog::with_default_config(FakeBookGenerator, BrowserRandom)
            }
        };
        catalog.initialize();
        let store = Store::new(CatalogUiState::from(catalog.state()));
        Self { catalog, store }
    }

    pub fn store(&self) -> Store<CatalogUiState> {
        self.store
    }

    pub fn switch_language(&mut self, language: Language) {
        self.catalog.switch_language(language);
        self.sync();
    }

    pub fn set_seed(&mut self, seed: i64) {
        self.catalog.set_seed(seed);
        self.sync();
    }

    pub fn request_next_page(&mut self) {
        if self.catalog.request_next_page() {
            self.sync();
        }
    }

    pub fn set_filter(&mut self, kind: FilterKind, value: f64) {
        self.catalog.set_filter(kind, value);
        self.sync();
    }

    /// Copy catalog state into the store, writing only fields that changed
    /// so unrelated views don't re-render
    fn sync(&mut self) {
        let state = self.catalog.state();

        if *self.store.language().peek() != state.language {
            self.store.language().set(state.language);
        }
        if *self.store.seed().peek() != state.seed {
            self.store.seed().set(state.seed);
        }
        if *self.store.likes().peek() != state.likes {
            self.store.likes().set(state.likes);
        }
        if *self.store.review().peek() != state.review {
            self.store.review().set(state.review);
        }
        if *self.store.page().peek() != state.page {
            self.store.page().set(state.page);
        }
        if *self.store.is_loading().peek() != state.is_loading {
            self.store.is_loading().set(state.is_loading);
        }
        if *self.store.has_more().peek() != state.has_more {
            self.store.has_more().set(state.has_more);
        }
        if *self.store.generation().peek() != state.generation {
            self.store.generation().set(state.generation);
        }
        // Filters redraw on every recompute, so the list nearly always changes
        self.store.books().set(state.books.clone());
    }
}
