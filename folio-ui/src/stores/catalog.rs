//! Catalog state store

use dioxus::prelude::*;
use folio_core::{BookRecord, CatalogState, Language};

/// State for the catalog view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogUiState {
    pub language: Language,
    pub seed: i64,
    /// Likes threshold, 0 to 10
    pub likes: f64,
    /// Review threshold, 0 to 5
    pub review: f64,
    /// Books that passed the current filters
    pub books: Vec<BookRecord>,
    /// Size of the generated window
    pub page: usize,
    pub is_loading: bool,
    pub has_more: bool,
    /// Window regeneration counter, never goes back
    pub generation: u64,
}

impl From<&CatalogState> for CatalogUiState {
    fn from(state: &CatalogState) -> Self {
        Self {
            language: state.language,
            seed: state.seed,
            likes: state.likes,
            review: state.review,
            books: state.books.clone(),
            page: state.page,
            is_loading: state.is_loading,
            has_more: state.has_more,
            generation: state.generation,
        }
    }
}
