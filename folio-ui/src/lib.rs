//! folio-ui - Store and view components for the folio book catalog
//!
//! Views are pure and props-based: they read a `ReadStore<CatalogUiState>`
//! and report user intent through event handlers. The web crate owns the
//! catalog and wires the handlers to it.

pub mod components;
pub mod stores;

pub use components::*;
