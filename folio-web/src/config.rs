//! Catalog configuration loaded from local storage
//!
//! Two optional keys override the defaults:
//! - `folio.page_size`
//! - `folio.max_books`
//!
//! A value that doesn't parse is ignored with a warning. The combined
//! result is validated when the catalog is built.

use crate::storage;
use folio_core::CatalogConfig;
use tracing::{info, warn};

pub const PAGE_SIZE_KEY: &str = "folio.page_size";
pub const MAX_BOOKS_KEY: &str = "folio.max_books";

/// Load the config from browser local storage
pub fn load_config() -> CatalogConfig {
    let config = load_config_from(storage::get_string);
    info!(
        "Catalog config: page_size={}, max_books={}",
        config.page_size, config.max_books
    );
    config
}

/// Build a config from a key lookup, falling back to defaults per key
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> CatalogConfig {
    let defaults = CatalogConfig::default();
    CatalogConfig {
        page_size: read_usize(&lookup, PAGE_SIZE_KEY).unwrap_or(defaults.page_size),
        max_books: read_usize(&lookup, MAX_BOOKS_KEY).unwrap_or(defaults.max_books),
    }
}

fn read_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {} = {:?}: {}", key, raw, e);
            None
        }
    }
}
