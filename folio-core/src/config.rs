//! Catalog configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Records requested per "load more" step
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Visible-row cap after which pagination stops
pub const DEFAULT_MAX_BOOKS: usize = 5000;

/// Pagination limits for a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Window growth per page, and the window size after a reset
    pub page_size: usize,
    /// `has_more` turns false once this many books are visible
    pub max_books: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_books: DEFAULT_MAX_BOOKS,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.max_books < self.page_size {
            return Err(ConfigError::MaxBelowPageSize {
                page_size: self.page_size,
                max_books: self.max_books,
            });
        }
        Ok(())
    }
}
