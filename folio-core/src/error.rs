use thiserror::Error;

/// A language code that is not one of the supported catalog languages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code: {0:?}")]
pub struct ParseLanguageError(pub String);

/// Invalid catalog configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Page size must be at least 1")]
    ZeroPageSize,
    #[error("Max books ({max_books}) must be at least the page size ({page_size})")]
    MaxBelowPageSize { page_size: usize, max_books: usize },
}
