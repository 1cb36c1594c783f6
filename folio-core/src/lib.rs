//! folio-core - Catalog state, filtering and record generation
//!
//! Pure logic with no UI or browser dependencies. The web app owns a single
//! [`Catalog`] and mirrors its fields into a view store after every operation.

pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod input;
pub mod random;

mod locale;

pub use book::{BookRecord, Language};
pub use catalog::{Catalog, CatalogState};
pub use config::CatalogConfig;
pub use error::{ConfigError, ParseLanguageError};
pub use filter::{apply_filters, FilterKind, Thresholds};
pub use generator::{BookGenerator, FakeBookGenerator};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
