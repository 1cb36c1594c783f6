//! Store types for UI state management
//!
//! The catalog store is a read model: the web crate's service writes it after
//! every catalog operation, and views subscribe to individual fields through
//! the derived lenses.

pub mod catalog;

pub use catalog::*;
