//! Cuento Catalogs
//!
//! Fixed, ordered value lists for the enumerated fields of a story request.
//!
//! # Overview
//!
//! - **FieldKind**: the five catalog-backed fields
//! - **Catalog**: ordered values with O(1) membership
//! - **CatalogSet**: one catalog per field for a context mode × page mode
//!
//! # Example
//!
//! ```rust
//! use cuento_catalog::{CatalogSet, ContextMode, FieldKind, PageMode};
//!
//! let set = CatalogSet::builtin(ContextMode::Genre, PageMode::PageCount);
//! assert!(set.contains(FieldKind::Context, "Aventura"));
//! assert_eq!(set.values(FieldKind::PageLength).next(), Some("1-5 páginas"));
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod kind;

// Re-exports
pub use catalog::{Catalog, CatalogSet};
pub use config::CatalogSetConfig;
pub use error::CatalogError;
pub use kind::{ContextMode, FieldKind, PageMode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
