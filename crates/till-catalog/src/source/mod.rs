//! # Source Module
//!
//! Where reference data comes from.
//!
//! ## Source Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reference Data Sources                               │
//! │                                                                         │
//! │  Catalog::load(&items_source, &promotions_source)                      │
//! │       │                                                                 │
//! │       ├── ItemSource::load_all_items()                                 │
//! │       └── PromotionSource::load_promotions()                           │
//! │                 │                                                       │
//! │       ┌─────────┴──────────┐                                            │
//! │       ▼                    ▼                                            │
//! │  Fixtures              JsonFile                                        │
//! │  (compiled in)         (--items / --promotions)                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Sources
//!
//! - [`Fixtures`] - The built-in kata catalog
//! - [`JsonFile`] - A JSON array on disk

pub mod fixtures;
pub mod json;

pub use fixtures::Fixtures;
pub use json::JsonFile;

use till_core::{CatalogItem, Promotion};

use crate::error::CatalogResult;

/// Supplies the full item catalog.
pub trait ItemSource {
    /// Short label used in logs and error messages.
    fn origin(&self) -> String;

    /// Loads every catalog item, in source order.
    fn load_all_items(&self) -> CatalogResult<Vec<CatalogItem>>;
}

/// Supplies the active promotion list.
pub trait PromotionSource {
    /// Short label used in logs and error messages.
    fn origin(&self) -> String;

    /// Loads every promotion, in source order.
    fn load_promotions(&self) -> CatalogResult<Vec<Promotion>>;
}
