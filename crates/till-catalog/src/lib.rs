//! # till-catalog: Reference Data Layer for Till
//!
//! This crate supplies the item catalog and promotion list that
//! [`till_core`] prices against.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till Data Flow                                   │
//! │                                                                         │
//! │  till CLI (--items / --promotions / config)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  till-catalog (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Sources     │    │   Catalog     │    │   Fixtures   │  │   │
//! │  │   │ (source/)     │───►│ (catalog.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ ItemSource    │    │ validate      │    │ items.json   │  │   │
//! │  │   │ PromotionSrc  │    │ pipeline()    │    │ promotions   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  till-core ReceiptPipeline                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`source`] - Item and promotion sources (built-in, JSON file)
//! - [`catalog`] - Validated reference data bundle
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use till_catalog::{Catalog, Fixtures, JsonFile};
//!
//! // Own items, built-in promotions
//! let catalog = Catalog::load(&JsonFile::new("data/items.json"), &Fixtures)?;
//! let text = catalog.pipeline().print(&["ITEM000001-2"], "没钱赚商店")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use source::{Fixtures, ItemSource, JsonFile, PromotionSource};
