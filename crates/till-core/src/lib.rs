//! # till-core: Pure Receipt Logic for Till
//!
//! This crate is the **heart** of Till. It turns scanned tags into a priced,
//! discounted receipt as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till (CLI binary)                            │   │
//! │  │    args/config ──► load catalog ──► run pipeline ──► write     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   tag ──► cart ──► promotion ──► totals ──► receipt             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                till-catalog (Reference Data)                    │   │
//! │  │              built-in fixtures, JSON item/promotion files       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tag`] - Tag formatting and barcode aggregation
//! - [`cart`] - Cart builder (catalog join)
//! - [`promotion`] - Buy-two-get-one-free engine
//! - [`totals`] - Totals calculator
//! - [`receipt`] - Receipt model and text rendering
//! - [`pipeline`] - All of the above in one call
//! - [`money`] / [`quantity`] - Integer money and fractional quantities
//! - [`types`] - Reference data (catalog items, promotions)
//! - [`validation`] - Input and reference data rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{print_receipt, CatalogItem, Money, Promotion, PromotionKind};
//!
//! let catalog = vec![
//!     CatalogItem::new("ITEM000001", "雪碧", "瓶", Money::from_cents(300)),
//!     CatalogItem::new("ITEM000003", "荔枝", "斤", Money::from_cents(1500)),
//! ];
//! let promotions = vec![Promotion::new(PromotionKind::BuyTwoGetOneFree, ["ITEM000001"])];
//!
//! let text = print_receipt(&["ITEM000001-5", "ITEM000003-2.5"], &catalog, &promotions, "没钱赚商店")
//!     .unwrap();
//!
//! assert!(text.contains("小计：12.00(元)"));
//! assert!(text.contains("总计：49.50(元)"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pipeline;
pub mod promotion;
pub mod quantity;
pub mod receipt;
pub mod tag;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartItem;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pipeline::{print_receipt, ReceiptPipeline};
pub use promotion::PromotedItem;
pub use quantity::Quantity;
pub use receipt::{Receipt, ReceiptItem};
pub use tag::{CountedBarcode, FormattedTag};
pub use totals::Totals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Separates the barcode from the quantity in a weighed tag (`ITEM000003-2.5`).
pub const BARCODE_QUANTITY_SEPARATOR: char = '-';

/// Store name printed in the receipt banner when none is configured.
pub const DEFAULT_STORE_NAME: &str = "没钱赚商店";
