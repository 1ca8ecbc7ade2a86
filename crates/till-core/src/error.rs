//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Pipeline failures (unknown barcode, etc.)      │
//! │  └── ValidationError  - Input / reference data rule violations         │
//! │                                                                         │
//! │  till-catalog errors (separate crate)                                  │
//! │  └── CatalogError     - Reference data loading failures                │
//! │                                                                         │
//! │  till-cli errors (app)                                                 │
//! │  └── CliError         - What the operator sees on stderr               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → CliError → stderr  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation Policy
//! Every `CoreError` is fatal for the receipt being computed. The pipeline
//! never produces a partial receipt or a receipt with corrupted totals.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Receipt pipeline errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A scanned barcode has no match in the item catalog.
    ///
    /// ## When This Occurs
    /// - Typo in a tag
    /// - Catalog file is out of date relative to the scanner
    #[error("Unknown barcode: {0}")]
    UnknownBarcode(String),

    /// No promotion of the required type exists in the promotion catalog.
    #[error("No {0} promotion configured")]
    MissingPromotion(String),

    /// A tag's quantity suffix is not a usable number.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan "ITEM000003-2,5"
    ///      │
    ///      ▼
    /// format_tag → "2,5" is not a decimal number
    ///      │
    ///      ▼
    /// InvalidQuantity { tag: "ITEM000003-2,5", reason: "..." }
    /// ```
    #[error("Invalid quantity in tag '{tag}': {reason}")]
    InvalidQuantity { tag: String, reason: String },

    /// Summed quantities for one barcode are not representable.
    #[error("Quantity overflow while counting {barcode}")]
    QuantityOverflow { barcode: String },

    /// A line amount or a receipt total does not fit in the money
    /// representation.
    #[error("Amount overflow while pricing {barcode}")]
    AmountOverflow { barcode: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised for malformed tags and for reference data that breaks catalog
/// rules (empty names, negative prices, duplicate barcodes).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., non-numeric quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate barcode in the catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
