//! # Catalog Error Types
//!
//! Error types for loading reference data.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / ValidationError                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds the source path                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in till-cli) ← Printed to stderr, exit code 1               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use till_core::ValidationError;

/// Reference data loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A reference data file could not be read.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - File permissions issue
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference data file is not valid JSON for the expected records.
    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reference data loaded but breaks catalog rules.
    ///
    /// ## When This Occurs
    /// - Duplicate barcode in the item file
    /// - Negative price
    /// - Barcode containing the `-` separator
    #[error("Invalid reference data in {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: ValidationError,
    },
}

impl CatalogError {
    /// Creates an Io error for a given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Parse error for a named origin (file path or built-in set).
    pub fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        CatalogError::Parse {
            origin: origin.into(),
            source,
        }
    }

    /// Creates an Invalid error for a named origin.
    pub fn invalid(origin: impl Into<String>, source: ValidationError) -> Self {
        CatalogError::Invalid {
            origin: origin.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
