//! # CLI Error Types
//!
//! Everything that can stop a `till` run.
//!
//! ```text
//! CoreError ─────┐
//! CatalogError ──┼──► CliError ──► main: "error: …" on stderr, exit 1
//! ConfigError ───┤
//! I/O (tags, receipt, stdout) ┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use till_catalog::CatalogError;
use till_core::CoreError;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while resolving `till.toml`, environment and flags.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file doesn't exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The merged configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// CLI Errors
// =============================================================================

/// Top-level error for a `till` run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read tags file {}: {source}", path.display())]
    TagsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tags file that looks like JSON but isn't an array of strings.
    #[error("Tags file {} is not a JSON array of strings: {source}", path.display())]
    TagsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write receipt to {}: {source}", path.display())]
    ReceiptFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize receipt: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
