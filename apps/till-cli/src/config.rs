//! # Till Configuration
//!
//! Settings for a `till` run.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --store-name, --output, --no-file, --items, --promotions           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TILL_STORE_NAME=没钱赚商店                                          │
//! │     TILL_RECEIPT_PATH=/tmp/receipt.txt                                 │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/till/till.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.till.till/till.toml (macOS)      │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     built-in catalog, receipt.txt                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # till.toml
//! [store]
//! name = "没钱赚商店"
//!
//! [output]
//! receipt_path = "receipt.txt"
//! write_file = true
//!
//! [data]
//! items_path = "/srv/till/items.json"
//! promotions_path = "/srv/till/promotions.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use till_core::DEFAULT_STORE_NAME;
use tracing::{debug, info};

use crate::args::Args;
use crate::error::{ConfigError, ConfigResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "till.toml";

/// Receipt file written when nothing else is configured.
pub const DEFAULT_RECEIPT_PATH: &str = "receipt.txt";

// =============================================================================
// Sections
// =============================================================================

/// Store shown on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

/// Where the rendered receipt goes besides stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Receipt file, overwritten on every run.
    #[serde(default = "default_receipt_path")]
    pub receipt_path: PathBuf,

    /// Set to false to only print to stdout.
    #[serde(default = "default_true")]
    pub write_file: bool,
}

fn default_receipt_path() -> PathBuf {
    PathBuf::from(DEFAULT_RECEIPT_PATH)
}

fn default_true() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            receipt_path: default_receipt_path(),
            write_file: true,
        }
    }
}

/// Reference data files. `None` selects the built-in data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default)]
    pub items_path: Option<PathBuf>,

    #[serde(default)]
    pub promotions_path: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete `till` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub data: DataSettings,
}

impl TillConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (till.toml)
    /// 3. Environment variables
    ///
    /// A missing file at the default location is not an error; a missing
    /// file passed explicitly is. The result is not validated: command-line
    /// flags may still fill in missing values, so call [`validate`](Self::validate)
    /// after [`apply_args`](Self::apply_args).
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else if explicit {
                return Err(ConfigError::NotFound(path));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store name is required".into()));
        }

        if self.output.receipt_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("receipt path is required".into()));
        }

        Ok(())
    }

    /// Applies `TILL_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("TILL_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(path) = lookup("TILL_RECEIPT_PATH") {
            debug!(receipt_path = %path, "Overriding receipt path from environment");
            self.output.receipt_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("TILL_ITEMS_PATH") {
            self.data.items_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("TILL_PROMOTIONS_PATH") {
            self.data.promotions_path = Some(PathBuf::from(path));
        }
    }

    /// Applies command-line flags on top of file and environment.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(name) = &args.store_name {
            self.store.name = name.clone();
        }
        if let Some(path) = &args.output {
            self.output.receipt_path = path.clone();
        }
        if args.no_file {
            self.output.write_file = false;
        }
        if let Some(path) = &args.items {
            self.data.items_path = Some(path.clone());
        }
        if let Some(path) = &args.promotions {
            self.data.promotions_path = Some(path.clone());
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "till")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
