//! # till-cli: The `till` Receipt Printer
//!
//! Thin orchestration over [`till_core`] and [`till_catalog`].
//!
//! ## Run Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         till run                                        │
//! │                                                                         │
//! │  Args ──► TillConfig::load ──► apply_args ──► validate                 │
//! │                                                  │                      │
//! │  tags (argv | --tags-file)                       │                      │
//! │       │                                          ▼                      │
//! │       │                     Catalog::load(items, promotions)           │
//! │       │                          │   Fixtures or JsonFile              │
//! │       ▼                          ▼                                      │
//! │  catalog.pipeline().build(&tags) ──► Receipt                           │
//! │                                        │                                │
//! │                          render ──► receipt file ──► stdout            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any error aborts the run before output: there are no partial receipts.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod args;
pub mod config;
pub mod error;
pub mod output;
pub mod tags;

use std::io;

use till_catalog::{Catalog, Fixtures, ItemSource, JsonFile, PromotionSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use args::Args;
pub use config::TillConfig;
pub use error::{CliError, CliResult, ConfigError};
pub use output::OutputFormat;

use config::DataSettings;

/// Runs one receipt: resolve config, load data, price, print.
pub fn run(args: &Args) -> CliResult<()> {
    let mut config = TillConfig::load(args.config.clone())?;
    config.apply_args(args);
    config.validate()?;

    let tags = match &args.tags_file {
        Some(path) => tags::read_tags_file(path)?,
        None => args.tags.clone(),
    };

    let catalog = load_catalog(&config.data)?;
    let receipt = catalog.pipeline().build(&tags)?;
    let text = receipt.render(&config.store.name);

    info!(
        lines = receipt.receipt_items.len(),
        total_pay_price = %receipt.total_pay_price,
        total_saved = %receipt.total_saved,
        "Receipt ready"
    );

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::emit(&mut out, &receipt, &text, &config.output, format)
}

/// Picks a JSON file or the built-in data for each half of the catalog.
pub fn load_catalog(data: &DataSettings) -> CliResult<Catalog> {
    let items: Box<dyn ItemSource> = match &data.items_path {
        Some(path) => Box::new(JsonFile::new(path)),
        None => Box::new(Fixtures),
    };
    let promotions: Box<dyn PromotionSource> = match &data.promotions_path {
        Some(path) => Box::new(JsonFile::new(path)),
        None => Box::new(Fixtures),
    };

    Ok(Catalog::load(&*items, &*promotions)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: warnings only, so stdout/stderr stay clean
/// - `-v` / `-vv` - info / debug for the till crates
/// - `RUST_LOG=till_core=trace` - overrides everything above
///
/// Logs always go to stderr; stdout carries only the receipt.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        _ => "debug",
    };
    format!("warn,till_core={level},till_catalog={level},till_cli={level}")
}
