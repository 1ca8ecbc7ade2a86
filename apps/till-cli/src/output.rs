//! Receipt sinks: the receipt file and stdout.
//!
//! The file always receives the rendered text exactly as
//! [`till_core::receipt::render_receipt`] produced it (no trailing newline).
//! It is written before anything reaches stdout, so a failed write never
//! leaves a printed receipt behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use till_core::Receipt;
use tracing::info;

use crate::config::OutputSettings;
use crate::error::{CliError, CliResult};

/// Stdout rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes the receipt file (if enabled), then prints to `out`.
pub fn emit<W: Write>(
    out: &mut W,
    receipt: &Receipt,
    text: &str,
    settings: &OutputSettings,
    format: OutputFormat,
) -> CliResult<()> {
    if settings.write_file {
        write_receipt_file(&settings.receipt_path, text)?;
    }

    match format {
        OutputFormat::Text => writeln!(out, "{text}").map_err(CliError::Stdout)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, receipt)?;
            writeln!(out).map_err(CliError::Stdout)?;
        }
    }

    out.flush().map_err(CliError::Stdout)
}

/// Overwrites `path` with the receipt text.
pub fn write_receipt_file(path: &Path, text: &str) -> CliResult<()> {
    fs::write(path, text).map_err(|source| CliError::ReceiptFile {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Receipt written");
    Ok(())
}
