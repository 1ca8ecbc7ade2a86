//! Command-line arguments.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Default)]
#[command(
    name = "till",
    version,
    about = "Prints a shopping receipt from scanned item tags",
    long_about = "Prints a shopping receipt from scanned item tags.\n\n\
        A tag is a barcode (one unit) or BARCODE-QUANTITY for weighed goods,\n\
        e.g. `till ITEM000001 ITEM000001 ITEM000003-2.5`.\n\
        Items listed in a BUY_TWO_GET_ONE_FREE promotion get every third unit free."
)]
pub struct Args {
    /// Scanned tags in scan order
    #[arg(value_name = "TAG")]
    pub tags: Vec<String>,

    /// Read tags from a file (JSON array of strings, or one tag per line)
    #[arg(long, value_name = "PATH", conflicts_with = "tags")]
    pub tags_file: Option<PathBuf>,

    /// Item catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    pub items: Option<PathBuf>,

    /// Promotions JSON file (defaults to the built-in promotions)
    #[arg(long, value_name = "PATH")]
    pub promotions: Option<PathBuf>,

    /// Receipt file to write
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print only; don't write the receipt file
    #[arg(long)]
    pub no_file: bool,

    /// Print the structured receipt as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Store name shown in the receipt banner
    #[arg(long, value_name = "NAME")]
    pub store_name: Option<String>,

    /// Config file (defaults to till.toml in the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_tags_and_flags() {
        let args = Args::parse_from([
            "till",
            "ITEM000001",
            "ITEM000003-2.5",
            "--no-file",
            "--store-name",
            "小店",
            "-vv",
        ]);
        assert_eq!(args.tags, vec!["ITEM000001", "ITEM000003-2.5"]);
        assert!(args.no_file);
        assert_eq!(args.store_name.as_deref(), Some("小店"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_tags_file_conflicts_with_tags() {
        let result = Args::try_parse_from(["till", "ITEM000001", "--tags-file", "tags.json"]);
        assert!(result.is_err());
    }
}
