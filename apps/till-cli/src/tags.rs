//! Reading scanned tags from a file.
//!
//! Two layouts are accepted:
//!
//! ```text
//! ["ITEM000001", "ITEM000001", "ITEM000003-2.5"]      JSON array
//!
//! ITEM000001                                          one tag per line,
//! ITEM000001                                          blank lines skipped
//! ITEM000003-2.5
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CliError, CliResult};

/// Reads and splits a tags file.
pub fn read_tags_file(path: &Path) -> CliResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::TagsFile {
        path: path.to_path_buf(),
        source,
    })?;

    let tags = parse_tags(&content).map_err(|source| CliError::TagsFormat {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = tags.len(), "Read tags file");
    Ok(tags)
}

/// Splits file content into tags. Content starting with `[` must be JSON.
pub fn parse_tags(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed);
    }

    Ok(trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let tags = parse_tags(r#"["ITEM000001", "ITEM000003-2.5"]"#).unwrap();
        assert_eq!(tags, vec!["ITEM000001", "ITEM000003-2.5"]);
    }

    #[test]
    fn test_line_per_tag() {
        let tags = parse_tags("ITEM000001\r\n\n  ITEM000005-2  \nITEM000001\n").unwrap();
        assert_eq!(tags, vec!["ITEM000001", "ITEM000005-2", "ITEM000001"]);
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_tags("").unwrap().is_empty());
        assert!(parse_tags("[]").unwrap().is_empty());
    }

    #[test]
    fn test_json_array_of_numbers_is_rejected() {
        assert!(parse_tags("[1, 2]").is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_tags_file(&dir.path().join("tags.txt")).unwrap_err();
        assert!(matches!(err, CliError::TagsFile { .. }));
    }
}
