//! Error types for geolist.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for geolist operations.
///
/// Only scan-level failures abort an ingestion run. Per-file problems are
/// reported as [`FileError`] and the file is skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// Root directory could not be listed
    #[error("failed to scan '{}': {}", root.display(), source)]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for geolist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for a single list file.
#[derive(Error, Debug)]
pub enum FileError {
    /// Extension is neither `.lst` nor `.rgx`
    #[error("'{0}' is invalid extension, expected '.lst' or '.rgx'")]
    InvalidExtension(String),

    /// Fewer than three dash-separated tokens in the file stem
    #[error("expected at least 3 values in the file name: include/exclude, ip/domain, category_name (got '{0}')")]
    InvalidNaming(String),

    /// First token is not include/exclude
    #[error("invalid value '{0}', expected 'include' or 'exclude'")]
    InvalidDirectionToken(String),

    /// Second token is not ip/domain
    #[error("invalid value '{0}', expected 'ip' or 'domain'")]
    InvalidKindToken(String),

    /// File could not be opened or read
    #[error("failed to read '{}': {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_messages() {
        let err = FileError::InvalidExtension(".txt".to_string());
        assert_eq!(
            err.to_string(),
            "'.txt' is invalid extension, expected '.lst' or '.rgx'"
        );

        let err = FileError::InvalidKindToken("url".to_string());
        assert!(err.to_string().contains("'ip' or 'domain'"));
    }

    #[test]
    fn test_read_error_includes_path() {
        let err = FileError::Read {
            path: PathBuf::from("lists/include-ip-cn.lst"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("lists/include-ip-cn.lst"));
    }
}
