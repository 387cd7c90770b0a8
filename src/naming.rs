//! Filename convention: `<include|exclude>-<ip|domain>-<category>.<lst|rgx>`.

use std::path::Path;

use crate::error::FileError;
use crate::{Direction, ListKind};

/// Extension for literal content (domains, IPs, CIDRs).
pub const LITERAL_EXTENSION: &str = "lst";
/// Extension for one regular expression per line.
pub const PATTERN_EXTENSION: &str = "rgx";

const TOKEN_DELIMITER: char = '-';

/// Metadata derived from a list file's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileMeta {
    pub direction: Direction,
    pub kind: ListKind,
    pub category: String,
    /// Set for `.rgx` files
    pub is_pattern: bool,
}

impl FileMeta {
    /// Classify a file by its name. Only the final path component is used.
    ///
    /// Tokens beyond the third are ignored, so `include-ip-cn-extra.lst`
    /// yields category `cn`. An empty category token is rejected.
    ///
    /// # Examples
    /// ```
    /// use geolist::{Direction, FileMeta, ListKind};
    ///
    /// let meta = FileMeta::from_path("lists/include-ip-ads.lst").unwrap();
    /// assert_eq!(meta.direction, Direction::Include);
    /// assert_eq!(meta.kind, ListKind::Address);
    /// assert_eq!(meta.category, "ads");
    /// assert!(!meta.is_pattern);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        let (stem, extension) = match file_name.rfind('.') {
            Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
            None => (&file_name[..], ""),
        };

        let is_pattern = match extension {
            LITERAL_EXTENSION => false,
            PATTERN_EXTENSION => true,
            other => {
                let shown = if other.is_empty() {
                    String::new()
                } else {
                    format!(".{}", other)
                };
                return Err(FileError::InvalidExtension(shown));
            }
        };

        let parts: Vec<&str> = stem.split(TOKEN_DELIMITER).collect();
        if parts.len() < 3 {
            return Err(FileError::InvalidNaming(file_name.to_string()));
        }

        let direction = Direction::parse(parts[0])
            .ok_or_else(|| FileError::InvalidDirectionToken(parts[0].to_string()))?;
        let kind = ListKind::parse(parts[1])
            .ok_or_else(|| FileError::InvalidKindToken(parts[1].to_string()))?;
        if parts[2].is_empty() {
            return Err(FileError::InvalidNaming(file_name.to_string()));
        }

        Ok(Self {
            direction,
            kind,
            category: parts[2].to_string(),
            is_pattern,
        })
    }

    /// Whether the content goes through the address/network partitioner.
    pub fn is_address_list(&self) -> bool {
        self.kind == ListKind::Address && !self.is_pattern
    }
}
