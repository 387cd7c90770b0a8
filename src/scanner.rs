//! Recursive directory listing.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List every non-directory entry under `root`.
///
/// Entries are sorted by file name within each directory. No filtering by
/// extension happens here. Any unreadable node aborts the scan.
pub fn scan_dir(root: impl AsRef<Path>, follow_links: bool) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| Error::Scan {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
