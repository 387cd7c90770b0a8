//! Line reader for list files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::FileError;

const COMMENT_PREFIX: char = '#';

/// Reads the content lines of a list file.
///
/// Empty lines and lines starting with `#` are dropped. Everything else is
/// kept verbatim unless `trim` is set. A trailing `\r` is always dropped, so
/// files with Windows line endings read the same as Unix ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineReader {
    trim: bool,
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim surrounding whitespace before filtering and keep the trimmed text.
    pub fn trimmed(trim: bool) -> Self {
        Self { trim }
    }

    /// Read lines from a buffered reader.
    ///
    /// Invalid UTF-8 is replaced per line rather than failing the read, so
    /// one bad byte only spoils its own line. An I/O error discards
    /// everything read so far.
    pub fn read<R: BufRead>(&self, mut reader: R) -> io::Result<Vec<String>> {
        let mut content = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let mut raw = buf.as_slice();
            if let Some(rest) = raw.strip_suffix(b"\n") {
                raw = rest;
            }
            if let Some(rest) = raw.strip_suffix(b"\r") {
                raw = rest;
            }

            let decoded = String::from_utf8_lossy(raw);
            let line = if self.trim {
                decoded.trim()
            } else {
                &decoded[..]
            };

            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            content.push(line.to_string());
        }

        Ok(content)
    }

    /// Open and read a file.
    pub fn read_path(&self, path: &Path) -> Result<Vec<String>, FileError> {
        let to_err = |source| FileError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_err)?;
        self.read(BufReader::new(file)).map_err(to_err)
    }
}
