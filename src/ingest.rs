//! Directory ingestion: scan, classify, read and parse list files.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::address::AddressSet;
use crate::error::{FileError, Result};
use crate::naming::FileMeta;
use crate::pattern::compile_patterns;
use crate::reader::LineReader;
use crate::record::{Content, FileRecord};
use crate::scanner::scan_dir;
use crate::{Diagnostics, IngestConfig, LogDiagnostics};

/// Turns a directory of list files into [`FileRecord`]s.
///
/// A file that cannot be classified or read is reported through the
/// diagnostics sink and left out of the result; only a failure to scan the
/// root directory is returned as an error.
///
/// # Examples
/// ```no_run
/// use geolist::{IngestConfig, Ingestor, LogDiagnostics};
///
/// let ingestor = Ingestor::new(IngestConfig::default(), LogDiagnostics);
/// let records = ingestor.ingest("lists")?;
/// for record in &records {
///     println!("{} {} entries", record.category(), record.content().len());
/// }
/// # Ok::<(), geolist::Error>(())
/// ```
pub struct Ingestor<D: Diagnostics = LogDiagnostics> {
    config: IngestConfig,
    reader: LineReader,
    diag: D,
}

impl Default for Ingestor<LogDiagnostics> {
    fn default() -> Self {
        Self::new(IngestConfig::default(), LogDiagnostics)
    }
}

impl<D: Diagnostics> Ingestor<D> {
    pub fn new(config: IngestConfig, diag: D) -> Self {
        Self {
            reader: LineReader::trimmed(config.trim_whitespace),
            config,
            diag,
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diag
    }

    /// Ingest every file under `root`.
    ///
    /// Records come back in scan order, also when files are processed in
    /// parallel.
    pub fn ingest(&self, root: impl AsRef<Path>) -> Result<Vec<FileRecord>> {
        let files = scan_dir(root, self.config.follow_links)?;

        let records = if self.config.parallel {
            files
                .into_par_iter()
                .filter_map(|path| self.accept(path))
                .collect()
        } else {
            files
                .into_iter()
                .filter_map(|path| self.accept(path))
                .collect()
        };

        Ok(records)
    }

    /// Classify, read and parse a single file.
    pub fn ingest_file(&self, path: impl AsRef<Path>) -> std::result::Result<FileRecord, FileError> {
        let path = path.as_ref();
        let meta = FileMeta::from_path(path)?;
        let lines = self.reader.read_path(path)?;

        let content = if meta.is_pattern {
            let patterns = compile_patterns(&lines, &self.diag);
            self.diag.info(&format!(
                "'{}': compiled {} patterns",
                path.display(),
                patterns.len()
            ));
            Content::Patterns(patterns)
        } else if meta.is_address_list() {
            let set = AddressSet::partition(&lines, &self.diag);
            self.diag.info(&format!(
                "'{}': parsed {} IP addresses",
                path.display(),
                set.addresses.len()
            ));
            self.diag.info(&format!(
                "'{}': parsed {} IP networks",
                path.display(),
                set.networks.len()
            ));
            Content::Addresses { lines, set }
        } else {
            Content::Literals(lines)
        };

        Ok(FileRecord::new(path.to_path_buf(), meta, content))
    }

    fn accept(&self, path: PathBuf) -> Option<FileRecord> {
        match self.ingest_file(&path) {
            Ok(record) => {
                self.diag
                    .info(&format!("file '{}' successfully read", path.display()));
                Some(record)
            }
            Err(e) => {
                self.diag
                    .warn(&format!("file '{}' skipped: {}", path.display(), e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, ListKind, MemoryDiagnostics};
    use std::fs;
    use tempfile::tempdir;

    fn ingestor() -> Ingestor<MemoryDiagnostics> {
        Ingestor::new(IngestConfig::default(), MemoryDiagnostics::new())
    }

    #[test]
    fn test_domain_literal_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exclude-domain-tracking.lst");
        fs::write(&path, "# comment\n\nexample.com\n*.ads.net\n").unwrap();

        let ingestor = ingestor();
        let record = ingestor.ingest_file(&path).unwrap();

        assert_eq!(record.direction(), Direction::Exclude);
        assert_eq!(record.kind(), ListKind::Domain);
        assert!(!record.is_pattern());
        assert_eq!(record.lines(), ["example.com".to_string(), "*.ads.net".to_string()]);
        assert!(matches!(record.content(), Content::Literals(_)));
        assert!(ingestor.diagnostics().messages().is_empty());
    }

    #[test]
    fn test_ip_file_counts_logged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("include-ip-cn.lst");
        fs::write(&path, "1.2.3.0/24\n8.8.8.8\n10.0.0.1/32\nnot-an-ip\n").unwrap();

        let ingestor = ingestor();
        let record = ingestor.ingest_file(&path).unwrap();

        assert_eq!(record.networks(), ["1.2.3.0/24".parse::<ipnet::IpNet>().unwrap()]);
        assert_eq!(record.addresses().len(), 2);
        assert_eq!(record.lines().len(), 4);

        let diag = ingestor.diagnostics();
        assert_eq!(diag.warnings(), vec!["invalid IP address or subnet: not-an-ip"]);
        assert_eq!(
            diag.infos(),
            vec![
                format!("'{}': parsed 2 IP addresses", path.display()),
                format!("'{}': parsed 1 IP networks", path.display()),
            ]
        );
    }

    #[test]
    fn test_ip_pattern_file_not_partitioned() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("include-ip-x.rgx");
        fs::write(&path, "^10\\.\n(\n^192\\.168\\.\n").unwrap();

        let ingestor = ingestor();
        let record = ingestor.ingest_file(&path).unwrap();

        assert!(record.is_pattern());
        assert_eq!(record.patterns().len(), 2);
        assert!(record.lines().is_empty());
        assert!(record.addresses().is_empty());
        assert_eq!(ingestor.diagnostics().warnings().len(), 1);
    }

    #[test]
    fn test_bad_name_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "hello").unwrap();
        fs::write(dir.path().join("include-ip-cn.lst"), "8.8.8.8\n").unwrap();

        let ingestor = ingestor();
        let records = ingestor.ingest(dir.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), "cn");

        let warnings = ingestor.diagnostics().warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("readme.md"));
        assert!(warnings[0].contains("invalid extension"));
    }

    #[test]
    fn test_trim_config_applies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("include-ip-lan.lst");
        fs::write(&path, "  192.168.0.0/16  \n   \n").unwrap();

        let plain = ingestor();
        let record = plain.ingest_file(&path).unwrap();
        assert!(record.networks().is_empty());
        assert_eq!(plain.diagnostics().warnings().len(), 2);

        let trimming = Ingestor::new(
            IngestConfig::new().with_trim_whitespace(true),
            MemoryDiagnostics::new(),
        );
        let record = trimming.ingest_file(&path).unwrap();
        assert_eq!(record.networks().len(), 1);
        assert_eq!(record.lines(), ["192.168.0.0/16".to_string()]);
        assert!(trimming.diagnostics().warnings().is_empty());
    }

    #[test]
    fn test_missing_root_is_error() {
        let ingestor = ingestor();
        assert!(ingestor.ingest("/nonexistent/geolist").is_err());
    }
}
