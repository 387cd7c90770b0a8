//! Per-category counts over an ingestion result.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::record::{Content, FileRecord};

/// Entry counts for a group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub files: usize,
    pub lines: usize,
    pub addresses: usize,
    pub networks: usize,
    pub patterns: usize,
}

impl Counts {
    fn add(&mut self, record: &FileRecord) {
        self.files += 1;
        match record.content() {
            Content::Literals(lines) => self.lines += lines.len(),
            Content::Addresses { lines, set } => {
                self.lines += lines.len();
                self.addresses += set.addresses.len();
                self.networks += set.networks.len();
            }
            Content::Patterns(patterns) => self.patterns += patterns.len(),
        }
    }
}

/// Summary of an ingestion run, keyed by category.
///
/// Categories are counted as written; `CN` and `cn` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub total: Counts,
    pub categories: BTreeMap<String, Counts>,
}

impl IngestSummary {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.total.add(record);
            summary
                .categories
                .entry(record.category().to_string())
                .or_default()
                .add(record);
        }
        summary
    }
}
