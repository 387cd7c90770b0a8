//! Classified list file records.

use ipnet::IpNet;
use regex::Regex;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::address::AddressSet;
use crate::naming::FileMeta;
use crate::{Direction, ListKind};

/// Parsed content of a list file.
#[derive(Debug, Clone)]
pub enum Content {
    /// Literal lines of a domain list
    Literals(Vec<String>),
    /// Lines of an IP list with the addresses and networks derived from them
    Addresses {
        lines: Vec<String>,
        set: AddressSet,
    },
    /// Compiled expressions of a `.rgx` file
    Patterns(Vec<Regex>),
}

impl Content {
    /// Number of usable entries.
    pub fn len(&self) -> usize {
        match self {
            Content::Literals(lines) => lines.len(),
            Content::Addresses { set, .. } => set.len(),
            Content::Patterns(patterns) => patterns.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Regex has no PartialEq; patterns compare by source text.
impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Literals(a), Content::Literals(b)) => a == b,
            (
                Content::Addresses { lines: la, set: sa },
                Content::Addresses { lines: lb, set: sb },
            ) => la == lb && sa == sb,
            (Content::Patterns(a), Content::Patterns(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.as_str() == y.as_str())
            }
            _ => false,
        }
    }
}

impl Eq for Content {}

/// One successfully classified and parsed list file.
///
/// Fields are private so that the metadata cannot change after
/// construction; the record is identified by its source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    meta: FileMeta,
    content: Content,
}

impl FileRecord {
    pub(crate) fn new(path: PathBuf, meta: FileMeta, content: Content) -> Self {
        Self {
            path,
            meta,
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta(&self) -> &FileMeta {
        &self.meta
    }

    pub fn direction(&self) -> Direction {
        self.meta.direction
    }

    pub fn kind(&self) -> ListKind {
        self.meta.kind
    }

    pub fn category(&self) -> &str {
        &self.meta.category
    }

    pub fn is_pattern(&self) -> bool {
        self.meta.is_pattern
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Source lines. Empty for pattern files.
    pub fn lines(&self) -> &[String] {
        match &self.content {
            Content::Literals(lines) | Content::Addresses { lines, .. } => lines,
            Content::Patterns(_) => &[],
        }
    }

    /// Compiled patterns. Empty unless this is a pattern file.
    pub fn patterns(&self) -> &[Regex] {
        match &self.content {
            Content::Patterns(patterns) => patterns,
            _ => &[],
        }
    }

    /// Single addresses. Empty unless this is an IP list.
    pub fn addresses(&self) -> &[IpAddr] {
        match &self.content {
            Content::Addresses { set, .. } => &set.addresses,
            _ => &[],
        }
    }

    /// Networks. Empty unless this is an IP list.
    pub fn networks(&self) -> &[IpNet] {
        match &self.content {
            Content::Addresses { set, .. } => &set.networks,
            _ => &[],
        }
    }

    /// Take ownership of the parsed content.
    pub fn into_parts(self) -> (PathBuf, FileMeta, Content) {
        (self.path, self.meta, self.content)
    }
}
