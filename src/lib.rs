//! geolist - ingestion of categorized IP/domain list files.
//!
//! This crate reads a directory of plain-text list files and turns each one
//! into a typed [`FileRecord`] for a geo database generator to consume.
//!
//! # File naming
//!
//! Every list file is named `<include|exclude>-<ip|domain>-<category>.<lst|rgx>`:
//!
//! - **include/exclude**: allow-list or deny-list for the category
//! - **ip/domain**: network identifiers or domain names
//! - **category**: free-form label, case preserved (`cn`, `ads`, ...)
//! - **lst**: one literal entry per line
//! - **rgx**: one regular expression per line
//!
//! Lines that are empty or start with `#` are ignored.
//!
//! # Quick Start
//!
//! ```no_run
//! use geolist::{IngestConfig, Ingestor, LogDiagnostics};
//!
//! let ingestor = Ingestor::new(IngestConfig::default(), LogDiagnostics);
//! let records = ingestor.ingest("lists")?;
//!
//! for record in &records {
//!     println!(
//!         "{} {} {}: {} addresses, {} networks",
//!         record.direction(),
//!         record.kind(),
//!         record.category(),
//!         record.addresses().len(),
//!         record.networks().len(),
//!     );
//! }
//! # Ok::<(), geolist::Error>(())
//! ```
//!
//! # Error policy
//!
//! Only a failure to scan the root directory is an error. A file with a bad
//! name or unreadable content is reported through [`Diagnostics`] and
//! skipped; a line that is not a valid IP/CIDR or pattern is reported and
//! dropped while the rest of the file is kept.

mod config;
mod diagnostics;
mod direction;
mod error;
mod list_kind;
mod naming;
mod record;
mod scanner;
mod summary;

pub mod address;
pub mod ingest;
pub mod pattern;
pub mod reader;

// Re-export core types
pub use config::IngestConfig;
pub use diagnostics::{Diagnostics, LogDiagnostics, MemoryDiagnostics, Severity};
pub use direction::Direction;
pub use error::{Error, FileError, Result};
pub use list_kind::ListKind;
pub use naming::{FileMeta, LITERAL_EXTENSION, PATTERN_EXTENSION};
pub use record::{Content, FileRecord};
pub use scanner::scan_dir;
pub use summary::{Counts, IngestSummary};

pub use address::AddressSet;
pub use ingest::Ingestor;
