//! Diagnostic sinks for ingestion messages.
//!
//! Ingestion reports accepted files and skipped files/lines through a
//! [`Diagnostics`] value passed in by the caller instead of a process-wide
//! logger handle.

use parking_lot::Mutex;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
}

/// A sink accepting leveled text messages.
///
/// Implementations must be `Send + Sync` so that files can be processed
/// on a thread pool.
pub trait Diagnostics: Send + Sync {
    /// File accepted, content counts.
    fn info(&self, message: &str);

    /// File or line skipped, with the reason.
    fn warn(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Forwards messages to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn info(&self, message: &str) {
        log::info!(target: "geolist", "{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!(target: "geolist", "{}", message);
    }
}

/// Collects messages in memory.
///
/// # Examples
/// ```
/// use geolist::{Diagnostics, MemoryDiagnostics};
///
/// let diag = MemoryDiagnostics::new();
/// diag.warn("invalid IP address or subnet: x");
/// assert_eq!(diag.warnings(), vec!["invalid IP address or subnet: x".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in arrival order.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.filtered(Severity::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.filtered(Severity::Warn)
    }

    /// Number of messages with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }

    fn filtered(&self, severity: Severity) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.messages.lock().push((severity, message.to_string()));
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Severity::Warn, message);
    }
}
