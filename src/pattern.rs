//! Regular expression list compilation.

use regex::Regex;

use crate::Diagnostics;

/// Compile each line as a regular expression.
///
/// Lines that fail to compile are reported through `diag` and skipped; the
/// result keeps the source order of the lines that compiled.
///
/// # Examples
/// ```
/// use geolist::{pattern::compile_patterns, MemoryDiagnostics};
///
/// let diag = MemoryDiagnostics::new();
/// let lines = vec![r"^ads\.".to_string(), "(".to_string()];
/// let patterns = compile_patterns(&lines, &diag);
/// assert_eq!(patterns.len(), 1);
/// assert_eq!(diag.warnings().len(), 1);
/// ```
pub fn compile_patterns<D: Diagnostics + ?Sized>(lines: &[String], diag: &D) -> Vec<Regex> {
    let mut patterns = Vec::with_capacity(lines.len());

    for line in lines {
        match Regex::new(line) {
            Ok(re) => patterns.push(re),
            Err(e) => diag.warn(&format!("invalid pattern '{}': {}", line, e)),
        }
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDiagnostics;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compile_in_order() {
        let diag = MemoryDiagnostics::new();
        let patterns = compile_patterns(&lines(&[r"(^|\.)google\.com$", r"^ad[sx]?\d*\."]), &diag);

        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].as_str(), r"(^|\.)google\.com$");
        assert!(patterns[0].is_match("mail.google.com"));
        assert!(patterns[1].is_match("ads3.example.net"));
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_invalid_line_skipped_with_warning() {
        let diag = MemoryDiagnostics::new();
        let patterns = compile_patterns(&lines(&["^a", "[unclosed", "b$"]), &diag);

        let sources: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();
        assert_eq!(sources, vec!["^a", "b$"]);

        let warnings = diag.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("[unclosed"));
    }

    #[test]
    fn test_empty_input() {
        let diag = MemoryDiagnostics::new();
        assert!(compile_patterns(&[], &diag).is_empty());
    }
}
