//! List content kind definitions.

use std::fmt;

/// ListKind says whether a file holds network identifiers or domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// IP addresses and CIDR blocks (`ip` token)
    Address,
    /// Domain names or other text identifiers (`domain` token)
    Domain,
}

impl ListKind {
    /// Parse a kind token (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ip" => Some(ListKind::Address),
            "domain" => Some(ListKind::Domain),
            _ => None,
        }
    }

    /// Get the filename token for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Address => "ip",
            ListKind::Domain => "domain",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ListKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
