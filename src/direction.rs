//! Include/exclude direction of a list file.

use std::fmt;

/// Direction tags a list as allow-list or deny-list for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Entries are added to the category
    Include,
    /// Entries are removed from the category
    Exclude,
}

impl Direction {
    /// Parse a direction token (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "include" => Some(Direction::Include),
            "exclude" => Some(Direction::Exclude),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Include => "include",
            Direction::Exclude => "exclude",
        }
    }

    pub fn is_include(&self) -> bool {
        matches!(self, Direction::Include)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
