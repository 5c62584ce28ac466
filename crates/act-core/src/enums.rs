//! Display enums parsed out of the opaque item fields.
//!
//! Models answer in French (`haute`, `moyenne`, `basse`) or English, with
//! arbitrary casing. Parsing is lenient and returns `None` for anything it
//! does not recognise; callers treat that as "field absent".

use std::fmt;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse the wire value, accepting French and English spellings.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "haute" | "high" => Some(Self::High),
            "moyenne" | "medium" => Some(Self::Medium),
            "basse" | "low" => Some(Self::Low),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EffortLevel
// ---------------------------------------------------------------------------

/// Effort level on the 1-3 scale the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffortLevel {
    Light,
    Moderate,
    Heavy,
}

impl EffortLevel {
    /// Parse `"1"`, `"2"` or `"3"` (surrounding whitespace allowed).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::Light),
            "2" => Some(Self::Moderate),
            "3" => Some(Self::Heavy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn from_level(level: u64) -> Option<Self> {
        match level {
            1 => Some(Self::Light),
            2 => Some(Self::Moderate),
            3 => Some(Self::Heavy),
            _ => None,
        }
    }

    /// Numeric level, 1 through 3.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Light => 1,
            Self::Moderate => 2,
            Self::Heavy => 3,
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/3", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_accepts_both_languages() {
        assert_eq!(Priority::parse("haute"), Some(Priority::High));
        assert_eq!(Priority::parse("Moyenne"), Some(Priority::Medium));
        assert_eq!(Priority::parse(" LOW "), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn effort_parses_string_and_integer_levels() {
        assert_eq!(EffortLevel::parse("2"), Some(EffortLevel::Moderate));
        assert_eq!(EffortLevel::from_level(3), Some(EffortLevel::Heavy));
        assert_eq!(EffortLevel::parse("4"), None);
        assert_eq!(EffortLevel::from_level(0), None);
        assert_eq!(EffortLevel::Light.to_string(), "1/3");
    }
}
