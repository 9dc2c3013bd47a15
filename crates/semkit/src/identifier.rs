//! Dot-separated prerelease and build identifiers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::error::SemverError;
use crate::version_parser::VersionParser;

/// A single identifier inside a prerelease or build section
///
/// Numeric identifiers keep their digit text, so digit runs longer than any
/// machine integer still compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Only ASCII digits, without leading zero unless exactly "0"
    Numeric(String),
    /// ASCII alphanumerics and hyphens, with at least one non-digit
    Alphanumeric(String),
}

impl Identifier {
    /// Classify an already validated identifier
    pub(crate) fn classify(text: &str) -> Self {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(text.to_string())
        } else {
            Identifier::Alphanumeric(text.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Numeric(s) | Identifier::Alphanumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare_identifier(self, other)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty, ordered sequence of identifiers (`rc.1`, `build.2024.05`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifiers(Vec<Identifier>);

impl Identifiers {
    /// Build from text the grammar has already accepted
    pub(crate) fn from_validated(text: &str) -> Self {
        Identifiers(text.split('.').map(Identifier::classify).collect())
    }

    /// Parse a standalone dotted identifier list such as `alpha.1`
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        VersionParser::parse_identifiers(text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list produced by the parser
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Identifiers {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifiers::parse(s)
    }
}

impl<'a> IntoIterator for &'a Identifiers {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Identifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(id.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert!(Identifier::classify("0").is_numeric());
        assert!(Identifier::classify("42").is_numeric());
        assert!(!Identifier::classify("01abc").is_numeric());
        assert!(!Identifier::classify("-").is_numeric());
        assert!(!Identifier::classify("rc").is_numeric());
    }

    #[test]
    fn test_parse_and_render() {
        let ids = Identifiers::parse("alpha.1.x-y").unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.as_slice()[1], Identifier::Numeric("1".into()));
        assert_eq!(ids.to_string(), "alpha.1.x-y");
    }

    #[test]
    fn test_parse_rejects_bad_lists() {
        assert!(Identifiers::parse("").is_err());
        assert!(Identifiers::parse("a..b").is_err());
        assert!(Identifiers::parse("rc.01").is_err());
        assert!(Identifiers::parse("rc 1").is_err());
        assert!(Identifiers::parse("ünï").is_err());
    }

    #[test]
    fn test_numeric_ordering_beyond_u64() {
        let small = Identifier::classify("18446744073709551615");
        let big = Identifier::classify("18446744073709551616");
        assert!(small < big);
        assert!(Identifier::classify("9") < Identifier::classify("10"));
    }
}
