//! Normalization of comparison operands
//!
//! A version can be compared against another version, a version string, a
//! positional tuple, or a list of named fields. Every shape is coerced into a
//! [`VersionInfo`] before the comparator runs.

use std::borrow::Cow;

use crate::error::{Result, SemverError};
use crate::version::{VersionInfo, FIELD_NAMES};
use crate::version_parser::VersionParser;

/// Right-hand operand of a version comparison
#[derive(Debug, Clone)]
pub enum Comparable<'a> {
    /// A borrowed, already parsed version
    Version(&'a VersionInfo),
    /// An owned, already parsed version
    Owned(VersionInfo),
    /// A version string, validated by the parser
    Text(&'a str),
    /// `(major, minor, patch, prerelease, build)`
    Tuple(u64, u64, u64, Option<&'a str>, Option<&'a str>),
    /// Positional string components, 3 to 5 entries
    Parts(&'a [&'a str]),
    /// Named components (`major`, `minor`, `patch`, `prerelease`, `build`)
    Fields(&'a [(&'a str, &'a str)]),
}

impl<'a> Comparable<'a> {
    /// Normalize the operand into a version
    ///
    /// Shape problems (wrong arity, missing or unknown fields, core numbers
    /// outside the number grammar) are [`SemverError::TypeMismatch`]; grammar
    /// problems in a string are [`SemverError::MalformedVersion`].
    pub fn coerce(self) -> Result<Cow<'a, VersionInfo>> {
        match self {
            Comparable::Version(v) => Ok(Cow::Borrowed(v)),
            Comparable::Owned(v) => Ok(Cow::Owned(v)),
            Comparable::Text(s) => VersionInfo::parse(s).map(Cow::Owned),
            Comparable::Tuple(major, minor, patch, prerelease, build) => {
                VersionInfo::from_parts(major, minor, patch, prerelease, build).map(Cow::Owned)
            }
            Comparable::Parts(parts) => Self::from_positional(parts).map(Cow::Owned),
            Comparable::Fields(fields) => Self::from_named(fields).map(Cow::Owned),
        }
    }

    fn from_positional(parts: &[&str]) -> Result<VersionInfo> {
        if !(3..=5).contains(&parts.len()) {
            log::debug!("Cannot coerce {} positional parts into a version", parts.len());
            return Err(SemverError::TypeMismatch(format!(
                "a sequence of {} parts (expected 3 to 5)",
                parts.len()
            )));
        }
        VersionInfo::from_parts(
            number(parts[0])?,
            number(parts[1])?,
            number(parts[2])?,
            parts.get(3).copied(),
            parts.get(4).copied(),
        )
    }

    fn from_named(fields: &[(&str, &str)]) -> Result<VersionInfo> {
        let mut slots: [Option<&str>; 5] = [None; 5];
        for (name, value) in fields {
            let index = FIELD_NAMES.iter().position(|f| f == name).ok_or_else(|| {
                log::debug!("Unknown version field {:?}", name);
                SemverError::TypeMismatch(format!("a mapping with unknown field {:?}", name))
            })?;
            if slots[index].replace(*value).is_some() {
                return Err(SemverError::TypeMismatch(format!(
                    "a mapping with duplicate field {:?}",
                    name
                )));
            }
        }

        let required = |index: usize| -> Result<u64> {
            let value = slots[index].ok_or_else(|| {
                SemverError::TypeMismatch(format!("a mapping without {:?}", FIELD_NAMES[index]))
            })?;
            number(value)
        };

        VersionInfo::from_parts(required(0)?, required(1)?, required(2)?, slots[3], slots[4])
    }
}

// Same rule as a core number inside a version string
fn number(text: &str) -> Result<u64> {
    VersionParser::parse_number(text)
        .map_err(|_| SemverError::TypeMismatch(format!("an invalid version number {:?}", text)))
}

impl<'a> From<&'a VersionInfo> for Comparable<'a> {
    fn from(v: &'a VersionInfo) -> Self {
        Comparable::Version(v)
    }
}

impl<'a> From<VersionInfo> for Comparable<'a> {
    fn from(v: VersionInfo) -> Self {
        Comparable::Owned(v)
    }
}

impl<'a> From<&'a str> for Comparable<'a> {
    fn from(s: &'a str) -> Self {
        Comparable::Text(s)
    }
}

impl<'a> From<&'a String> for Comparable<'a> {
    fn from(s: &'a String) -> Self {
        Comparable::Text(s.as_str())
    }
}

impl<'a> From<(u64, u64, u64)> for Comparable<'a> {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Comparable::Tuple(major, minor, patch, None, None)
    }
}

impl<'a> From<(u64, u64, u64, &'a str)> for Comparable<'a> {
    fn from((major, minor, patch, prerelease): (u64, u64, u64, &'a str)) -> Self {
        Comparable::Tuple(major, minor, patch, Some(prerelease), None)
    }
}

impl<'a> From<(u64, u64, u64, Option<&'a str>, Option<&'a str>)> for Comparable<'a> {
    fn from(
        (major, minor, patch, prerelease, build): (u64, u64, u64, Option<&'a str>, Option<&'a str>),
    ) -> Self {
        Comparable::Tuple(major, minor, patch, prerelease, build)
    }
}

impl<'a> From<&'a [&'a str]> for Comparable<'a> {
    fn from(parts: &'a [&'a str]) -> Self {
        Comparable::Parts(parts)
    }
}

impl<'a> From<&'a [(&'a str, &'a str)]> for Comparable<'a> {
    fn from(fields: &'a [(&'a str, &'a str)]) -> Self {
        Comparable::Fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce<'a>(c: impl Into<Comparable<'a>>) -> Result<String> {
        c.into().coerce().map(|v| v.to_string())
    }

    #[test]
    fn test_coerce_each_shape() {
        let parsed = VersionInfo::parse("1.2.3-rc.1").unwrap();
        assert_eq!(coerce(&parsed).unwrap(), "1.2.3-rc.1");
        assert_eq!(coerce(parsed.clone()).unwrap(), "1.2.3-rc.1");
        assert_eq!(coerce("1.2.3+b").unwrap(), "1.2.3+b");
        assert_eq!(coerce(&"4.5.6".to_string()).unwrap(), "4.5.6");
        assert_eq!(coerce((1u64, 2u64, 3u64)).unwrap(), "1.2.3");
        assert_eq!(coerce((1u64, 2u64, 3u64, "rc.1")).unwrap(), "1.2.3-rc.1");
        assert_eq!(
            coerce((1u64, 2u64, 3u64, None, Some("b.1"))).unwrap(),
            "1.2.3+b.1"
        );
        assert_eq!(coerce(["1", "2", "3", "pre.2", "build.4"].as_slice()).unwrap(), "1.2.3-pre.2+build.4");
        assert_eq!(
            coerce([("patch", "3"), ("major", "1"), ("minor", "2"), ("build", "x")].as_slice()).unwrap(),
            "1.2.3+x"
        );
    }

    #[test]
    fn test_borrowed_version_is_not_cloned() {
        let parsed = VersionInfo::parse("1.2.3").unwrap();
        assert!(matches!(Comparable::from(&parsed).coerce().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_shape_errors_are_type_mismatch() {
        for result in [
            coerce(["1", "2"].as_slice()),
            coerce(["1", "2", "3", "a", "b", "c"].as_slice()),
            coerce(["1", "x", "3"].as_slice()),
            coerce(["01", "2", "3"].as_slice()),
            coerce(["1", "+2", "3"].as_slice()),
            coerce([("major", "1"), ("minor", "02"), ("patch", "3")].as_slice()),
            coerce([("major", "1"), ("minor", "2")].as_slice()),
            coerce([("major", "1"), ("minor", "2"), ("patch", "3"), ("epoch", "1")].as_slice()),
            coerce([("major", "1"), ("major", "2"), ("minor", "2"), ("patch", "3")].as_slice()),
        ] {
            assert!(matches!(result, Err(SemverError::TypeMismatch(_))), "{:?}", result);
        }
    }

    #[test]
    fn test_grammar_errors_are_malformed() {
        assert!(matches!(coerce("1.2"), Err(SemverError::MalformedVersion(_))));
        assert!(matches!(
            coerce((1u64, 2u64, 3u64, "rc..1")),
            Err(SemverError::MalformedVersion(_))
        ));
        assert!(matches!(
            coerce(["1", "2", "3", "01"].as_slice()),
            Err(SemverError::MalformedVersion(_))
        ));
    }
}
