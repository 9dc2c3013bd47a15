//! The immutable version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::bump::{increment_last_number, BumpKind, DEFAULT_BUILD_TOKEN, DEFAULT_PRERELEASE_TOKEN};
use crate::comparable::Comparable;
use crate::comparator::Comparator;
use crate::error::{Result, SemverError};
use crate::identifier::Identifiers;
use crate::operator::Operator;
use crate::version_parser::VersionParser;

/// Field names accepted by [`VersionInfo::replace`]
pub const FIELD_NAMES: [&str; 5] = ["major", "minor", "patch", "prerelease", "build"];

/// The validated fields of a version, as produced by the parser
///
/// Equality here is structural (build included); precedence lives on
/// [`VersionInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionCore {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Identifiers>,
    pub build: Option<Identifiers>,
}

impl fmt::Display for VersionCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// An immutable semantic version
///
/// Equality, ordering and hashing follow precedence, so two versions that
/// differ only in build metadata are equal. Use [`VersionInfo::identical_to`]
/// for a field-by-field check.
#[derive(Debug, Clone)]
pub struct VersionInfo {
    core: VersionCore,
}

impl VersionInfo {
    /// A release version with no prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionInfo {
            core: VersionCore {
                major,
                minor,
                patch,
                prerelease: None,
                build: None,
            },
        }
    }

    /// Build from all five fields, validating the qualifiers
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self> {
        let qualifier = |text: Option<&str>| -> Result<Option<Identifiers>> {
            text.map(|t| {
                VersionParser::parse_identifiers(t).map_err(|_| {
                    SemverError::malformed(render(major, minor, patch, prerelease, build))
                })
            })
            .transpose()
        };

        Ok(VersionInfo {
            core: VersionCore {
                major,
                minor,
                patch,
                prerelease: qualifier(prerelease)?,
                build: qualifier(build)?,
            },
        })
    }

    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self> {
        VersionParser::parse(version).map(VersionInfo::from)
    }

    pub fn major(&self) -> u64 {
        self.core.major
    }

    pub fn minor(&self) -> u64 {
        self.core.minor
    }

    pub fn patch(&self) -> u64 {
        self.core.patch
    }

    pub fn prerelease(&self) -> Option<&Identifiers> {
        self.core.prerelease.as_ref()
    }

    pub fn build(&self) -> Option<&Identifiers> {
        self.core.build.as_ref()
    }

    pub fn core(&self) -> &VersionCore {
        &self.core
    }

    pub fn is_prerelease(&self) -> bool {
        self.core.prerelease.is_some()
    }

    /// Positional view: `(major, minor, patch, prerelease, build)`
    pub fn to_tuple(&self) -> (u64, u64, u64, Option<String>, Option<String>) {
        (
            self.core.major,
            self.core.minor,
            self.core.patch,
            self.core.prerelease.as_ref().map(|p| p.to_string()),
            self.core.build.as_ref().map(|b| b.to_string()),
        )
    }

    /// Named view in field order; absent qualifiers are omitted
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("major", self.core.major.to_string()),
            ("minor", self.core.minor.to_string()),
            ("patch", self.core.patch.to_string()),
        ];
        if let Some(pre) = &self.core.prerelease {
            fields.push(("prerelease", pre.to_string()));
        }
        if let Some(build) = &self.core.build {
            fields.push(("build", build.to_string()));
        }
        fields
    }

    /// Field-by-field equality, build metadata included
    pub fn identical_to(&self, other: &VersionInfo) -> bool {
        self.core == other.core
    }

    /// Three-way comparison against any operand that normalizes to a version
    pub fn compare_to<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<Ordering> {
        let other = other.into().coerce()?;
        Ok(Comparator::compare(&self.core, other.core()))
    }

    pub fn equal_to<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<bool> {
        self.holds(Operator::Equal, other)
    }

    pub fn not_equal_to<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<bool> {
        self.holds(Operator::NotEqual, other)
    }

    pub fn less_than<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<bool> {
        self.holds(Operator::LessThan, other)
    }

    pub fn less_than_or_equal_to<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<bool> {
        self.holds(Operator::LessThanOrEqual, other)
    }

    pub fn greater_than<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<bool> {
        self.holds(Operator::GreaterThan, other)
    }

    pub fn greater_than_or_equal_to<'a>(&self, other: impl Into<Comparable<'a>>) -> Result<bool> {
        self.holds(Operator::GreaterThanOrEqual, other)
    }

    /// Evaluate `self <operator> other`
    ///
    /// `operator` must be one of `<`, `>`, `<=`, `>=`, `==`, `!=`.
    pub fn matches<'a>(&self, operator: &str, other: impl Into<Comparable<'a>>) -> Result<bool> {
        let operator: Operator = operator.parse()?;
        self.holds(operator, other)
    }

    fn holds<'a>(&self, operator: Operator, other: impl Into<Comparable<'a>>) -> Result<bool> {
        Ok(operator.holds(self.compare_to(other)?))
    }

    pub fn bump_major(&self) -> Result<Self> {
        let major = self.core.major.checked_add(1).ok_or_else(|| self.overflow("major"))?;
        Ok(VersionInfo::new(major, 0, 0))
    }

    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self.core.minor.checked_add(1).ok_or_else(|| self.overflow("minor"))?;
        Ok(VersionInfo::new(self.core.major, minor, 0))
    }

    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self.core.patch.checked_add(1).ok_or_else(|| self.overflow("patch"))?;
        Ok(VersionInfo::new(self.core.major, self.core.minor, patch))
    }

    /// Increment the prerelease counter, starting from `<token>.0` when absent
    ///
    /// Build metadata is dropped. An empty token falls back to `rc`.
    pub fn bump_prerelease(&self, token: &str) -> Result<Self> {
        let token = if token.is_empty() { DEFAULT_PRERELEASE_TOKEN } else { token };
        let next = next_qualifier(self.core.prerelease.as_ref(), token);
        let prerelease = VersionParser::parse_identifiers(&next).map_err(|_| {
            SemverError::malformed(render(self.core.major, self.core.minor, self.core.patch, Some(&next), None))
        })?;

        Ok(VersionInfo {
            core: VersionCore {
                prerelease: Some(prerelease),
                build: None,
                ..self.numbers()
            },
        })
    }

    /// Increment the build counter, starting from `<token>.0` when absent
    ///
    /// The prerelease is kept. An empty token falls back to `build`.
    pub fn bump_build(&self, token: &str) -> Result<Self> {
        let token = if token.is_empty() { DEFAULT_BUILD_TOKEN } else { token };
        let next = next_qualifier(self.core.build.as_ref(), token);
        let build = VersionParser::parse_identifiers(&next).map_err(|_| {
            let pre = self.core.prerelease.as_ref().map(|p| p.to_string());
            SemverError::malformed(render(
                self.core.major,
                self.core.minor,
                self.core.patch,
                pre.as_deref(),
                Some(&next),
            ))
        })?;

        Ok(VersionInfo {
            core: VersionCore {
                prerelease: self.core.prerelease.clone(),
                build: Some(build),
                ..self.numbers()
            },
        })
    }

    /// Dispatch a bump by kind; `token` only applies to prerelease/build
    pub fn bump(&self, kind: BumpKind, token: Option<&str>) -> Result<Self> {
        log::debug!("Bumping {} of {}", kind, self);
        let token = token.or_else(|| kind.default_token()).unwrap_or_default();
        match kind {
            BumpKind::Major => self.bump_major(),
            BumpKind::Minor => self.bump_minor(),
            BumpKind::Patch => self.bump_patch(),
            BumpKind::Prerelease => self.bump_prerelease(token),
            BumpKind::Build => self.bump_build(token),
        }
    }

    /// Drop prerelease and build metadata
    pub fn finalize(&self) -> Self {
        VersionInfo { core: self.numbers() }
    }

    /// Copy with some fields overridden
    ///
    /// Names are `major`, `minor`, `patch`, `prerelease`, `build`; an empty
    /// value clears `prerelease`/`build`. Any unknown name fails the whole
    /// call with [`SemverError::InvalidArgument`].
    pub fn replace<I, K, V>(&self, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (major, minor, patch, prerelease, build) = self.to_tuple();
        let mut parts = [
            major.to_string(),
            minor.to_string(),
            patch.to_string(),
            prerelease.unwrap_or_default(),
            build.unwrap_or_default(),
        ];

        let mut unknown = Vec::new();
        for (name, value) in fields {
            match FIELD_NAMES.iter().position(|f| *f == name.as_ref()) {
                Some(index) => parts[index] = value.as_ref().to_string(),
                None => unknown.push(name.as_ref().to_string()),
            }
        }
        if !unknown.is_empty() {
            return Err(SemverError::InvalidArgument(unknown.join(", ")));
        }

        let [major, minor, patch, prerelease, build] = parts;
        let mut candidate = format!("{}.{}.{}", major, minor, patch);
        if !prerelease.is_empty() {
            candidate.push('-');
            candidate.push_str(&prerelease);
        }
        if !build.is_empty() {
            candidate.push('+');
            candidate.push_str(&build);
        }

        // Each value must be valid for its own field
        let number = |text: &str| -> Result<u64> {
            VersionParser::parse_number(text).map_err(|_| SemverError::malformed(candidate.as_str()))
        };
        let qualifier = |text: &str| -> Result<Option<Identifiers>> {
            if text.is_empty() {
                return Ok(None);
            }
            VersionParser::parse_identifiers(text)
                .map(Some)
                .map_err(|_| SemverError::malformed(candidate.as_str()))
        };

        Ok(VersionInfo {
            core: VersionCore {
                major: number(&major)?,
                minor: number(&minor)?,
                patch: number(&patch)?,
                prerelease: qualifier(&prerelease)?,
                build: qualifier(&build)?,
            },
        })
    }

    fn numbers(&self) -> VersionCore {
        VersionCore {
            major: self.core.major,
            minor: self.core.minor,
            patch: self.core.patch,
            prerelease: None,
            build: None,
        }
    }

    fn overflow(&self, field: &str) -> SemverError {
        log::trace!("Bumping {} of {} overflows", field, self);
        SemverError::malformed(format!("{} with {} incremented", self, field))
    }
}

fn next_qualifier(current: Option<&Identifiers>, token: &str) -> String {
    let text = match current {
        Some(ids) => ids.to_string(),
        None => format!("{}.0", token),
    };
    increment_last_number(&text)
}

fn render(major: u64, minor: u64, patch: u64, prerelease: Option<&str>, build: Option<&str>) -> String {
    let mut out = format!("{}.{}.{}", major, minor, patch);
    if let Some(pre) = prerelease {
        out.push('-');
        out.push_str(pre);
    }
    if let Some(build) = build {
        out.push('+');
        out.push_str(build);
    }
    out
}

impl From<VersionCore> for VersionInfo {
    fn from(core: VersionCore) -> Self {
        VersionInfo { core }
    }
}

impl FromStr for VersionInfo {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        VersionInfo::parse(s)
    }
}

impl TryFrom<&str> for VersionInfo {
    type Error = SemverError;

    fn try_from(s: &str) -> Result<Self> {
        VersionInfo::parse(s)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.core, f)
    }
}

impl PartialEq for VersionInfo {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(&self.core, &other.core) == Ordering::Equal
    }
}

impl Eq for VersionInfo {}

impl PartialOrd for VersionInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(&self.core, &other.core)
    }
}

impl Hash for VersionInfo {
    // Build metadata is skipped to agree with Eq
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.major.hash(state);
        self.core.minor.hash(state);
        self.core.patch.hash(state);
        self.core.prerelease.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionInfo {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        VersionInfo::parse(&text).map_err(serde::de::Error::custom)
    }
}
