//! Bump kinds and the numeric-suffix increment used by prerelease/build bumping

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SemverError;

/// Default token used when a prerelease is bumped from nothing
pub const DEFAULT_PRERELEASE_TOKEN: &str = "rc";

/// Default token used when build metadata is bumped from nothing
pub const DEFAULT_BUILD_TOKEN: &str = "build";

lazy_static! {
    // Last run of ASCII digits, followed only by non-digits
    static ref LAST_NUMBER_RE: Regex = Regex::new(r"([0-9]+)[^0-9]*$").unwrap();
}

/// The version component a bump targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

impl BumpKind {
    pub fn all() -> &'static [BumpKind] {
        &[
            BumpKind::Major,
            BumpKind::Minor,
            BumpKind::Patch,
            BumpKind::Prerelease,
            BumpKind::Build,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Prerelease => "prerelease",
            BumpKind::Build => "build",
        }
    }

    /// Token used to seed an absent prerelease/build section
    pub fn default_token(&self) -> Option<&'static str> {
        match self {
            BumpKind::Prerelease => Some(DEFAULT_PRERELEASE_TOKEN),
            BumpKind::Build => Some(DEFAULT_BUILD_TOKEN),
            _ => None,
        }
    }
}

impl FromStr for BumpKind {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            "prerelease" => Ok(BumpKind::Prerelease),
            "build" => Ok(BumpKind::Build),
            _ => Err(SemverError::InvalidArgument(s.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Increment the last run of decimal digits in `text`
///
/// Surrounding text is kept; the new number is written without leading
/// zeros. Text without any digit is returned unchanged.
pub fn increment_last_number(text: &str) -> String {
    let Some(digits) = LAST_NUMBER_RE.captures(text).and_then(|caps| caps.get(1)) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(&text[..digits.start()]);
    out.push_str(&increment_digits(digits.as_str()));
    out.push_str(&text[digits.end()..]);
    out
}

/// Add one to a decimal digit string of any length
fn increment_digits(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.trim_start_matches('0').bytes().collect();
    let mut i = bytes.len();
    loop {
        if i == 0 {
            bytes.insert(0, b'1');
            break;
        }
        i -= 1;
        if bytes[i] == b'9' {
            bytes[i] = b'0';
        } else {
            bytes[i] += 1;
            break;
        }
    }
    bytes.into_iter().map(char::from).collect()
}
