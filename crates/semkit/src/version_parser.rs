//! Version string parsing and validation module

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SemverError};
use crate::identifier::Identifiers;
use crate::version::VersionCore;

lazy_static! {
    /// Core number: "0" or a digit run without leading zero
    static ref NUMBER_REGEX: &'static str = r"0|[1-9][0-9]*";

    /// Numeric identifier without leading zero, or an alphanumeric/hyphen identifier
    /// (ASCII classes only, `\d` would also match non-ASCII digits)
    static ref IDENTIFIER_REGEX: &'static str = r"(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)";

    static ref IDENTIFIERS_REGEX: String = format!(
        r"{id}(?:\.{id})*",
        id = *IDENTIFIER_REGEX
    );

    // Full version, anchored on both ends
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^(?P<major>{num})\.(?P<minor>{num})\.(?P<patch>{num})(?:-(?P<prerelease>{ids}))?(?:\+(?P<build>{ids}))?$",
        num = *NUMBER_REGEX,
        ids = *IDENTIFIERS_REGEX
    )).unwrap();

    // Standalone core number
    static ref NUMBER_RE: Regex = Regex::new(&format!(
        r"^(?:{})$",
        *NUMBER_REGEX
    )).unwrap();

    // Standalone identifier list
    static ref IDENTIFIERS_RE: Regex = Regex::new(&format!(
        r"^{}$",
        *IDENTIFIERS_REGEX
    )).unwrap();
}

/// Parser for Semantic Versioning 2.0.0 strings
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionParser;

impl VersionParser {
    /// Parse a version string into its validated components
    ///
    /// The whole input must match; a prefix match is a failure.
    pub fn parse(version: &str) -> Result<VersionCore> {
        let caps = match VERSION_RE.captures(version) {
            Some(caps) => caps,
            None => {
                log::trace!("Rejected version string: {:?}", version);
                return Err(SemverError::malformed(version));
            }
        };

        let number = |name: &str| -> Result<u64> {
            caps[name].parse::<u64>().map_err(|_| {
                log::trace!("Core number out of range in {:?}", version);
                SemverError::malformed(version)
            })
        };

        Ok(VersionCore {
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            prerelease: caps
                .name("prerelease")
                .map(|m| Identifiers::from_validated(m.as_str())),
            build: caps
                .name("build")
                .map(|m| Identifiers::from_validated(m.as_str())),
        })
    }

    /// Parse a standalone major, minor or patch number
    pub fn parse_number(text: &str) -> Result<u64> {
        if !NUMBER_RE.is_match(text) {
            log::trace!("Rejected core number: {:?}", text);
            return Err(SemverError::malformed(text));
        }
        text.parse::<u64>().map_err(|_| SemverError::malformed(text))
    }

    /// Parse a dotted identifier list (the text after `-` or `+`)
    pub fn parse_identifiers(text: &str) -> Result<Identifiers> {
        if !IDENTIFIERS_RE.is_match(text) {
            log::trace!("Rejected identifier list: {:?}", text);
            return Err(SemverError::malformed(text));
        }
        Ok(Identifiers::from_validated(text))
    }

    /// Check whether a string is a valid version
    pub fn is_valid(version: &str) -> bool {
        Self::parse(version).is_ok()
    }
}
