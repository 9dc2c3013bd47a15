//! Semver facade providing string-level version operations

use std::cmp::Ordering;

use crate::bump::BumpKind;
use crate::comparator::Comparator;
use crate::error::Result;
use crate::operator::Operator;
use crate::version::VersionInfo;
use crate::version_parser::VersionParser;

/// Main facade for semantic versioning operations on strings
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<VersionInfo> {
        VersionInfo::parse(version)
    }

    /// Check if a string is a valid semantic version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::is_valid(version)
    }

    /// Compare two version strings
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering> {
        let left = VersionParser::parse(version1)?;
        let right = VersionParser::parse(version2)?;
        Ok(Comparator::compare(&left, &right))
    }

    /// Evaluate `version <operator> other`
    pub fn matches(version: &str, operator: &str, other: &str) -> Result<bool> {
        let operator: Operator = operator.parse()?;
        Ok(operator.holds(Self::compare(version, other)?))
    }

    /// Evaluate a single `<op><version>` expression such as `>=1.0.0`
    pub fn match_expr(version: &str, expr: &str) -> Result<bool> {
        let (operator, other) = Operator::split_expression(expr)?;
        Ok(operator.holds(Self::compare(version, other)?))
    }

    /// Return the greater of two versions; the first wins a tie
    pub fn max<'a>(version1: &'a str, version2: &'a str) -> Result<&'a str> {
        match Self::compare(version1, version2)? {
            Ordering::Less => Ok(version2),
            _ => Ok(version1),
        }
    }

    /// Return the smaller of two versions; the first wins a tie
    pub fn min<'a>(version1: &'a str, version2: &'a str) -> Result<&'a str> {
        match Self::compare(version1, version2)? {
            Ordering::Greater => Ok(version2),
            _ => Ok(version1),
        }
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Invalid entries are skipped
        let mut parsed: Vec<(VersionInfo, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((VersionInfo::parse(v).ok()?, i)))
            .collect();

        // Stable, so equal precedence keeps input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    /// Drop prerelease and build metadata
    pub fn finalize(version: &str) -> Result<String> {
        Ok(VersionInfo::parse(version)?.finalize().to_string())
    }

    /// Bump one component of a version string
    pub fn bump(version: &str, kind: BumpKind, token: Option<&str>) -> Result<String> {
        Ok(VersionInfo::parse(version)?.bump(kind, token)?.to_string())
    }

    /// Replace named fields of a version string
    pub fn replace(version: &str, fields: &[(&str, &str)]) -> Result<String> {
        Ok(VersionInfo::parse(version)?
            .replace(fields.iter().copied())?
            .to_string())
    }
}
