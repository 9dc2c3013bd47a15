//! Version precedence

use std::cmp::Ordering;

use crate::comparable::Comparable;
use crate::error::Result;
use crate::identifier::{Identifier, Identifiers};
use crate::operator::Operator;
use crate::version::VersionCore;

/// Comparator implementing Semantic Versioning precedence
pub struct Comparator;

impl Comparator {
    /// Order two versions. Build metadata never takes part.
    pub fn compare(a: &VersionCore, b: &VersionCore) -> Ordering {
        a.major
            .cmp(&b.major)
            .then_with(|| a.minor.cmp(&b.minor))
            .then_with(|| a.patch.cmp(&b.patch))
            .then_with(|| Self::compare_prerelease(a.prerelease.as_ref(), b.prerelease.as_ref()))
    }

    /// A release sorts after any prerelease of the same core version
    pub fn compare_prerelease(a: Option<&Identifiers>, b: Option<&Identifiers>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                for (left, right) in a.iter().zip(b.iter()) {
                    let ord = Self::compare_identifier(left, right);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                // Shared prefix: fewer identifiers sorts first
                a.len().cmp(&b.len())
            }
        }
    }

    /// Numeric identifiers compare by value and sort before alphanumeric ones
    pub fn compare_identifier(a: &Identifier, b: &Identifier) -> Ordering {
        match (a, b) {
            // No leading zeros, so a longer digit run is a larger number
            (Identifier::Numeric(x), Identifier::Numeric(y)) => {
                x.len().cmp(&y.len()).then_with(|| x.cmp(y))
            }
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(x), Identifier::Alphanumeric(y)) => {
                x.as_bytes().cmp(y.as_bytes())
            }
        }
    }

    /// Check if version1 > version2
    pub fn greater_than<'a, 'b>(version1: impl Into<Comparable<'a>>, version2: impl Into<Comparable<'b>>) -> Result<bool> {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to<'a, 'b>(version1: impl Into<Comparable<'a>>, version2: impl Into<Comparable<'b>>) -> Result<bool> {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than<'a, 'b>(version1: impl Into<Comparable<'a>>, version2: impl Into<Comparable<'b>>) -> Result<bool> {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to<'a, 'b>(version1: impl Into<Comparable<'a>>, version2: impl Into<Comparable<'b>>) -> Result<bool> {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to<'a, 'b>(version1: impl Into<Comparable<'a>>, version2: impl Into<Comparable<'b>>) -> Result<bool> {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to<'a, 'b>(version1: impl Into<Comparable<'a>>, version2: impl Into<Comparable<'b>>) -> Result<bool> {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare_with<'a, 'b>(
        version1: impl Into<Comparable<'a>>,
        operator: Operator,
        version2: impl Into<Comparable<'b>>,
    ) -> Result<bool> {
        let left = version1.into().coerce()?;
        let right = version2.into().coerce()?;
        Ok(operator.holds(Self::compare(left.core(), right.core())))
    }
}
