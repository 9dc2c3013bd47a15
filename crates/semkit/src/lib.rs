//! Semantic Versioning 2.0.0 library
//!
//! This crate provides strict version parsing, precedence comparison, and
//! immutable derived versions (bump, replace, finalize).

mod bump;
mod comparable;
mod comparator;
mod error;
mod identifier;
mod operator;
mod semver;
mod version;
mod version_parser;

pub use bump::{increment_last_number, BumpKind, DEFAULT_BUILD_TOKEN, DEFAULT_PRERELEASE_TOKEN};
pub use comparable::Comparable;
pub use comparator::Comparator;
pub use error::{Result, SemverError};
pub use identifier::{Identifier, Identifiers};
pub use operator::Operator;
pub use semver::Semver;
pub use version::{VersionCore, VersionInfo, FIELD_NAMES};
pub use version_parser::VersionParser;

/// The semver.org specification version implemented here
pub const SEMVER_SPEC_VERSION: &str = "2.0.0";
