//! Error type shared by every semkit operation

use thiserror::Error;

/// Failures raised while parsing, comparing, or deriving versions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    /// Input does not match the Semantic Versioning grammar
    #[error("{0} is not valid SemVer string")]
    MalformedVersion(String),

    /// An operand could not be normalized to a version
    #[error("cannot compare a version with {0}")]
    TypeMismatch(String),

    /// `replace` received a field name it does not know
    #[error("replace() got unexpected field(s): {0}")]
    InvalidArgument(String),

    /// `matches` received an operator outside the six supported ones
    #[error("match expression should be in format <op><ver>, where <op> is one of ['<', '>', '==', '<=', '>=', '!=']. You provided: {0:?}")]
    MalformedExpression(String),
}

impl SemverError {
    pub(crate) fn malformed(input: impl Into<String>) -> Self {
        SemverError::MalformedVersion(input.into())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SemverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_input() {
        assert_eq!(
            SemverError::malformed("1.2").to_string(),
            "1.2 is not valid SemVer string"
        );
        assert!(SemverError::MalformedExpression("=~1.0.0".into())
            .to_string()
            .ends_with("You provided: \"=~1.0.0\""));
    }
}
