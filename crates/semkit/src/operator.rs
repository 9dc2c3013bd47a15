//! Comparison operators accepted by `matches`

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SemverError;

/// One of the six relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["<", ">", "<=", ">=", "==", "!="]
    }

    /// Whether a three-way comparison result satisfies this operator
    pub fn holds(&self, ord: Ordering) -> bool {
        match self {
            Operator::Equal => ord == Ordering::Equal,
            Operator::NotEqual => ord != Ordering::Equal,
            Operator::LessThan => ord == Ordering::Less,
            Operator::LessThanOrEqual => ord != Ordering::Greater,
            Operator::GreaterThan => ord == Ordering::Greater,
            Operator::GreaterThanOrEqual => ord != Ordering::Less,
        }
    }

    /// Split a `<op><version>` expression into its operator and version text
    ///
    /// Two-character operators are tried before the one-character `<` and `>`.
    pub fn split_expression(expr: &str) -> Result<(Operator, &str), SemverError> {
        for (token, op) in [
            (">=", Operator::GreaterThanOrEqual),
            ("<=", Operator::LessThanOrEqual),
            ("==", Operator::Equal),
            ("!=", Operator::NotEqual),
            (">", Operator::GreaterThan),
            ("<", Operator::LessThan),
        ] {
            if let Some(rest) = expr.strip_prefix(token) {
                return Ok((op, rest));
            }
        }
        Err(SemverError::MalformedExpression(expr.to_string()))
    }
}

impl FromStr for Operator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(SemverError::MalformedExpression(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips() {
        for token in Operator::supported_operators() {
            let op: Operator = token.parse().unwrap();
            assert_eq!(op.as_str(), *token);
        }
    }

    #[test]
    fn test_rejects_aliases_and_garbage() {
        for token in ["=", "<>", "=~", "~", "^", "", " >=", "=>"] {
            assert_eq!(
                token.parse::<Operator>(),
                Err(SemverError::MalformedExpression(token.to_string()))
            );
        }
    }

    #[test]
    fn test_holds() {
        assert!(Operator::GreaterThanOrEqual.holds(Ordering::Equal));
        assert!(Operator::GreaterThanOrEqual.holds(Ordering::Greater));
        assert!(!Operator::GreaterThanOrEqual.holds(Ordering::Less));
        assert!(Operator::NotEqual.holds(Ordering::Less));
        assert!(!Operator::NotEqual.holds(Ordering::Equal));
        assert!(Operator::LessThanOrEqual.holds(Ordering::Less));
    }

    #[test]
    fn test_split_expression() {
        assert_eq!(
            Operator::split_expression(">=1.0.0").unwrap(),
            (Operator::GreaterThanOrEqual, "1.0.0")
        );
        assert_eq!(
            Operator::split_expression(">1.0.0").unwrap(),
            (Operator::GreaterThan, "1.0.0")
        );
        assert_eq!(
            Operator::split_expression("<=2.0.0").unwrap(),
            (Operator::LessThanOrEqual, "2.0.0")
        );
        assert!(matches!(
            Operator::split_expression("=1.0.0"),
            Err(SemverError::MalformedExpression(_))
        ));
        assert!(matches!(
            Operator::split_expression("1.0.0"),
            Err(SemverError::MalformedExpression(_))
        ));
    }
}
