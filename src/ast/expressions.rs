use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl, NumberFormatError},
    lexer::tokens::{Token, TokenKind},
};

lazy_static! {
    // `f64::from_str` also takes `inf`, `NaN` and exponents; rationals are plain decimals.
    static ref DECIMAL: Regex = Regex::new("^[+-]?[0-9]+\\.[0-9]+$").unwrap();
}

/// Expression node.
///
/// Children of a `BinaryOperation` are owned by their parent and never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral {
        raw: String,
        value: i64,
    },
    RationalLiteral {
        raw: String,
        value: f64,
    },
    StringLiteral {
        raw: String,
        value: String,
    },
    /// Not produced by the parser yet; there is no identifier rule in the grammar.
    VariableReference {
        name: String,
    },
    BinaryOperation {
        operator: TokenKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Builds an integer literal from its source text.
    pub fn integer_literal(token: &Token) -> Result<Expr, Error> {
        let value = token
            .value
            .parse::<i64>()
            .map_err(|err| literal_error(token, err.into()))?;

        Ok(Expr::IntegerLiteral {
            raw: token.value.clone(),
            value,
        })
    }

    /// Builds a rational literal from its source text.
    pub fn rational_literal(token: &Token) -> Result<Expr, Error> {
        if !DECIMAL.is_match(&token.value) {
            return Err(literal_error(token, NumberFormatError::NotDecimal));
        }

        let value = token
            .value
            .parse::<f64>()
            .map_err(|err| literal_error(token, err.into()))?;

        Ok(Expr::RationalLiteral {
            raw: token.value.clone(),
            value,
        })
    }

    pub fn string_literal(token: &Token) -> Expr {
        Expr::StringLiteral {
            raw: token.value.clone(),
            value: token.value.clone(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::VariableReference { name: name.into() }
    }

    pub fn binary(operator: TokenKind, left: Expr, right: Expr) -> Expr {
        Expr::BinaryOperation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

fn literal_error(token: &Token, source: NumberFormatError) -> Error {
    Error::new(
        ErrorImpl::LiteralFormatError {
            token: token.value.clone(),
            source,
        },
        token.span.start.clone(),
    )
}

/// Fully parenthesized infix form, e.g. `((8 - 3) - 2)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::IntegerLiteral { raw, .. } | Expr::RationalLiteral { raw, .. } => {
                write!(f, "{}", raw)
            }
            Expr::StringLiteral { value, .. } => write!(f, "'{}'", value),
            Expr::VariableReference { name } => write!(f, "{}", name),
            Expr::BinaryOperation {
                operator,
                left,
                right,
            } => write!(
                f,
                "({} {} {})",
                left,
                operator.operator_symbol().unwrap_or("?"),
                right
            ),
        }
    }
}
