use std::{
    fmt::Display,
    num::{ParseFloatError, ParseIntError},
};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::MissingClosingParen { .. }
            | ErrorImpl::EmptyTokenStream
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
            ErrorImpl::LiteralFormatError { .. } => ErrorKind::LiteralFormat,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingClosingParen { .. } => "MissingClosingParen",
            ErrorImpl::EmptyTokenStream => "EmptyTokenStream",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::LiteralFormatError { .. } => "LiteralFormatError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a literal or `(`",
                token
            )),
            ErrorImpl::MissingClosingParen { token } => ErrorTip::Suggestion(format!(
                "Found `{}` where `)` was expected, is a closing parenthesis missing?",
                token
            )),
            ErrorImpl::EmptyTokenStream => ErrorTip::Suggestion(String::from(
                "The token stream must end with an end-of-input token",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses are nested deeper than {} levels",
                limit
            )),
            ErrorImpl::LiteralFormatError { token, source } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}` ({}), is it above the integer limit?",
                token, source
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    LiteralFormat,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("missing closing parenthesis, found {token:?}")]
    MissingClosingParen { token: String },
    #[error("empty token stream")]
    EmptyTokenStream,
    #[error("parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
    #[error("malformed literal {token:?}")]
    LiteralFormatError {
        token: String,
        #[source]
        source: NumberFormatError,
    },
}

/// Underlying numeric conversion failure of a literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberFormatError {
    #[error(transparent)]
    Integer(#[from] ParseIntError),
    #[error(transparent)]
    Rational(#[from] ParseFloatError),
    #[error("not a decimal number")]
    NotDecimal,
}
