//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::error::Error as _;
use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip, NumberFormatError};
use crate::Position;

fn literal_error(token: &str) -> Error {
    let source = token.parse::<i64>().unwrap_err();
    Error::new(
        ErrorImpl::LiteralFormatError {
            token: token.to_string(),
            source: NumberFormatError::from(source),
        },
        Position(3, Rc::new("test.geo".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.geo".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.geo".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.geo");
}

#[test]
fn test_syntax_error_kinds() {
    let unexpected = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Position::null(),
    );
    let missing = Error::new(
        ErrorImpl::MissingClosingParen {
            token: "EOF".to_string(),
        },
        Position::null(),
    );
    let empty = Error::new(ErrorImpl::EmptyTokenStream, Position::null());
    let deep = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, Position::null());

    assert_eq!(unexpected.kind(), ErrorKind::Syntax);
    assert_eq!(missing.kind(), ErrorKind::Syntax);
    assert_eq!(empty.kind(), ErrorKind::Syntax);
    assert_eq!(deep.kind(), ErrorKind::Syntax);
    assert_eq!(deep.get_error_name(), "NestingTooDeep");
    assert_eq!(missing.get_error_name(), "MissingClosingParen");
    assert_eq!(empty.get_error_name(), "EmptyTokenStream");
}

#[test]
fn test_literal_format_error_keeps_source() {
    let error = literal_error("12x");

    assert_eq!(error.kind(), ErrorKind::LiteralFormat);
    assert_eq!(error.get_error_name(), "LiteralFormatError");

    let inner = error.source().expect("error should expose its cause");
    assert_eq!(inner.to_string(), "malformed literal \"12x\"");
    let number = inner.source().expect("literal error should expose the parse failure");
    assert_eq!(number.to_string(), "invalid digit found in string");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Position(7, Rc::new("test.geo".to_string())),
    );

    assert_eq!(error.to_string(), "unexpected token: \")\" at test.geo:7");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    match literal_error("99999999999999999999").get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("99999999999999999999")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
