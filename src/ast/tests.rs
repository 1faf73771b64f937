//! Unit tests for expression nodes and their debug rendering.

use std::io::{self, Write};

use rstest::rstest;

use super::{dump::write_indent, expressions::Expr};
use crate::{
    errors::errors::ErrorKind,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

fn token(kind: TokenKind, text: &str) -> Token {
    Token::new(
        kind,
        text,
        Span {
            start: Position::null(),
            end: Position::null(),
        },
    )
}

fn int(text: &str) -> Expr {
    Expr::integer_literal(&token(TokenKind::Integer, text)).unwrap()
}

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case("-7", -7)]
#[case("9223372036854775807", i64::MAX)]
fn test_integer_literal_value(#[case] raw: &str, #[case] expected: i64) {
    match int(raw) {
        Expr::IntegerLiteral { raw: kept, value } => {
            assert_eq!(kept, raw);
            assert_eq!(value, expected);
        }
        other => panic!("Expected integer literal, got {:?}", other),
    }
}

#[rstest]
#[case("12x")]
#[case("")]
#[case("9223372036854775808")]
#[case("3.5")]
fn test_integer_literal_rejects_malformed(#[case] raw: &str) {
    let error = Expr::integer_literal(&token(TokenKind::Integer, raw)).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LiteralFormat);
}

#[test]
fn test_rational_literal_keeps_raw_text() {
    let expr = Expr::rational_literal(&token(TokenKind::Rational, "3.50")).unwrap();

    match expr {
        Expr::RationalLiteral { raw, value } => {
            assert_eq!(raw, "3.50");
            assert_eq!(value, 3.5);
        }
        other => panic!("Expected rational literal, got {:?}", other),
    }
}

#[rstest]
#[case("1.2.3")]
#[case("inf")]
#[case("infinity")]
#[case("NaN")]
#[case("1e5")]
#[case("1.5e3")]
#[case(".5")]
#[case("5.")]
#[case("")]
fn test_rational_literal_rejects_malformed(#[case] raw: &str) {
    let error = Expr::rational_literal(&token(TokenKind::Rational, raw)).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LiteralFormat);
    assert_eq!(error.get_error_name(), "LiteralFormatError");
}

#[rstest]
#[case("-0.25", -0.25)]
#[case("+1.0", 1.0)]
fn test_rational_literal_accepts_signed_decimals(#[case] raw: &str, #[case] expected: f64) {
    match Expr::rational_literal(&token(TokenKind::Rational, raw)).unwrap() {
        Expr::RationalLiteral { value, .. } => assert_eq!(value, expected),
        other => panic!("Expected rational literal, got {:?}", other),
    }
}

#[test]
fn test_string_literal_is_verbatim() {
    let expr = Expr::string_literal(&token(TokenKind::String, "he\\nllo"));

    assert_eq!(
        expr,
        Expr::StringLiteral {
            raw: "he\\nllo".to_string(),
            value: "he\\nllo".to_string(),
        }
    );
}

#[test]
fn test_write_indent() {
    let mut out = Vec::new();
    write_indent(&mut out, 3).unwrap();
    assert_eq!(out, b"\t\t\t");

    let mut out = Vec::new();
    write_indent(&mut out, 0).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_dump_leaf_nodes() {
    assert_eq!(int("7").dump_to_string(), "IntegerLiteral: 7\n");
    assert_eq!(
        Expr::string_literal(&token(TokenKind::String, "hello")).dump_to_string(),
        "StringLiteral: hello\n"
    );
    assert_eq!(
        Expr::variable("x").dump_to_string(),
        "VariableReference: x\n"
    );
}

#[test]
fn test_dump_nested_binary_operation() {
    let tree = Expr::binary(
        TokenKind::Plus,
        int("2"),
        Expr::binary(TokenKind::Star, int("3"), int("4")),
    );

    assert_eq!(
        tree.dump_to_string(),
        "BinaryOperation\n\
         \tIntegerLiteral: 2\n\
         \t+\n\
         \tBinaryOperation\n\
         \t\tIntegerLiteral: 3\n\
         \t\t*\n\
         \t\tIntegerLiteral: 4\n"
    );
}

#[test]
fn test_dump_respects_starting_indent() {
    let tree = Expr::binary(TokenKind::Slash, int("1"), int("2"));
    let mut out = Vec::new();
    tree.write_dump(&mut out, 1).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\tBinaryOperation\n\t\tIntegerLiteral: 1\n\t\t/\n\t\tIntegerLiteral: 2\n"
    );
}

#[test]
fn test_dump_unknown_operator() {
    let tree = Expr::binary(TokenKind::Percent, int("5"), int("2"));

    assert!(tree.dump_to_string().contains("\tunknown operator\n"));
}

#[test]
fn test_display_is_fully_parenthesized() {
    let tree = Expr::binary(
        TokenKind::Dash,
        Expr::binary(TokenKind::Dash, int("8"), int("3")),
        Expr::string_literal(&token(TokenKind::String, "s")),
    );

    assert_eq!(tree.to_string(), "((8 - 3) - 's')");
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_dump_reports_write_failure() {
    let tree = Expr::binary(TokenKind::Plus, int("1"), int("2"));
    let error = tree.write_dump(&mut BrokenSink, 0).unwrap_err();

    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
}
