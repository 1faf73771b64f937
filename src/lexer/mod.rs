//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for the expression parser. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of identifiers, numeric and string literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
