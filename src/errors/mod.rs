//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while lexing and parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical, syntax and literal failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
