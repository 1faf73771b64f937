//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens into a
//! single expression tree. It uses recursive descent for primaries and
//! parenthesized grouping, and precedence climbing for binary operators:
//!
//! - `lookups` maps operator tokens to binding powers
//! - `expr` holds the primary and binary expression rules
//! - `parser` holds the token cursor and the public entry points

pub mod expr;
pub mod lookups;
pub mod parser;
