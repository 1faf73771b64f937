//! Parser implementation for building expression trees.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser owns the token stream for the duration of a parse, tracks a
//! cursor into it, and keeps the last successfully parsed tree so it can be
//! dumped afterwards.

use std::{
    io::{self, Write},
    rc::Rc,
};

use log::debug;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::expr::parse_expr;

/// Deepest parenthesized nesting accepted before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, ending with an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Number of currently open parenthesized groups
    depth: usize,
    /// Root of the last successful parse
    root: Option<Expr>,
}

impl Parser {
    /// Creates a new Parser with no tokens and no tree.
    ///
    /// # Arguments
    ///
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(file: Rc<String>) -> Self {
        Parser {
            tokens: vec![],
            pos: 0,
            file,
            depth: 0,
            root: None,
        }
    }

    /// Returns the current token without advancing.
    ///
    /// The cursor never moves past the last token, so once the end-of-input
    /// token is reached it is returned for every further read.
    pub(crate) fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub(crate) fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub(crate) fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if self.tokens[current].kind != TokenKind::EOF && current + 1 < self.tokens.len() {
            self.pos = current + 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub(crate) fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            }))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub(crate) fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Records entry into a parenthesized group opened at `position`.
    pub(crate) fn enter_group(&mut self, position: Position) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses `tokens` as one expression and stores the resulting tree.
    ///
    /// Any tree from an earlier call is discarded first, and nothing is stored
    /// when parsing fails. The whole token sequence must be consumed: a token
    /// other than EOF after the expression is an error.
    pub fn parse(&mut self, tokens: Vec<Token>) -> Result<&Expr, Error> {
        self.root = None;
        self.tokens = tokens;
        self.pos = 0;
        self.depth = 0;

        if self.tokens.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyTokenStream,
                Position(0, Rc::clone(&self.file)),
            ));
        }

        debug!("parsing {} tokens from {}", self.tokens.len(), self.file);

        let expr = parse_expr(self)?;
        self.expect(TokenKind::EOF)?;

        debug!("parsed {}", expr);
        let root: &Expr = self.root.insert(expr);
        Ok(root)
    }

    /// Returns the tree of the last successful parse.
    pub fn root(&self) -> Option<&Expr> {
        self.root.as_ref()
    }

    /// Consumes the parser, handing over the tree of the last successful parse.
    pub fn into_root(self) -> Option<Expr> {
        self.root
    }

    /// Prints the parsed tree to stdout.
    ///
    /// # Panics
    ///
    /// Panics if called before a successful [`Parser::parse`].
    pub fn dump(&self) -> io::Result<()> {
        self.parsed_root().dump(0)
    }

    /// Writes the parsed tree to `out`.
    ///
    /// # Panics
    ///
    /// Panics if called before a successful [`Parser::parse`].
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.parsed_root().write_dump(out, 0)
    }

    fn parsed_root(&self) -> &Expr {
        match &self.root {
            Some(root) => root,
            None => panic!("dump requested before a successful parse"),
        }
    }

    /// Returns the current position in the source file.
    pub(crate) fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into an expression tree.
///
/// This is the main entry point for parsing. It creates a parser instance and
/// parses one expression spanning the whole token stream.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the tree on success)
/// - Result containing either the root expression or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Expr, Error>) {
    let mut parser = Parser::new(file);
    let result = parser.parse(tokens).cloned();

    (parser, result)
}
