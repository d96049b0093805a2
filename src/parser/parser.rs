//! Parser cursor and program driver.
//!
//! The grammar is a strict LL(1) recursive descent: the `Parser` holds the
//! kind of exactly one lookahead token and pulls the next one from its
//! `TokenSource` whenever a token is consumed. The first mismatch aborts the
//! parse with a `SyntaxError`; nothing is recovered.

use tracing::{debug, trace};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        source::TokenSource,
        tokens::TokenKind,
    },
};

use super::stmt::parse_stmt_sequence;

/// Deepest allowed nesting of parenthesized expressions and `if` bodies.
/// Both recurse, so input nested past this is rejected as a syntax error
/// instead of exhausting the stack.
pub const MAX_NESTING: usize = 256;

/// Parsing state for a single parse: the token source and its lookahead.
pub struct Parser<'a, S: TokenSource> {
    /// Where tokens and their payloads come from
    source: &'a mut S,
    /// Kind of the current (not yet consumed) token
    current: TokenKind,
    /// Number of enclosing `nested` rules
    depth: usize,
}

impl<'a, S: TokenSource> Parser<'a, S> {
    /// Creates a parser over `source`. The lookahead is empty until
    /// `advance` is called once.
    pub fn new(source: &'a mut S) -> Self {
        Parser {
            source,
            current: TokenKind::EOF,
            depth: 0,
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current
    }

    /// The token source, for payload extraction of the current token.
    pub fn source(&self) -> &S {
        &*self.source
    }

    /// Reads the next token into the lookahead and returns its kind.
    pub fn advance(&mut self) -> Result<TokenKind, Error> {
        self.current = self.source.advance()?;
        Ok(self.current)
    }

    /// Consumes the current token whatever its kind.
    pub fn consume(&mut self) -> Result<(), Error> {
        trace!(kind = %self.current, "matched");
        self.advance()?;
        Ok(())
    }

    /// Consumes the current token if it is of `expected_kind`, otherwise
    /// fails with a `SyntaxError` at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.current != expected_kind {
            return Err(self.syntax_error(vec![expected_kind]));
        }

        self.consume()
    }

    /// Runs a recursive rule one nesting level deeper. Fails at the current
    /// token once `MAX_NESTING` levels are open.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING {
            return Err(self.syntax_error(vec![]));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }

    /// Builds a `SyntaxError` for the current token.
    pub fn syntax_error(&self, expected: Vec<TokenKind>) -> Error {
        let token = self.source.current();

        Error::new(
            ErrorImpl::SyntaxError {
                token: token.value.clone(),
                expected,
            },
            token.span.start.clone(),
            self.source.location(),
        )
    }
}

/// Parses a whole program from `source`.
///
/// Primes the lookahead, parses one top-level statement sequence and
/// requires end-of-input after it. Only `print` statements are retained in
/// the returned program; every other construct is validated and dropped.
pub fn parse_program<S: TokenSource>(source: &mut S) -> Result<Program, Error> {
    let mut parser = Parser::new(source);
    parser.advance()?;

    let head = parse_stmt_sequence(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    let program = Program { head };
    debug!(statements = program.len(), "parsed program");

    Ok(program)
}

/// Scans and parses `source` text in one go.
pub fn parse(source: &str, file: Option<String>) -> Result<Program, Error> {
    let mut scanner = Scanner::new(source.to_string(), file);
    parse_program(&mut scanner)
}
