//! The seam between the grammar and whatever produces its tokens.

use crate::{errors::errors::Error, Location};

use super::tokens::{Token, TokenKind};

/// A lazy producer of classified tokens.
///
/// The parser holds exactly one token of lookahead: it calls `advance` to
/// read the next token and queries payloads only for the token it has just
/// read. Payload accessors are only meaningful when the most recently read
/// token is of the matching kind.
pub trait TokenSource {
    /// Reads the next token and returns its kind.
    ///
    /// Once end-of-input has been reached every further call returns
    /// `TokenKind::EOF` again.
    fn advance(&mut self) -> Result<TokenKind, Error>;

    /// The most recently read token.
    fn current(&self) -> &Token;

    fn int_value(&self) -> i64;

    fn string_value(&self) -> String;

    fn identifier_ordinal(&self) -> u32;

    /// Line and identifier marker used when reporting diagnostics.
    fn location(&self) -> Location;
}
