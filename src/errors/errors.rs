use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Location, Position};

/// A positioned front-end failure.
///
/// Carries the raw text of the offending token as context, its byte
/// position and the `Location` reported by the token source when the
/// failure was detected.
#[derive(Error, Debug, Clone)]
#[error("{internal_error} at line {}", .location.line)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            position,
            location,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_location(&self) -> Location {
        self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True for grammar mismatches, false for failures of the token source.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::SyntaxError { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { token, expected } => match expected.as_slice() {
                [] => ErrorTip::Suggestion(format!("`{}` is nested too deeply", token)),
                [kind] => ErrorTip::Suggestion(format!("expected `{}`, found `{}`", kind, token)),
                kinds => ErrorTip::Suggestion(format!(
                    "expected one of {}, found `{}`",
                    kinds
                        .iter()
                        .map(|kind| format!("`{}`", kind))
                        .collect::<Vec<_>>()
                        .join(", "),
                    token
                )),
            },
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("syntax error: unexpected token {token:?}")]
    SyntaxError {
        token: String,
        expected: Vec<TokenKind>,
    },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
