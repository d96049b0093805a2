//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::{Location, Position};
use std::rc::Rc;

fn location(line: u32, identifier_ordinal: u32) -> Location {
    Location {
        line,
        identifier_ordinal,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.script".to_string())),
        location(1, 0),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_position_and_location() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: "x".to_string(),
            expected: vec![TokenKind::Semicolon],
        },
        Position(42, Rc::new("test.script".to_string())),
        location(3, 7),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_location().line, 3);
    assert_eq!(error.get_location().identifier_ordinal, 7);
    assert!(error.is_syntax_error());
}

#[test]
fn test_syntax_error_tip_names_expected_token() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: "EOF".to_string(),
            expected: vec![TokenKind::Semicolon],
        },
        Position::null(),
        location(1, 0),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_tip().to_string(), "expected `Semicolon`, found `EOF`");
}

#[test]
fn test_syntax_error_tip_lists_alternatives() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: ";".to_string(),
            expected: vec![TokenKind::Number, TokenKind::Identifier, TokenKind::OpenParen],
        },
        Position::null(),
        location(1, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(
            tip,
            "expected one of `Number`, `Identifier`, `OpenParen`, found `;`"
        ),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
        location(1, 0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::null(),
        location(2, 0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: ")".to_string(),
            expected: vec![TokenKind::Identifier],
        },
        Position::null(),
        location(5, 1),
    );

    assert_eq!(error.to_string(), "syntax error: unexpected token \")\" at line 5");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_syntax_error_tip_for_nesting() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: "(".to_string(),
            expected: vec![],
        },
        Position::null(),
        location(1, 0),
    );

    assert_eq!(error.get_tip().to_string(), "`(` is nested too deeply");
}
