//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, the identifier table, literals,
//! operators and punctuation, comments, line tracking and error cases.

use super::{
    lexer::{tokenize, Scanner},
    source::TokenSource,
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.script".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("print for if else fun var return"),
        vec![
            TokenKind::Print,
            TokenKind::For,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Fun,
            TokenKind::Var,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore printer".to_string();
    let tokens = tokenize(source, Some("test.script".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // Keywords only match whole words
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "printer");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_ordinals_follow_first_appearance() {
    let mut scanner = Scanner::new("a b a c b".to_string(), None);
    let mut ordinals = vec![];

    while scanner.advance().unwrap() == TokenKind::Identifier {
        ordinals.push(scanner.identifier_ordinal());
    }

    assert_eq!(ordinals, vec![0, 1, 0, 2, 1]);
    assert_eq!(scanner.identifier_names(), vec!["a", "b", "c"]);
}

#[test]
fn test_number_payload() {
    let mut scanner = Scanner::new("42 0 9000".to_string(), None);

    assert_eq!(scanner.advance().unwrap(), TokenKind::Number);
    assert_eq!(scanner.int_value(), 42);
    assert_eq!(scanner.advance().unwrap(), TokenKind::Number);
    assert_eq!(scanner.int_value(), 0);
    assert_eq!(scanner.advance().unwrap(), TokenKind::Number);
    assert_eq!(scanner.int_value(), 9000);
}

#[test]
fn test_number_out_of_range() {
    let result = tokenize("99999999999999999999".to_string(), None);
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_string_payload_strips_quotes() {
    let mut scanner = Scanner::new(r#""hello world" """#.to_string(), None);

    assert_eq!(scanner.advance().unwrap(), TokenKind::String);
    assert_eq!(scanner.string_value(), "hello world");
    assert_eq!(scanner.current().value, "\"hello world\"");
    assert_eq!(scanner.advance().unwrap(), TokenKind::String);
    assert_eq!(scanner.string_value(), "");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = == != < <= > >= ++ --"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(
        kinds("i<=10;i++"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_relational_kinds() {
    assert!(TokenKind::Equals.is_relational());
    assert!(TokenKind::GreaterEquals.is_relational());
    assert!(!TokenKind::Assignment.is_relational());
    assert!(!TokenKind::Plus.is_relational());
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("var x = 5; // trailing comment\nprint(x);"),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Print,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_line_tracking() {
    let mut scanner = Scanner::new("a\n\nb // c\n\"x\ny\" d".to_string(), None);

    scanner.advance().unwrap();
    assert_eq!(scanner.location().line, 1);
    scanner.advance().unwrap();
    assert_eq!(scanner.location().line, 3);
    // A multi-line string reports the line it starts on
    scanner.advance().unwrap();
    assert_eq!(scanner.location().line, 4);
    scanner.advance().unwrap();
    assert_eq!(scanner.location().line, 5);
    assert_eq!(scanner.location().identifier_ordinal, 2);
}

#[test]
fn test_eof_is_sticky() {
    let mut scanner = Scanner::new("x".to_string(), None);

    assert_eq!(scanner.advance().unwrap(), TokenKind::Identifier);
    assert_eq!(scanner.advance().unwrap(), TokenKind::EOF);
    assert_eq!(scanner.advance().unwrap(), TokenKind::EOF);
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("var  total".to_string(), Some("test.script".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(*tokens[1].span.start.1, "test.script");
    assert_eq!(tokens[2].span.start.0, 10);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("var x = @".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_tokenize_lone_bang_is_unrecognised() {
    assert!(tokenize("!x".to_string(), None).is_err());
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_eof_location_after_trailing_newlines() {
    let mut scanner = Scanner::new("x\n\n".to_string(), None);

    scanner.advance().unwrap();
    assert_eq!(scanner.location().line, 1);
    assert_eq!(scanner.advance().unwrap(), TokenKind::EOF);
    assert_eq!(scanner.location().line, 3);
}
