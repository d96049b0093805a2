use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("print", TokenKind::Print);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("fun", TokenKind::Fun);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,

    Assignment, // =

    // Relational, kept contiguous
    Equals,        // ==
    NotEquals,     // !=
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Print,
    For,
    If,
    Else,
    Fun,
    Var,
    Return,
}

impl TokenKind {
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    /// Tokens that begin a statement of a statement sequence.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Print
                | TokenKind::If
                | TokenKind::For
                | TokenKind::Var
                | TokenKind::Identifier
                | TokenKind::Fun
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String | TokenKind::Identifier | TokenKind::Number => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
