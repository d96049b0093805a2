use std::{collections::HashMap, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Classifies a match. `Ok(None)` means the match is skipped.
pub type PatternHandler = fn(&mut Scanner, &str) -> Result<Option<TokenKind>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

// Tried in order; the first pattern matching at the cursor wins, so
// multi-character operators come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus) },
        RegexPattern { regex: Regex::new("^--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
    ];
}

/// A lazy `TokenSource` over a source string.
///
/// Tokens are classified one at a time as the parser asks for them. The
/// scanner owns the identifier table: every distinct identifier name is
/// given an ordinal in order of first appearance.
pub struct Scanner {
    source: String,
    pos: usize,
    /// Start of the token being classified
    start: usize,
    line: u32,
    /// Line on which the current token starts
    token_line: u32,
    file: Rc<String>,
    identifiers: HashMap<String, u32>,
    current: Token,
    int_value: i64,
    string_value: String,
    identifier_ordinal: u32,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        Scanner {
            current: MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: Position(0, Rc::clone(&file)),
                    end: Position(0, Rc::clone(&file)),
                }
            ),
            source,
            pos: 0,
            start: 0,
            line: 1,
            token_line: 1,
            file,
            identifiers: HashMap::new(),
            int_value: 0,
            string_value: String::new(),
            identifier_ordinal: 0,
        }
    }

    /// Names in the identifier table, indexed by ordinal.
    pub fn identifier_names(&self) -> Vec<String> {
        let mut names = vec![String::new(); self.identifiers.len()];
        for (name, ordinal) in &self.identifiers {
            names[*ordinal as usize] = name.clone();
        }
        names
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    fn count_lines(&mut self, matched: &str) {
        self.line += matched.matches('\n').count() as u32;
    }
}

impl TokenSource for Scanner {
    fn advance(&mut self) -> Result<TokenKind, Error> {
        loop {
            self.token_line = self.line;

            if self.at_eof() {
                self.current = MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: self.position_at(self.pos),
                        end: self.position_at(self.pos),
                    }
                );
                return Ok(TokenKind::EOF);
            }

            let remainder = &self.source[self.pos..];
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|m| (pattern.handler, m.as_str().to_string()))
            });

            let Some((handler, matched)) = found else {
                let token = remainder.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    self.position_at(self.pos),
                    self.location(),
                ));
            };

            self.start = self.pos;
            self.pos += matched.len();

            if let Some(kind) = handler(self, &matched)? {
                trace!(%kind, value = %matched, line = self.line, "scanned token");
                self.current = MK_TOKEN!(
                    kind,
                    matched,
                    Span {
                        start: self.position_at(self.start),
                        end: self.position_at(self.pos),
                    }
                );
                return Ok(kind);
            }
        }
    }

    fn current(&self) -> &Token {
        &self.current
    }

    fn int_value(&self) -> i64 {
        self.int_value
    }

    fn string_value(&self) -> String {
        self.string_value.clone()
    }

    fn identifier_ordinal(&self) -> u32 {
        self.identifier_ordinal
    }

    fn location(&self) -> Location {
        Location {
            line: self.token_line,
            identifier_ordinal: self.identifier_ordinal,
        }
    }
}

fn skip_handler(scanner: &mut Scanner, matched: &str) -> Result<Option<TokenKind>, Error> {
    scanner.count_lines(matched);
    Ok(None)
}

fn number_handler(scanner: &mut Scanner, matched: &str) -> Result<Option<TokenKind>, Error> {
    match matched.parse::<i64>() {
        Ok(value) => {
            scanner.int_value = value;
            Ok(Some(TokenKind::Number))
        }
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: matched.to_string(),
            },
            scanner.position_at(scanner.start),
            scanner.location(),
        )),
    }
}

fn string_handler(scanner: &mut Scanner, matched: &str) -> Result<Option<TokenKind>, Error> {
    scanner.count_lines(matched);
    scanner.string_value = matched[1..matched.len() - 1].to_string();
    Ok(Some(TokenKind::String))
}

fn symbol_handler(scanner: &mut Scanner, matched: &str) -> Result<Option<TokenKind>, Error> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        return Ok(Some(*kind));
    }

    let next_ordinal = scanner.identifiers.len() as u32;
    scanner.identifier_ordinal = *scanner
        .identifiers
        .entry(matched.to_string())
        .or_insert(next_ordinal);

    Ok(Some(TokenKind::Identifier))
}

/// Drains a scanner over `source` into a token list ending with `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source, file);
    let mut tokens = vec![];

    loop {
        let kind = scanner.advance()?;
        tokens.push(scanner.current().clone());

        if kind == TokenKind::EOF {
            return Ok(tokens);
        }
    }
}
