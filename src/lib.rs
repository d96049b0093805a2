#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source file.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Line and identifier-ordinal marker reported by a token source.
///
/// `line` is 1-based. `identifier_ordinal` is the identifier-table index of
/// the most recently read identifier and serves as the column-like marker of
/// a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: u32,
    pub identifier_ordinal: u32,
}

/// Finds the line containing byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at the very end of the input
/// resolves to the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character of the final line.
    match content.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => Some((line_number - 1, last.to_string(), last.len())),
        _ => Some((line_number, String::new(), 0)),
    }
}


/// Renders `error` against the source text it was raised for.
///
/// ```text
/// Error: SyntaxError (expected `Semicolon`, found `EOF`)
/// -> main.script
///   |
/// 1 | var x = 1; print(x)
///   | -------------------^
/// ```
pub fn display_error(error: &Error, source: &str) {
    let position = error.get_position();
    let location = error.get_location();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        eprintln!("   at line {}, identifier {}", location.line, location.identifier_ordinal);
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
