//! Lexical analysis for the scripting language.
//!
//! This module contains the `TokenSource` trait the parser consumes and
//! `Scanner`, the bundled lazy implementation. It handles:
//!
//! - Tokenization on demand using an ordered regex pattern table
//! - Recognition of keywords, identifiers, literals, and operators
//! - An identifier table assigning each distinct name an ordinal
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
