//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns a stream
//! of tokens into a linked sequence of statements. It handles:
//!
//! - Statement parsing (print, variable declarations, assignments and calls,
//!   conditionals, loops, function definitions)
//! - Expression parsing with layered precedence
//! - Fail-fast syntax error reporting
//!
//! The parser reads tokens lazily through the `TokenSource` trait and
//! keeps a single token of lookahead.

pub mod expr;
pub mod parser;
pub mod stmt;
