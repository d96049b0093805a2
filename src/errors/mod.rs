//! Error types for the front end.
//!
//! Every failure is fatal to the parse that raised it. This module defines:
//!
//! - `Error`, a failure with its source position and line/identifier marker
//! - `ErrorImpl`, the failure kinds raised by the grammar and the scanner
//! - `ErrorTip`, a short human-readable hint for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
