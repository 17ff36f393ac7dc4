//! Error types for the lexer.
//!
//! There is a single error kind, an illegal character, raised either for a
//! character no scan rule accepts or for an unterminated quoted literal.
//! Errors carry the start/end positions of the offending fragment and an
//! optional tip shown in diagnostics.

pub mod errors;

#[cfg(test)]
mod tests;
