//! Lexical analysis for magnus source files.
//!
//! The lexer walks the source one character at a time and classifies runs
//! of characters into tokens:
//!
//! - Integer, character and string literals
//! - Identifiers, type keywords and reserved words
//! - Arithmetic and relational operators, `:=` and punctuation
//! - `#` comments, which stay in the token stream
//!
//! Every token records the position it started at. The first illegal
//! character ends the run with a single error.

pub mod lexer;
pub mod tokens;
