use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal lexing diagnostic. Produced at most once per run; when present
/// no tokens are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    pub start: Position,
    pub end: Position,
    tip: ErrorTip,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, start: Position, end: Position) -> Self {
        Error {
            internal_error: error_impl,
            start,
            end,
            tip: ErrorTip::None,
        }
    }

    pub fn with_tip(mut self, tip: ErrorTip) -> Self {
        self.tip = tip;
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.start
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "Illegal Character",
        }
    }

    pub fn details(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { details } => details,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        self.tip.clone()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {}", self.get_error_name(), self.details())?;
        write!(f, "File {}, line {}", self.start.file, self.start.line + 1)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {details}")]
    IllegalCharacter { details: String },
}
