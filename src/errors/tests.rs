//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::ScanError;
use crate::Position;
use std::rc::Rc;

fn position_at(line: usize, column: isize) -> Position {
    let mut pos = Position::new(Rc::from("test.mg"), Rc::from(""));
    pos.line = line;
    pos.column = column;
    pos
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            details: "'@'".to_string(),
        },
        Position::null(),
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "Illegal Character");
    assert_eq!(error.details(), "'@'");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            details: "'$'".to_string(),
        },
        position_at(4, 2),
        position_at(4, 3),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.end.column, 3);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            details: "'@'".to_string(),
        },
        position_at(2, 0),
        position_at(2, 1),
    );

    assert_eq!(error.to_string(), "Illegal Character: '@'\nFile test.mg, line 3");
}

#[test]
fn test_error_impl_display() {
    let kind = ErrorImpl::IllegalCharacter {
        details: "'?'".to_string(),
    };

    assert_eq!(kind.to_string(), "illegal character: '?'");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_scan_error_reports_last_character() {
    let error = ScanError::UnterminatedString {
        fragment: "\"abc".to_string(),
    }
    .into_error(position_at(0, 0), position_at(0, 4));

    assert_eq!(error.details(), "'c'");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_scan_error_without_tip() {
    let error = ScanError::MalformedIdentifier {
        fragment: "1x".to_string(),
    }
    .into_error(position_at(0, 0), position_at(0, 2));

    assert_eq!(error.details(), "'x'");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_display_error_context() {
    let error = crate::tokenize("script.mg", "int x.\nx := @.").unwrap_err();

    assert_eq!(
        crate::display_error(&error),
        "Error: Illegal Character ('@')\n-> script.mg\n  |\n2 | x := @.\n  | -----^"
    );
}
