#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{run, tokenize};

/// Cursor over the source buffer.
///
/// `offset` and `column` start at -1 so that the first `advance` lands on
/// the first character. The file name and source text are shared, never
/// mutated, so a clone is an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: isize,
    pub line: usize,
    pub column: isize,
    pub file: Rc<str>,
    pub source: Rc<str>,
}

impl Position {
    pub fn new(file: Rc<str>, source: Rc<str>) -> Self {
        Position {
            offset: -1,
            line: 0,
            column: -1,
            file,
            source,
        }
    }

    pub fn null() -> Self {
        Position::new(Rc::from("<null>"), Rc::from(""))
    }

    /// Moves one character forward. `previous` is the character being left
    /// behind: passing a newline starts the next line at column 0.
    pub fn advance(&mut self, previous: Option<char>) {
        self.offset += 1;
        self.column += 1;

        if previous == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Returns the text of the line this position is on, without its newline.
    pub fn line_text(&self) -> &str {
        self.source.split('\n').nth(self.line).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Position;

    fn position(source: &str) -> Position {
        Position::new(Rc::from("test.mg"), Rc::from(source))
    }

    #[test]
    fn test_advance_moves_column() {
        let mut pos = position("abc");
        pos.advance(None);
        assert_eq!((pos.offset, pos.line, pos.column), (0, 0, 0));

        pos.advance(Some('a'));
        pos.advance(Some('b'));
        assert_eq!((pos.offset, pos.line, pos.column), (2, 0, 2));
    }

    #[test]
    fn test_advance_past_newline() {
        let mut pos = position("a\nb");
        pos.advance(None);
        pos.advance(Some('a'));
        pos.advance(Some('\n'));
        assert_eq!((pos.offset, pos.line, pos.column), (2, 1, 0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pos = position("ab");
        pos.advance(None);
        let snapshot = pos.clone();
        pos.advance(Some('a'));

        assert_eq!(snapshot.offset, 0);
        assert_eq!(pos.offset, 1);
    }

    #[test]
    fn test_line_text() {
        let mut pos = position("int x.\nx := 3.\n");
        pos.advance(None);
        assert_eq!(pos.line_text(), "int x.");

        for c in "int x.\n".chars() {
            pos.advance(Some(c));
        }
        assert_eq!(pos.line_text(), "x := 3.");
    }
}

/// Renders an error with the offending source line and a caret under the
/// column it starts at.
pub fn display_error(error: &Error) -> String {
    /*
        Error: Illegal Character ('@')
        -> script.mg
           |
        2  | x := @.
           | -----^
    */

    let position = &error.start;
    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.details()));
    } else {
        out.push_str(&format!(
            "Error: {} ({}, {})\n",
            error.get_error_name(),
            error.details(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(position.line_text());
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = position.column.max(0) as usize;
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
