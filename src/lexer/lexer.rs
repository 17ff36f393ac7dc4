use std::{rc::Rc, str::Chars, time::Instant};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error as ThisError;
use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    Position, Span, MK_SINGLE_TOKEN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[_a-zA-Z][_a-zA-Z0-9]*$").unwrap();
}

/// What the dispatch loop does with a character. Arms of `CharClass::of`
/// are listed in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Digit,
    Word,
    Arithmetic(TokenKind),
    Relational,
    Punctuation(TokenKind),
    SingleQuote,
    DoubleQuote,
    Hash,
    Colon,
    Illegal,
}

impl CharClass {
    fn of(c: char) -> CharClass {
        match c {
            ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' => CharClass::Whitespace,
            '0'..='9' => CharClass::Digit,
            'a'..='z' | 'A'..='Z' | '_' => CharClass::Word,
            '+' => CharClass::Arithmetic(TokenKind::Plus),
            '-' => CharClass::Arithmetic(TokenKind::Minus),
            '*' => CharClass::Arithmetic(TokenKind::Mul),
            '/' => CharClass::Arithmetic(TokenKind::Div),
            '%' => CharClass::Arithmetic(TokenKind::Mod),
            '<' | '>' | '=' => CharClass::Relational,
            '[' => CharClass::Punctuation(TokenKind::OpenBracket),
            ']' => CharClass::Punctuation(TokenKind::CloseBracket),
            '{' => CharClass::Punctuation(TokenKind::OpenCurly),
            '}' => CharClass::Punctuation(TokenKind::CloseCurly),
            '(' => CharClass::Punctuation(TokenKind::OpenParen),
            ')' => CharClass::Punctuation(TokenKind::CloseParen),
            ',' => CharClass::Punctuation(TokenKind::Comma),
            '.' => CharClass::Punctuation(TokenKind::End),
            '\'' => CharClass::SingleQuote,
            '"' => CharClass::DoubleQuote,
            '#' => CharClass::Hash,
            ':' => CharClass::Colon,
            _ => CharClass::Illegal,
        }
    }
}

/// Failure inside a sub-scan. Carries the text collected so far; the
/// dispatch loop turns it into an illegal-character `Error`.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unterminated character literal: {fragment}")]
    UnterminatedChar { fragment: String },
    #[error("unterminated string literal: {fragment}")]
    UnterminatedString { fragment: String },
    #[error("malformed identifier: {fragment}")]
    MalformedIdentifier { fragment: String },
}

impl ScanError {
    pub fn fragment(&self) -> &str {
        match self {
            ScanError::UnterminatedChar { fragment }
            | ScanError::UnterminatedString { fragment }
            | ScanError::MalformedIdentifier { fragment } => fragment,
        }
    }

    /// Reports the last character of the fragment, quoted.
    pub fn into_error(self, start: Position, end: Position) -> Error {
        let details = match self.fragment().chars().last() {
            Some(c) => format!("'{}'", c),
            None => String::from("''"),
        };

        let tip = match self {
            ScanError::UnterminatedChar { .. } => ErrorTip::Suggestion(String::from(
                "character literals hold one character between `'` quotes",
            )),
            ScanError::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("missing closing `\"` for string literal"))
            }
            ScanError::MalformedIdentifier { .. } => ErrorTip::None,
        };

        Error::new(ErrorImpl::IllegalCharacter { details }, start, end).with_tip(tip)
    }
}

pub struct Lexer<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    pos: Position,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(file: &str, source: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            chars: source.chars(),
            current: None,
            pos: Position::new(Rc::from(file), Rc::from(source)),
            tokens: vec![],
        };

        lexer.advance();
        lexer
    }

    pub fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = self.chars.next();
    }

    pub fn at(&self) -> Option<char> {
        self.current
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Independent copy of the cursor, used to anchor spans.
    pub fn snapshot(&self) -> Position {
        self.pos.clone()
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, line = token.span.start.line + 1, "token");
        self.tokens.push(token);
    }

    pub fn make_tokens(mut self) -> Result<Vec<Token>, Error> {
        while let Some(c) = self.current {
            let start = self.snapshot();

            let scanned = match CharClass::of(c) {
                CharClass::Whitespace => {
                    self.advance();
                    continue;
                }
                CharClass::Digit => Ok(self.scan_integer(start.clone())),
                CharClass::Word => self.scan_word(start.clone()),
                CharClass::Arithmetic(kind) => Ok(MK_SINGLE_TOKEN!(self, kind, start.clone())),
                CharClass::Relational => Ok(self.scan_relational(start.clone())),
                CharClass::Punctuation(kind) => Ok(MK_SINGLE_TOKEN!(self, kind, start.clone())),
                CharClass::SingleQuote => self.scan_char(start.clone()),
                CharClass::DoubleQuote => self.scan_string(start.clone()),
                CharClass::Hash => Ok(self.scan_comment(start.clone())),
                CharClass::Colon => Ok(self.scan_assignment(start.clone())),
                CharClass::Illegal => {
                    self.advance();
                    let error = Error::new(
                        ErrorImpl::IllegalCharacter {
                            details: format!("'{}'", c),
                        },
                        start,
                        self.snapshot(),
                    );
                    debug!(%error, "illegal character");
                    return Err(error);
                }
            };

            match scanned {
                Ok(token) => self.push(token),
                Err(err) => {
                    debug!(%err, "scan failed");
                    return Err(err.into_error(start, self.snapshot()));
                }
            }
        }

        Ok(self.tokens)
    }

    fn scan_integer(&mut self, start: Position) -> Token {
        let mut number = String::new();

        while let Some(c) = self.current {
            if !c.is_ascii_digit() {
                break;
            }
            number.push(c);
            self.advance();
        }

        // Only overflow can fail on a run of ASCII digits.
        let value = number.parse::<u64>().unwrap_or_else(|_| {
            warn!(literal = %number, "integer literal out of range, saturating");
            u64::MAX
        });

        MK_TOKEN!(TokenKind::Integer, Some(TokenValue::Integer(value)), start, self.snapshot())
    }

    fn scan_word(&mut self, start: Position) -> Result<Token, ScanError> {
        let mut word = String::new();

        while let Some(c) = self.current {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            word.push(c);
            self.advance();
        }

        if let Some(kind) = RESERVED_LOOKUP.get(word.as_str()) {
            return Ok(MK_TOKEN!(*kind, Some(TokenValue::Text(word)), start, self.snapshot()));
        }

        if !IDENTIFIER.is_match(&word) {
            return Err(ScanError::MalformedIdentifier { fragment: word });
        }

        Ok(MK_TOKEN!(TokenKind::Identifier, Some(TokenValue::Text(word)), start, self.snapshot()))
    }

    fn scan_relational(&mut self, start: Position) -> Token {
        let first = self.current;
        self.advance();

        let (kind, value) = match first {
            Some('<') if self.current == Some('=') => {
                self.advance();
                (TokenKind::LessEquals, "<=")
            }
            Some('<') => (TokenKind::Less, "<"),
            Some('>') if self.current == Some('=') => {
                self.advance();
                (TokenKind::GreaterEquals, ">=")
            }
            Some('>') => (TokenKind::Greater, ">"),
            _ => (TokenKind::Equals, "="),
        };

        MK_TOKEN!(kind, Some(TokenValue::from(value)), start, self.snapshot())
    }

    fn scan_assignment(&mut self, start: Position) -> Token {
        self.advance();

        if self.current == Some('=') {
            self.advance();
            return MK_TOKEN!(TokenKind::Assignment, Some(TokenValue::from(":=")), start, self.snapshot());
        }

        MK_TOKEN!(TokenKind::Colon, Some(TokenValue::from(":")), start, self.snapshot())
    }

    /// `'x'`, or `''` for an empty body. The value keeps both quotes.
    fn scan_char(&mut self, start: Position) -> Result<Token, ScanError> {
        let mut literal = String::from('\'');
        self.advance();

        let Some(body) = self.current else {
            return Err(ScanError::UnterminatedChar { fragment: literal });
        };
        literal.push(body);
        self.advance();

        if body != '\'' {
            match self.current {
                Some('\'') => {
                    literal.push('\'');
                    self.advance();
                }
                Some(other) => {
                    literal.push(other);
                    return Err(ScanError::UnterminatedChar { fragment: literal });
                }
                None => return Err(ScanError::UnterminatedChar { fragment: literal }),
            }
        }

        Ok(MK_TOKEN!(TokenKind::Char, Some(TokenValue::Text(literal)), start, self.snapshot()))
    }

    /// Everything up to the next `"`, verbatim. No escape sequences.
    fn scan_string(&mut self, start: Position) -> Result<Token, ScanError> {
        let mut string = String::from('"');
        self.advance();

        while let Some(c) = self.current {
            if c == '"' {
                break;
            }
            string.push(c);
            self.advance();
        }

        if self.at_eof() {
            return Err(ScanError::UnterminatedString { fragment: string });
        }

        string.push('"');
        self.advance();

        Ok(MK_TOKEN!(TokenKind::VecChar, Some(TokenValue::Text(string)), start, self.snapshot()))
    }

    fn scan_comment(&mut self, start: Position) -> Token {
        let mut comment = String::new();

        while let Some(c) = self.current {
            if c == '\n' {
                break;
            }
            comment.push(c);
            self.advance();
        }

        MK_TOKEN!(TokenKind::Comment, Some(TokenValue::Text(comment)), start, self.snapshot())
    }
}

/// Tokenizes `source` in one pass. Stops at the first illegal character;
/// no tokens are returned alongside an error.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn tokenize(file: &str, source: &str) -> Result<Vec<Token>, Error> {
    let started = Instant::now();
    let result = Lexer::new(file, source).make_tokens();

    match &result {
        Ok(tokens) => debug!(count = tokens.len(), elapsed = ?started.elapsed(), "tokenized"),
        Err(error) => debug!(line = error.start.line + 1, elapsed = ?started.elapsed(), "tokenizing failed"),
    }

    result
}

/// Tuple form of `tokenize`: the vector is empty whenever an error is present.
pub fn run(file: &str, source: &str) -> (Vec<Token>, Option<Error>) {
    match tokenize(file, source) {
        Ok(tokens) => (tokens, None),
        Err(error) => (Vec::new(), Some(error)),
    }
}
