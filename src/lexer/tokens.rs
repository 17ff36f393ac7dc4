use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("se", TokenKind::If);
        map.insert("altro", TokenKind::Else);
        map.insert("mentre", TokenKind::While);
        map.insert("costante", TokenKind::Constant);
        map.insert("ind", TokenKind::AddrType);
        map.insert("int", TokenKind::IntType);
        map.insert("car", TokenKind::CharType);
        map.insert("vuoto", TokenKind::VoidType);
        map.insert("vettore", TokenKind::VecType);
        map.insert("func", TokenKind::FuncType);
        map.insert("non", TokenKind::Not);
        map.insert("e", TokenKind::And);
        map.insert("o", TokenKind::Or);
        map.insert("inizio", TokenKind::Init);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    Integer,
    Char,
    VecChar, // "abc"
    Identifier,

    // Types
    AddrType,
    IntType,
    CharType,
    VecType,
    Constant,
    FuncType,
    VoidType,

    // Reserved
    If,
    Else,
    While,
    Return,
    Init,

    Plus,
    Minus,
    Mul,
    Div,
    Mod,

    Equals,
    NotEquals, // never produced by the lexer, see `non`
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    Not,
    And,
    Or,

    Assignment, // :=

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,
    End, // .
    Colon,

    Comment,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Char | TokenKind::VecChar)
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::AddrType
                | TokenKind::IntType
                | TokenKind::CharType
                | TokenKind::VecType
                | TokenKind::Constant
                | TokenKind::FuncType
                | TokenKind::VoidType
        )
    }

    /// True for every kind the reserved-word table can produce.
    pub fn is_reserved_word(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    /// The tag used in token dumps.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Integer => "INT",
            TokenKind::Char => "CHAR",
            TokenKind::VecChar => "VEC_CHAR",
            TokenKind::Identifier => "ID",
            TokenKind::AddrType => "ADDR_TYPE",
            TokenKind::IntType => "INT_TYPE",
            TokenKind::CharType => "CHAR_TYPE",
            TokenKind::VecType => "VEC_TYPE",
            TokenKind::Constant => "CONST",
            TokenKind::FuncType => "FUNC_TYPE",
            TokenKind::VoidType => "VOID_TYPE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RET",
            TokenKind::Init => "INIT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::LessEquals => "LTEQ",
            TokenKind::GreaterEquals => "GTEQ",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Assignment => "ASN",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LCBRAC",
            TokenKind::CloseCurly => "RCBRAC",
            TokenKind::OpenBracket => "LSBRAC",
            TokenKind::CloseBracket => "RSBRAC",
            TokenKind::Comma => "COMMA",
            TokenKind::End => "END",
            TokenKind::Colon => "COL",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Integer(u64),
    Text(String),
}

impl TokenValue {
    /// Zero and empty text count as no value when dumping tokens.
    pub fn is_empty(&self) -> bool {
        match self {
            TokenValue::Integer(value) => *value == 0,
            TokenValue::Text(text) => text.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Integer(_) => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(String::from(text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.span.start.line + 1;
        match &self.value {
            Some(value) if !value.is_empty() => {
                write!(f, "[Line {}] token {}: {}", line, self.kind, value)
            }
            _ => write!(f, "[Line {}] token {}", line, self.kind),
        }
    }
}

impl Token {
    /// Where the token began.
    pub fn position(&self) -> &Position {
        &self.span.start
    }

    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().and_then(TokenValue::as_str)
    }
}

/// Drops comment tokens, which the lexer keeps in the stream.
pub fn strip_comments(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| token.kind != TokenKind::Comment)
        .collect()
}
