//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_TOKEN!` - Emits a one-character token and steps past it

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's value, if any
/// * `$start` - Position of the token's first character
/// * `$end` - Position just past the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, Some(TokenValue::Integer(42)), start, end);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: Span {
                start: $start,
                end: $end,
            },
        }
    };
}

/// Emits a token whose value is the lexer's current character, then
/// advances the lexer by one.
///
/// # Example
///
/// ```ignore
/// let token = MK_SINGLE_TOKEN!(lexer, TokenKind::Plus, start);
/// ```
#[macro_export]
macro_rules! MK_SINGLE_TOKEN {
    ($lexer:expr, $kind:expr, $start:expr) => {{
        let value = $lexer.at().map(String::from).unwrap_or_default();
        $lexer.advance();
        $crate::MK_TOKEN!(
            $kind,
            Some(TokenValue::Text(value)),
            $start,
            $lexer.snapshot()
        )
    }};
}
