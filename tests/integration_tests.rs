//! Integration tests for end-to-end tokenization.
//!
//! These tests run whole programs through the public API and compare the
//! rendered token dump and error messages.

use magnus::{
    display_error,
    lexer::tokens::{strip_comments, Token, TokenKind},
    run, tokenize,
};
use pretty_assertions::assert_eq;

fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_tokenize_script_fixture() {
    let source = include_str!("fixtures/script.mg");
    let tokens = tokenize("script.mg", source).unwrap();

    let head = dump(&tokens[..21]);
    assert_eq!(
        head,
        "[Line 1] token COMMENT: # somma dei primi n numeri
[Line 2] token FUNC_TYPE: func
[Line 2] token INT_TYPE: int
[Line 2] token ID: somma
[Line 2] token LPAREN: (
[Line 2] token INT_TYPE: int
[Line 2] token ID: n
[Line 2] token RPAREN: )
[Line 2] token LCBRAC: {
[Line 3] token INT_TYPE: int
[Line 3] token ID: totale
[Line 3] token ASN: :=
[Line 3] token INT
[Line 3] token END: .
[Line 4] token WHILE: mentre
[Line 4] token LPAREN: (
[Line 4] token ID: n
[Line 4] token GT: >
[Line 4] token INT
[Line 4] token RPAREN: )
[Line 4] token LCBRAC: {"
    );
}

#[test]
fn test_script_fixture_literals() {
    let source = include_str!("fixtures/script.mg");
    let tokens = tokenize("script.mg", source).unwrap();

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::VecChar)
        .filter_map(Token::text)
        .collect();
    assert_eq!(strings, vec!["\"ciao mondo\"", "\"ok\"", "\"no\""]);

    let chars: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Char)
        .filter_map(Token::text)
        .collect();
    assert_eq!(chars, vec!["'x'", "'y'"]);

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::CloseCurly);
    assert_eq!(last.position().line, 18);
}

#[test]
fn test_script_fixture_comments_are_kept() {
    let source = include_str!("fixtures/script.mg");
    let tokens = tokenize("script.mg", source).unwrap();
    let count = tokens.len();

    let stripped = strip_comments(tokens);
    assert_eq!(stripped.len(), count - 1);
    assert_eq!(stripped[0].kind, TokenKind::FuncType);
}

#[test]
fn test_dump_small_program() {
    let tokens = tokenize("shell", "car c := 'a'.\nse (c <= 'z') { return c. }").unwrap();

    assert_eq!(
        dump(&tokens),
        "[Line 1] token CHAR_TYPE: car
[Line 1] token ID: c
[Line 1] token ASN: :=
[Line 1] token CHAR: 'a'
[Line 1] token END: .
[Line 2] token IF: se
[Line 2] token LPAREN: (
[Line 2] token ID: c
[Line 2] token LTEQ: <=
[Line 2] token CHAR: 'z'
[Line 2] token RPAREN: )
[Line 2] token LCBRAC: {
[Line 2] token RET: return
[Line 2] token ID: c
[Line 2] token END: .
[Line 2] token RCBRAC: }"
    );
}

#[test]
fn test_error_message() {
    let (tokens, error) = run("script.mg", "int x := 1.\n\nx := x ; 2.");

    assert!(tokens.is_empty());
    assert_eq!(
        error.unwrap().to_string(),
        "Illegal Character: ';'\nFile script.mg, line 3"
    );
}

#[test]
fn test_unterminated_literal_message() {
    let (tokens, error) = run("stdin", "car c := 'ab'.");

    assert!(tokens.is_empty());
    let error = error.unwrap();
    assert_eq!(error.to_string(), "Illegal Character: 'b'\nFile stdin, line 1");
    assert!(display_error(&error).contains("1 | car c := 'ab'."));
}

#[test]
fn test_rendered_dump_does_not_round_trip() {
    let tokens = tokenize("shell", "x := 0.").unwrap();
    let rendered = dump(&tokens);

    // Every dump line lexes, but as brackets, words and colons.
    let again = tokenize("shell", &rendered).unwrap();
    assert_ne!(again.len(), tokens.len());
}
