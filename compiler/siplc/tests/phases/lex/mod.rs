//! Tokenizer phase tests: lexical errors and how they surface.

use pretty_assertions::assert_eq;
use sipl_ir::{StringInterner, TokenKind};

use crate::common::{compile_errors, headlines};

#[test]
fn test_lexical_error_headline() {
    assert_eq!(
        headlines("program begin x := 1 @ end"),
        vec!["[line 1] error[E0001] at '@': unexpected character".to_string()]
    );
}

#[test]
fn test_lone_colon_and_bang() {
    let errors = compile_errors("program begin\nx : 1;\ny := !true\nend");
    let codes: Vec<_> = errors.iter().map(|d| d.code.as_str()).collect();
    // Lexer errors come first; the parser then trips over the holes they leave.
    assert_eq!(&codes[..2], &["E0002", "E0003"]);
    assert_eq!(errors[0].line, Some(2));
    assert_eq!(errors[1].line, Some(3));
}

#[test]
fn test_lexing_continues_after_errors() {
    let errors = compile_errors("program begin x := 1 # 2 $ end");
    let lexical: Vec<_> = errors
        .iter()
        .filter(|d| d.code.is_lexer_error())
        .map(|d| d.headline())
        .collect();
    assert_eq!(
        lexical,
        vec![
            "[line 1] error[E0001] at '#': unexpected character".to_string(),
            "[line 1] error[E0001] at '$': unexpected character".to_string(),
        ]
    );
}

#[test]
fn test_both_not_equal_spellings() {
    let interner = StringInterner::new();
    let kinds = sipl_lexer::lex("a <> b != c", &interner).tokens.kinds();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::NotEq,
            TokenKind::Ident,
            TokenKind::NotEq,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_eof_line_is_last_line() {
    let interner = StringInterner::new();
    let tokens = sipl_lexer::lex("program\nbegin\nx := 1\nend\n", &interner).tokens;
    let eof = tokens.iter().last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, 5);
}
