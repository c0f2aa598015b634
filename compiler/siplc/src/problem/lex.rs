//! Lexer error to diagnostic conversion.

use sipl_diagnostic::{Diagnostic, ErrorCode};
use sipl_lexer::{LexError, LexErrorKind};

fn error_code_for_kind(kind: LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0001,
        LexErrorKind::LoneColon => ErrorCode::E0002,
        LexErrorKind::LoneBang => ErrorCode::E0003,
    }
}

/// Render a `LexError` as `[line N] error[E000x] at 'c': message`.
#[cold]
pub fn lex_error_to_diagnostic(err: &LexError) -> Diagnostic {
    let diag = Diagnostic::error(error_code_for_kind(err.kind))
        .with_message(err.kind.to_string())
        .at_line(err.line)
        .at_token(err.kind.text());

    match err.kind {
        LexErrorKind::UnexpectedCharacter(_) => {
            diag.with_label(err.span, "not part of any token")
        }
        LexErrorKind::LoneColon => diag
            .with_label(err.span, "expected ':='")
            .with_note("assignment is written ':='"),
        LexErrorKind::LoneBang => diag
            .with_label(err.span, "expected '!='")
            .with_note("negation is written 'not'"),
    }
}
