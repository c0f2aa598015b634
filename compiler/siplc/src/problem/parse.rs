//! Syntax error to diagnostic conversion.

use sipl_diagnostic::{Diagnostic, ErrorCode};
use sipl_parse::{ErrorSite, ParseError, ParseErrorKind};

fn error_code_for_kind(kind: ParseErrorKind) -> ErrorCode {
    match kind {
        ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
        ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
        ParseErrorKind::InvalidStatement => ErrorCode::E1003,
        ParseErrorKind::ExpectedIdentifier => ErrorCode::E1004,
        ParseErrorKind::TrailingInput => ErrorCode::E1005,
    }
}

fn label_for_kind(kind: ParseErrorKind) -> String {
    match kind {
        ParseErrorKind::UnexpectedToken { expected } => format!("expected '{expected}' here"),
        ParseErrorKind::ExpectedExpression => "expected an expression".to_string(),
        ParseErrorKind::InvalidStatement => "not an assignment, 'if', or 'while'".to_string(),
        ParseErrorKind::ExpectedIdentifier => "expected a name".to_string(),
        ParseErrorKind::TrailingInput => "program already ended".to_string(),
    }
}

/// Render a `ParseError` as `[line N] error[E100x] at 'tok': message`
/// (or `at end` when the parser ran out of tokens).
#[cold]
pub fn parse_error_to_diagnostic(err: &ParseError) -> Diagnostic {
    let diag = Diagnostic::error(error_code_for_kind(err.kind))
        .with_message(err.message.as_str())
        .at_line(err.line)
        .with_label(err.span, label_for_kind(err.kind));

    match &err.site {
        ErrorSite::Token(text) => diag.at_token(text.as_str()),
        ErrorSite::End => diag.at_end(),
    }
}
