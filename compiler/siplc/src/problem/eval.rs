//! Runtime error to diagnostic conversion.
//!
//! # Error Code Ranges
//!
//! - E6001: type mismatch
//! - E6002: division by zero
//! - E6003–E6005: name and call errors (variable, function, arity)
//! - E6006: missing `else` branch
//! - E6007: call depth limit
//! - E9001: host failure caught at the evaluation boundary

use std::fmt::Write;

use sipl_diagnostic::{Diagnostic, ErrorCode};
use sipl_eval::{EvalBacktrace, EvalError, EvalErrorKind};

/// Frames shown in a call-stack note before the rest are elided.
pub const MAX_BACKTRACE_FRAMES: usize = 8;

fn error_code_for_kind(kind: &EvalErrorKind) -> ErrorCode {
    match kind {
        EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6001,
        EvalErrorKind::DivisionByZero => ErrorCode::E6002,
        EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
        EvalErrorKind::UndefinedFunction { .. } => ErrorCode::E6004,
        EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6005,
        EvalErrorKind::MissingElseBranch => ErrorCode::E6006,
        EvalErrorKind::StackOverflow { .. } => ErrorCode::E6007,
        EvalErrorKind::Internal { .. } => ErrorCode::E9001,
    }
}

fn note_for_kind(kind: &EvalErrorKind) -> Option<&'static str> {
    match kind {
        EvalErrorKind::UndefinedVariable { .. } => {
            Some("function bodies only see their own parameters")
        }
        EvalErrorKind::MissingElseBranch => {
            Some("an 'if' expression needs an 'else' branch to produce a value when false")
        }
        EvalErrorKind::StackOverflow { .. } => {
            Some("the limit can be changed with --max-depth=<n>")
        }
        _ => None,
    }
}

/// Render an `EvalError` as `[line N] error[E6xxx]: message`.
///
/// The call chain, when present, becomes a note; long chains keep the
/// innermost [`MAX_BACKTRACE_FRAMES`] frames.
#[cold]
pub fn eval_error_to_diagnostic(err: &EvalError) -> Diagnostic {
    let mut diag =
        Diagnostic::error(error_code_for_kind(&err.kind)).with_message(err.message.as_str());

    if let Some(line) = err.line {
        diag = diag.at_line(line);
    }
    if let Some(span) = err.span {
        diag = diag.with_label(span, "evaluation failed here");
    }
    if let Some(note) = note_for_kind(&err.kind) {
        diag = diag.with_note(note);
    }
    if let Some(backtrace) = &err.backtrace {
        if !backtrace.is_empty() {
            diag = diag.with_note(render_backtrace(backtrace));
        }
    }

    diag
}

fn render_backtrace(backtrace: &EvalBacktrace) -> String {
    let mut out = String::from("call stack:");
    for (i, frame) in backtrace
        .frames()
        .iter()
        .take(MAX_BACKTRACE_FRAMES)
        .enumerate()
    {
        let _ = write!(out, "\n    {i}: {} called at line {}", frame.name, frame.line);
    }
    if backtrace.len() > MAX_BACKTRACE_FRAMES {
        let _ = write!(
            out,
            "\n    ... {} more",
            backtrace.len() - MAX_BACKTRACE_FRAMES
        );
    }
    out
}

/// Diagnostic for a panic caught while evaluating.
#[cold]
pub fn internal_error_diagnostic(message: &str) -> Diagnostic {
    eval_error_to_diagnostic(&sipl_eval::errors::internal_error(message))
        .with_note("this is a bug in the interpreter, not in the program")
}
