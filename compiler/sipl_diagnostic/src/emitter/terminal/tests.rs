use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(diagnostics: &[Diagnostic], colors: bool) -> String {
    let mode = if colors {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit_all(diagnostics);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_single_line_per_syntax_error() {
    let diags = vec![
        Diagnostic::error(ErrorCode::E1001)
            .with_message("expected ':=' after variable name")
            .at_line(2)
            .at_token("5"),
        Diagnostic::error(ErrorCode::E1001)
            .with_message("expected 'end' after block")
            .at_line(4)
            .at_end(),
    ];
    assert_eq!(
        render(&diags, false),
        "[line 2] error[E1001] at '5': expected ':=' after variable name\n\
         [line 4] error[E1001] at end: expected 'end' after block\n"
    );
}

#[test]
fn test_notes_hidden_by_default() {
    let diag = Diagnostic::error(ErrorCode::E6006)
        .with_message("'if' expression has no 'else' branch")
        .at_line(1)
        .with_note("an 'if' expression needs an 'else' branch")
        .with_note("call stack:");
    assert_eq!(
        render(&[diag], false),
        "[line 1] error[E6006]: 'if' expression has no 'else' branch\n"
    );
}

#[test]
fn test_notes_follow_header_when_enabled() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("undefined variable: g")
        .at_line(1)
        .with_note("in call to f");
    let mut emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_notes(true);
    emitter.emit(&diag);
    assert_eq!(
        String::from_utf8(emitter.into_inner()).unwrap(),
        "[line 1] error[E6003]: undefined variable: g\n  = note: in call to f\n"
    );
}

#[test]
fn test_colors_emit_ansi() {
    let diag = Diagnostic::error(ErrorCode::E6002)
        .with_message("division by zero")
        .at_line(1);
    let text = render(&[diag], true);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E6002"));
    assert!(text.contains("division by zero"));
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 0);
    emitter.emit_summary(1, 1);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: aborting due to 2 previous errors\n\
         error: aborting due to previous error; 1 warning emitted\n\
         warning: 3 warnings emitted\n"
    );
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
