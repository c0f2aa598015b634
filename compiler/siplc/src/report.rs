//! Writing results and diagnostics in the selected [`OutputFormat`].

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

use sipl_diagnostic::emitter::{
    escape_json, ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter,
};
use sipl_diagnostic::Diagnostic;
use sipl_eval::{Bindings, Value};

use crate::pipeline::{OutputFormat, RunConfig};

/// Report diagnostics: text goes to stderr, JSON to stdout.
pub fn emit_diagnostics(diagnostics: &[Diagnostic], config: &RunConfig, color: ColorMode) {
    match config.format {
        OutputFormat::Text => {
            let is_tty = io::stderr().is_terminal();
            write_diagnostics(io::stderr().lock(), diagnostics, config, color, is_tty);
        }
        OutputFormat::Json => {
            write_diagnostics(io::stdout().lock(), diagnostics, config, color, false);
        }
    }
}

/// Write diagnostics to `writer`.
///
/// Text mode writes exactly one line per diagnostic unless `config.notes`
/// is set. JSON always carries the notes.
pub fn write_diagnostics<W: Write>(
    writer: W,
    diagnostics: &[Diagnostic],
    config: &RunConfig,
    color: ColorMode,
    is_tty: bool,
) {
    match config.format {
        OutputFormat::Text => {
            let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty)
                .with_notes(config.notes);
            emitter.emit_all(diagnostics);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.end();
            emitter.flush();
        }
    }
}

/// Render final bindings: `{a: 1, b: true}` or `{"a": 1, "b": true}`.
pub fn render_bindings(bindings: &Bindings, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => bindings.to_string(),
        OutputFormat::Json => {
            let mut out = String::from("{");
            for (i, (name, value)) in bindings.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "\"{}\": ", escape_json(name));
                match value {
                    Value::Int(n) => {
                        let _ = write!(out, "{n}");
                    }
                    Value::Bool(b) => {
                        let _ = write!(out, "{b}");
                    }
                }
            }
            out.push('}');
            out
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests {
    use super::*;
    use crate::pipeline::run_source;
    use pretty_assertions::assert_eq;
    use sipl_diagnostic::ErrorCode;
    use sipl_eval::EvalConfig;

    fn text(config: &RunConfig, diagnostics: &[Diagnostic]) -> String {
        let mut out = Vec::new();
        write_diagnostics(&mut out, diagnostics, config, ColorMode::Never, false);
        String::from_utf8(out).unwrap()
    }

    fn bindings() -> Bindings {
        let mut bindings = Bindings::new();
        bindings.insert("y", Value::Bool(true));
        bindings.insert("x", Value::int(-14));
        bindings
    }

    #[test]
    fn test_render_bindings() {
        assert_eq!(
            render_bindings(&bindings(), OutputFormat::Text),
            "{x: -14, y: true}"
        );
        assert_eq!(
            render_bindings(&bindings(), OutputFormat::Json),
            "{\"x\": -14, \"y\": true}"
        );
        assert_eq!(render_bindings(&Bindings::new(), OutputFormat::Json), "{}");
    }

    #[test]
    fn test_text_diagnostics_one_line_each() {
        let diagnostics = [
            Diagnostic::error(ErrorCode::E1002)
                .with_message("expected expression")
                .at_line(1)
                .at_end(),
            Diagnostic::error(ErrorCode::E0001)
                .with_message("unexpected character")
                .at_line(2)
                .at_token("@"),
        ];
        assert_eq!(
            text(&RunConfig::default(), &diagnostics),
            "[line 1] error[E1002] at end: expected expression\n\
             [line 2] error[E0001] at '@': unexpected character\n"
        );
    }

    #[test]
    fn test_diagnostics_with_notes_stay_one_line() {
        let config = RunConfig::default();
        let eval = EvalConfig::default().with_max_call_depth(Some(20));
        for source in [
            "program begin x : 1 end",
            "program begin x := if false then 1 end",
            "program func f(n) = f(n + 1) begin x := f(0) end",
        ] {
            let outcome = run_source(source, &eval);
            let diagnostics = outcome.diagnostics();
            assert!(
                diagnostics.iter().any(|d| !d.notes.is_empty()),
                "{source}"
            );
            let rendered = text(&config, diagnostics);
            assert_eq!(rendered.lines().count(), diagnostics.len(), "{rendered}");
            assert!(rendered.lines().all(|l| l.starts_with("[line ")), "{rendered}");
        }
    }

    #[test]
    fn test_notes_flag_prints_notes() {
        let config = RunConfig {
            notes: true,
            ..RunConfig::default()
        };
        let outcome = run_source(
            "program begin x := if false then 1 end",
            &EvalConfig::default(),
        );
        let rendered = text(&config, outcome.diagnostics());
        assert!(rendered.lines().count() > 1, "{rendered}");
        assert!(rendered.contains("  = note: "), "{rendered}");
    }

    #[test]
    fn test_json_diagnostics_array() {
        let diagnostics = [Diagnostic::error(ErrorCode::E6002)
            .with_message("division by zero")
            .at_line(3)];
        let config = RunConfig {
            format: OutputFormat::Json,
            ..RunConfig::default()
        };
        let json = text(&config, &diagnostics);
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"code\": \"E6002\""));
        assert!(json.trim_end().ends_with(']'));
    }
}
