//! Source text to outcome: lex, parse, evaluate.
//!
//! Compile-time problems (lexical and syntax) are all collected and stop
//! the pipeline before evaluation. Evaluation stops at the first runtime
//! error. The two classes map to distinct exit codes.

use std::panic::{self, AssertUnwindSafe};

use sipl_diagnostic::Diagnostic;
use sipl_eval::{Bindings, EvalConfig};
use sipl_ir::{StringInterner, TokenList};
use sipl_parse::ParseOutput;
use tracing::debug;

use crate::problem::{
    eval_error_to_diagnostic, internal_error_diagnostic, lex_error_to_diagnostic,
    parse_error_to_diagnostic,
};

/// Successful run.
pub const EXIT_OK: i32 = 0;
/// Bad command-line usage.
pub const EXIT_USAGE: i32 = 64;
/// Lexical or syntax errors.
pub const EXIT_COMPILE_ERROR: i32 = 65;
/// Input file missing or unreadable.
pub const EXIT_NO_INPUT: i32 = 66;
/// Runtime error, including internal failures.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// How results and diagnostics are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bindings as `{a: 1}`; one diagnostic line each on stderr.
    #[default]
    Text,
    /// Bindings as a JSON object; diagnostics as a JSON array.
    Json,
}

impl OutputFormat {
    /// Parse a `--format=` flag value.
    pub fn parse(value: &str) -> Option<OutputFormat> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Settings for one run of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub eval: EvalConfig,
    pub format: OutputFormat,
    /// Print diagnostic notes under each text-mode error line.
    pub notes: bool,
}

/// Result of lexing and parsing one source text.
pub struct Frontend {
    pub interner: StringInterner,
    pub tokens: TokenList,
    pub parsed: ParseOutput,
    /// Lexical errors first, then syntax errors, each in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Frontend {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lex and parse `source`. The parser runs even after lexical errors so
/// that every compile-time problem is reported at once.
pub fn frontend(source: &str) -> Frontend {
    let interner = StringInterner::new();
    let lexed = sipl_lexer::lex(source, &interner);
    let parsed = sipl_parse::parse(&lexed.tokens, &interner);

    let diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(lex_error_to_diagnostic)
        .chain(parsed.errors.iter().map(parse_error_to_diagnostic))
        .collect();

    debug!(
        lex_errors = lexed.errors.len(),
        parse_errors = parsed.errors.len(),
        "frontend finished"
    );

    Frontend {
        interner,
        tokens: lexed.tokens,
        parsed,
        diagnostics,
    }
}

/// What happened when a program was run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program ran; these are its final global bindings.
    Success(Bindings),
    /// Lexical or syntax errors; nothing was evaluated.
    CompileErrors(Vec<Diagnostic>),
    /// The first runtime error, or a caught internal failure.
    RuntimeError(Diagnostic),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success(_) => EXIT_OK,
            RunOutcome::CompileErrors(_) => EXIT_COMPILE_ERROR,
            RunOutcome::RuntimeError(_) => EXIT_RUNTIME_ERROR,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            RunOutcome::Success(_) => &[],
            RunOutcome::CompileErrors(diagnostics) => diagnostics,
            RunOutcome::RuntimeError(diagnostic) => std::slice::from_ref(diagnostic),
        }
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        match self {
            RunOutcome::Success(bindings) => Some(bindings),
            _ => None,
        }
    }
}

/// Run a whole program.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, config: &EvalConfig) -> RunOutcome {
    let front = frontend(source);
    if front.has_errors() {
        return RunOutcome::CompileErrors(front.diagnostics);
    }
    let Some(program) = front.parsed.program.as_ref() else {
        return RunOutcome::RuntimeError(internal_error_diagnostic(
            "parser produced no program and no errors",
        ));
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        sipl_eval::evaluate(program, &front.parsed.arena, &front.interner, config)
    }));

    match result {
        Ok(Ok(bindings)) => RunOutcome::Success(bindings),
        Ok(Err(err)) => {
            debug!(error = %err, "evaluation failed");
            RunOutcome::RuntimeError(eval_error_to_diagnostic(&err))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            RunOutcome::RuntimeError(internal_error_diagnostic(&message))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "evaluation panicked".to_string()
    }
}
