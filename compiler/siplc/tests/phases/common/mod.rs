//! Shared helpers for phase tests.

use sipl_diagnostic::Diagnostic;
use sipl_eval::EvalConfig;
use siplc::{run_source, RunOutcome};

/// Run `source` with the default configuration.
pub fn run(source: &str) -> RunOutcome {
    run_source(source, &EvalConfig::default())
}

/// Run `source` and render its bindings, panicking on any error.
pub fn bindings(source: &str) -> String {
    match run(source) {
        RunOutcome::Success(bindings) => bindings.to_string(),
        other => panic!("expected success for {source:?}, got {other:?}"),
    }
}

/// Run `source` and return the headline of every diagnostic.
pub fn headlines(source: &str) -> Vec<String> {
    run(source)
        .diagnostics()
        .iter()
        .map(Diagnostic::headline)
        .collect()
}

/// Run `source`, expecting exactly one runtime error.
pub fn runtime_error(source: &str) -> Diagnostic {
    match run(source) {
        RunOutcome::RuntimeError(diagnostic) => diagnostic,
        other => panic!("expected a runtime error for {source:?}, got {other:?}"),
    }
}

/// Run `source`, expecting compile-time errors.
pub fn compile_errors(source: &str) -> Vec<Diagnostic> {
    match run(source) {
        RunOutcome::CompileErrors(diagnostics) => diagnostics,
        other => panic!("expected compile errors for {source:?}, got {other:?}"),
    }
}
