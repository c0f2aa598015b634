//! The `run` command: lex, parse, and evaluate a SIPL source file.

use sipl_diagnostic::emitter::ColorMode;

use super::read_file;
use crate::error::CliError;
use crate::pipeline::{run_source, RunConfig, RunOutcome};
use crate::report::{emit_diagnostics, render_bindings};

/// Run a file and print its final bindings.
pub fn run_file(path: &str, config: &RunConfig, color: ColorMode) -> Result<i32, CliError> {
    let source = read_file(path)?;
    let outcome = run_source(&source, &config.eval);

    match &outcome {
        RunOutcome::Success(bindings) => println!("{}", render_bindings(bindings, config.format)),
        RunOutcome::CompileErrors(_) | RunOutcome::RuntimeError(_) => {
            emit_diagnostics(outcome.diagnostics(), config, color);
        }
    }

    Ok(outcome.exit_code())
}
