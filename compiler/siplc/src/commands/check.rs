//! The `check` command: report syntax errors without evaluating.

use sipl_diagnostic::emitter::ColorMode;

use super::{read_file, report_frontend_errors};
use crate::error::CliError;
use crate::pipeline::{frontend, OutputFormat, RunConfig, EXIT_OK};
use crate::report::emit_diagnostics;

pub fn check_file(path: &str, config: &RunConfig, color: ColorMode) -> Result<i32, CliError> {
    let source = read_file(path)?;
    let front = frontend(&source);

    if let Some(code) = report_frontend_errors(&front, config, color) {
        return Ok(code);
    }

    match config.format {
        OutputFormat::Text => println!("{path}: no errors"),
        OutputFormat::Json => emit_diagnostics(&[], config, color),
    }
    Ok(EXIT_OK)
}
