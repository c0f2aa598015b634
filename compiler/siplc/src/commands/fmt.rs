//! The `fmt` command: print a file in canonical layout.

use sipl_diagnostic::emitter::ColorMode;

use super::{read_file, report_frontend_errors};
use crate::error::CliError;
use crate::pipeline::{frontend, RunConfig, EXIT_COMPILE_ERROR, EXIT_OK};

pub fn format_file(path: &str, config: &RunConfig, color: ColorMode) -> Result<i32, CliError> {
    let source = read_file(path)?;
    let front = frontend(&source);

    if let Some(code) = report_frontend_errors(&front, config, color) {
        return Ok(code);
    }
    let Some(program) = front.parsed.program.as_ref() else {
        return Ok(EXIT_COMPILE_ERROR);
    };

    print!(
        "{}",
        sipl_fmt::format_program(program, &front.parsed.arena, &front.interner)
    );
    Ok(EXIT_OK)
}
