//! Command handlers for the `sipl` binary.
//!
//! Each handler returns the process exit code, or a [`CliError`] for
//! failures outside the language pipeline. Shared helpers live here.

use sipl_diagnostic::emitter::ColorMode;

use crate::error::CliError;
use crate::pipeline::{Frontend, RunConfig, EXIT_COMPILE_ERROR};
use crate::report::emit_diagnostics;

mod check;
mod debug;
mod explain;
mod fmt;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file, render_ast};
pub use explain::explain_error;
pub use fmt::format_file;
pub use run::run_file;

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_string(),
        source,
    })
}

/// Report frontend errors, returning the exit code if there were any.
fn report_frontend_errors(front: &Frontend, config: &RunConfig, color: ColorMode) -> Option<i32> {
    if front.has_errors() {
        emit_diagnostics(&front.diagnostics, config, color);
        Some(EXIT_COMPILE_ERROR)
    } else {
        None
    }
}
