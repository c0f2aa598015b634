//! Command-line flag parsing.
//!
//! Flags take the form `--name=value` (or a bare `--notes`) and may appear
//! anywhere after the command; everything else is positional.

use sipl_diagnostic::emitter::ColorMode;

use crate::error::CliError;
use crate::pipeline::{OutputFormat, RunConfig};

/// Parsed flags plus positional arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub run: RunConfig,
    pub color: ColorMode,
    pub positional: Vec<String>,
}

/// Parse everything after the command word.
pub fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();

    for arg in args {
        let Some(flag) = arg.strip_prefix("--") else {
            options.positional.push(arg.clone());
            continue;
        };
        let (name, value) = flag.split_once('=').unwrap_or((flag, ""));
        match name {
            "max-depth" => {
                let depth = parse_depth(value).ok_or_else(|| invalid("--max-depth", value))?;
                options.run.eval = options.run.eval.with_max_call_depth(Some(depth));
            }
            "notes" if value.is_empty() => options.run.notes = true,
            "format" => {
                options.run.format =
                    OutputFormat::parse(value).ok_or_else(|| invalid("--format", value))?;
            }
            "color" => {
                options.color = ColorMode::parse(value).ok_or_else(|| invalid("--color", value))?;
            }
            _ => return Err(CliError::UnknownOption(arg.clone())),
        }
    }

    Ok(options)
}

/// A call depth limit must be a positive integer. There is no unlimited
/// setting so that runaway recursion always ends in a reported error.
fn parse_depth(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|&depth| depth > 0)
}

fn invalid(flag: &'static str, value: &str) -> CliError {
    CliError::InvalidFlag {
        flag,
        value: value.to_string(),
    }
}
