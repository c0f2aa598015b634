//! Command-line failures that happen outside the language pipeline.

use crate::pipeline::{EXIT_NO_INPUT, EXIT_USAGE};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("invalid value '{value}' for '{flag}'")]
    InvalidFlag { flag: &'static str, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown error code '{0}'")]
    UnknownErrorCode(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ReadFile { .. } => EXIT_NO_INPUT,
            CliError::Usage(_)
            | CliError::InvalidFlag { .. }
            | CliError::UnknownOption(_)
            | CliError::UnknownErrorCode(_) => EXIT_USAGE,
        }
    }
}
