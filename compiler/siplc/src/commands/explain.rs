//! The `explain` command: display documentation for an error code.

use sipl_diagnostic::{ErrorCode, ErrorDocs};

use crate::error::CliError;
use crate::pipeline::EXIT_OK;

pub fn explain_error(code_str: &str) -> Result<i32, CliError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(CliError::UnknownErrorCode(code_str.to_string()));
    };

    match ErrorDocs::get(code) {
        Some(doc) => println!("{doc}"),
        None => println!("{code}: {}", code.description()),
    }
    Ok(EXIT_OK)
}
