//! Phase errors rendered as diagnostics.
//!
//! Each phase crate owns its error type; none of them depends on
//! `sipl_diagnostic`. The conversions live here, one module per phase:
//!
//! - `lex`: `LexError` → `E0xxx`
//! - `parse`: `ParseError` → `E1xxx`
//! - `eval`: `EvalError` → `E6xxx`, or `E9001` for host failures

pub mod eval;
pub mod lex;
pub mod parse;

pub use eval::{eval_error_to_diagnostic, internal_error_diagnostic};
pub use lex::lex_error_to_diagnostic;
pub use parse::parse_error_to_diagnostic;
