//! Diagnostic system for SIPL.
//!
//! Every lexical, syntax, and runtime problem is rendered as a [`Diagnostic`]
//! carrying an [`ErrorCode`], the offending line, and (for compile-time
//! problems) the offending token text or "at end".

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Location, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
