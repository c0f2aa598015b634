//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one layer of the grammar:
//!
//! - [`program`]: the `program` header, function declarations, trailing input
//! - [`stmt`]: blocks and statements (`:=`, `if`, `while`)
//! - [`expr`]: the expression precedence chain
//!
//! Productions that can fail return `Result<_, ParseError>`; the block and
//! function loops are the recovery sites that record the error and resync.

mod expr;
mod program;
mod stmt;
