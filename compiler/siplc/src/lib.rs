//! SIPL interpreter driver.
//!
//! Ties the phase crates together:
//! - [`pipeline`]: lex → parse → evaluate, with exit-code classes
//! - [`problem`]: phase errors rendered as [`sipl_diagnostic::Diagnostic`]s
//! - [`report`]: text or JSON output of bindings and diagnostics
//! - [`commands`]: handlers behind the `sipl` binary's subcommands
//! - [`tracing_setup`]: `SIPL_LOG`-driven subscriber

pub mod commands;
mod error;
pub mod options;
pub mod pipeline;
pub mod problem;
pub mod report;
pub mod tracing_setup;

pub use error::CliError;
pub use options::{parse_options, Options};
pub use pipeline::{frontend, run_source, Frontend, OutputFormat, RunConfig, RunOutcome};
