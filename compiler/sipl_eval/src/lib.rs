//! SIPL evaluator.
//!
//! A tree-walking interpreter over the parser's arena AST:
//! - [`Value`]: arbitrary-precision integers and booleans, nothing else
//! - [`Environment`]: scope chain in an index arena
//! - [`FunctionRegistry`]: declarations registered before the main block runs
//! - [`CallStack`]: depth limit and backtraces for runtime errors
//! - [`Interpreter`]: statement and expression evaluation

mod call_stack;
mod config;
mod environment;
pub mod errors;
mod interpreter;
mod registry;
mod value;

pub use call_stack::{CallFrame, CallStack};
pub use config::{EvalConfig, DEFAULT_MAX_CALL_DEPTH};
pub use environment::Environment;
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{evaluate, Interpreter};
pub use registry::FunctionRegistry;
pub use value::{Bindings, Value};
