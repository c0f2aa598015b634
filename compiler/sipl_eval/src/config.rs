//! Evaluator configuration.

/// Call depth limit used when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested function calls; `None` for unlimited.
    ///
    /// Without a limit, runaway recursion is never reported: the evaluator
    /// keeps growing its stack until the process runs out of memory.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
