//! Runtime errors and their constructors.
//!
//! Every runtime failure is an [`EvalError`] whose [`EvalErrorKind`] carries
//! the structured data; `message` is the kind's `Display` text. Constructors
//! are free functions marked `#[cold]`. The interpreter attaches the source
//! line of the innermost failing node on the way out.

use std::fmt;

use sipl_ir::Span;

/// Structured category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An operand or condition had the wrong runtime type.
    TypeMismatch {
        /// The operator or construct, e.g. `'+'` or `condition of 'while'`.
        context: String,
        expected: &'static str,
        got: &'static str,
    },
    DivisionByZero,
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// An `if` expression without `else` took the false path.
    MissingElseBranch,
    /// Call depth exceeded the configured limit.
    StackOverflow {
        limit: usize,
    },
    /// A host failure caught at the evaluation boundary.
    Internal {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                context,
                expected,
                got,
            } => write!(
                f,
                "type mismatch in {context}: expected {expected}, found {got}"
            ),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::UndefinedFunction { name } => write!(f, "undefined function '{name}'"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "function '{name}' expects {expected} {arg_word}, got {got}")
            }
            Self::MissingElseBranch => {
                write!(f, "'if' expression has no 'else' branch for a false condition")
            }
            Self::StackOverflow { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    /// Line of the call site.
    pub line: u32,
}

/// Snapshot of the call stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{i}: {} called at line {}", frame.name, frame.line)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Line of the innermost node that failed, once attached.
    pub line: Option<u32>,
    pub span: Option<Span>,
    /// Call chain at the error site, when raised inside a function.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            line: None,
            span: None,
            backtrace: None,
        }
    }

    /// Attach a location unless one is already present.
    #[must_use]
    pub fn or_at(mut self, line: u32, span: Span) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[line {line}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {}

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Operand or condition of the wrong type.
#[cold]
pub fn type_mismatch(
    context: impl Into<String>,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

/// Wrong number of arguments in a call.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn missing_else_branch() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingElseBranch)
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}

/// Host failure (a caught panic) during evaluation.
#[cold]
pub fn internal_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Internal {
        message: message.into(),
    })
}
