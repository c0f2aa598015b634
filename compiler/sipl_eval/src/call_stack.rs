//! Live call stack for the interpreter.
//!
//! Each function call pushes a frame and pops it on return. The depth
//! limit is checked in [`CallStack::push`], and the frames are captured
//! into an [`EvalBacktrace`] when an error escapes a call.

use sipl_ir::{Name, StringInterner};

use crate::errors::{stack_overflow, BacktraceFrame, EvalBacktrace, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: Name,
    /// Line of the call site.
    pub call_line: u32,
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is not pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_overflow(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop() on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot of the frames, most recent call first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|frame| BacktraceFrame {
                name: interner.lookup(frame.name).to_string(),
                line: frame.call_line,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to `error` unless it already carries one.
    pub fn attach_backtrace(&self, error: EvalError, interner: &StringInterner) -> EvalError {
        if self.frames.is_empty() || error.backtrace.is_some() {
            return error;
        }
        error.with_backtrace(self.capture(interner))
    }
}
