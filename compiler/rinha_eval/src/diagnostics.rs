//! Call tracking for the evaluator.
//!
//! - `CallStack`: live call frames, with the call-depth limit checked in
//!   `push`
//! - `CallFrame`: the name a function was called through and the call site
//! - `EvalCounters`: optional counters for `--profile`

use std::sync::Arc;

use rinha_ir::Location;

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
    pub name: Arc<str>,
    /// Location of the call expression, not the function definition.
    pub call_location: Location,
}

/// Live call stack for the interpreter.
///
/// Each call pushes a frame and pops it on return, whether the call
/// succeeded or not.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means no depth limit.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// On overflow the frame is NOT pushed and a `StackOverflow` error is
    /// returned.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot the stack, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: Arc::clone(&f.name),
                call_location: f.call_location.clone(),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to an error that doesn't have one yet.
    ///
    /// Only the innermost call an error unwinds through captures, so the
    /// backtrace shows the stack at the failure.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Performance counters for `--profile`.
///
/// Held as `Option<EvalCounters>` by the interpreter; `None` disables
/// counting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalCounters {
    pub terms_evaluated: u64,
    pub function_calls: u64,
    pub max_depth: usize,
}

impl EvalCounters {
    #[inline]
    pub fn count_term(&mut self) {
        self.terms_evaluated = self.terms_evaluated.wrapping_add(1);
    }

    /// Count a call entered at `depth`.
    #[inline]
    pub fn count_function_call(&mut self, depth: usize) {
        self.function_calls = self.function_calls.wrapping_add(1);
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn report(&self) -> String {
        format!(
            "Evaluation profile:\n  \
             Terms evaluated: {}\n  \
             Function calls:  {}\n  \
             Max call depth:  {}",
            self.terms_evaluated, self.function_calls, self.max_depth,
        )
    }
}
