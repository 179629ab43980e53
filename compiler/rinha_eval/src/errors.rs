//! Evaluation errors.
//!
//! Every runtime failure is an [`EvalError`]: a structured
//! [`EvalErrorKind`], the message derived from it, the location of the
//! term that failed and, once it has unwound through a call, a backtrace.
//! Errors are never caught inside the evaluator; they propagate with `?`
//! to the host.

use std::fmt;
use std::sync::Arc;

use rinha_diagnostic::{Diagnostic, ErrorCode};
use rinha_ir::{BinaryOp, Location};

use crate::Value;

/// Result of evaluating a term.
pub type EvalResult = Result<Value, EvalError>;

/// Structured category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UndefinedVariable {
        name: String,
    },
    /// Operator applied to operand kinds it does not support.
    InvalidOperation {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    DivisionByZero,
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    NotCallable {
        type_name: &'static str,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    /// Call depth limit exceeded.
    StackOverflow {
        depth: usize,
    },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::InvalidOperation { .. } => ErrorCode::E6002,
            Self::DivisionByZero => ErrorCode::E6003,
            Self::TypeMismatch { .. } => ErrorCode::E6004,
            Self::NotCallable { .. } => ErrorCode::E6005,
            Self::ArityMismatch { .. } => ErrorCode::E6006,
            Self::StackOverflow { .. } => ErrorCode::E6007,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable `{name}`"),
            Self::InvalidOperation { op, left, right } => {
                write!(f, "invalid `{op}` operation between `{left}` and `{right}`")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "`{got}` is not a {expected}")
            }
            Self::NotCallable { type_name } => write!(f, "`{type_name}` is not callable"),
            Self::ArityMismatch { expected, got } => {
                let s = if *expected == 1 { "" } else { "s" };
                write!(f, "expected {expected} argument{s}, got {got}")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth of {depth} exceeded")
            }
        }
    }
}

/// A secondary message pointing at a related location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
    pub location: Location,
}

impl EvalNote {
    pub fn at(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Name the function was called through, or `<anonymous>`.
    pub name: Arc<str>,
    /// Location of the call expression.
    pub call_location: Location,
}

/// Snapshot of the call stack at an error site, innermost call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    /// Frames shown by `Display` before the rest are elided.
    pub const DISPLAY_LIMIT: usize = 32;

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
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().take(Self::DISPLAY_LIMIT).enumerate() {
            writeln!(f, "  {i}: {} at {}", frame.name, frame.call_location)?;
        }
        let hidden = self.frames.len().saturating_sub(Self::DISPLAY_LIMIT);
        if hidden > 0 {
            writeln!(f, "  ... {hidden} more frames")?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Location of the term that failed.
    pub location: Option<Location>,
    /// Call stack at the error site, captured by the innermost call the
    /// error unwound through.
    pub backtrace: Option<EvalBacktrace>,
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            location: None,
            backtrace: None,
            notes: Vec::new(),
        }
    }

    /// Attach the location of the failing term.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn error_code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a diagnostic. The backtrace is not included.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.error_code()).with_message(self.message.clone());
        if let Some(location) = &self.location {
            diag = diag.with_label(location.clone(), self.message.clone());
        }
        for note in &self.notes {
            diag = diag.with_secondary_label(note.location.clone(), note.message.clone());
        }
        diag
    }
}

/// `<filename>:<start>:<end>: <message>`, or just the message when the
/// error has no location.
impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_operation(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperation {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// `first`/`second` of something other than a tuple.
#[cold]
pub fn expected_tuple(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: "tuple",
        got: got.type_name(),
    })
}

#[cold]
pub fn not_callable(callee: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: callee.type_name(),
    })
}

#[cold]
pub fn wrong_function_args(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}
