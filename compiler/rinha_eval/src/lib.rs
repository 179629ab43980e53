//! Rinha Eval - tree-walking evaluator for Rinha programs.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values; strings, tuples and closures are shared
//! - [`Environment`]: parent-linked, reference-counted scope frames
//! - [`evaluate_binary`]: direct enum-based binary operator dispatch
//! - [`Interpreter`]: walks the syntax tree, configured through
//!   [`InterpreterBuilder`]
//! - [`EvalError`]: the single error channel, convertible to a
//!   [`Diagnostic`](rinha_diagnostic::Diagnostic)

mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use diagnostics::{CallFrame, CallStack, EvalCounters};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{
    BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalNote, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Closure, Heap, Pair, Value};
