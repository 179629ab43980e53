//! Diagnostic system for runtime error reporting.
//!
//! A runtime failure becomes a [`Diagnostic`]: an [`ErrorCode`] for
//! searchability, a message, the primary [`Location`](rinha_ir::Location)
//! and optional notes. The plain rendering of a located diagnostic is
//!
//! ```text
//! <filename>:<start>:<end>: <message>
//! ```
//!
//! Emitters in [`emitter`] write diagnostics to a terminal or as JSON.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
