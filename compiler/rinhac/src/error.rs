use std::io;

use rinha_diagnostic::{Diagnostic, ErrorCode};
use rinha_eval::EvalError;
use rinha_ir::DecodeError;

use crate::input::DEFAULT_SOURCE_PATH;

/// Anything that stops a program from running to completion.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: io::Error,
    },

    #[error("invalid syntax tree: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RunError {
    /// 1 for runtime errors, 2 when the program never started.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Eval(_) => 1,
            RunError::Read { .. } | RunError::Decode(_) => 2,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            RunError::Read { .. } => ErrorCode::E9001,
            RunError::Decode(DecodeError::Json(_)) => ErrorCode::E1001,
            RunError::Decode(_) => ErrorCode::E1002,
            RunError::Eval(err) => err.error_code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Eval(err) => err.to_diagnostic(),
            RunError::Read { .. } => Diagnostic::error(self.error_code())
                .with_message(self.to_string())
                .with_note(format!(
                    "the program is read from stdin when piped, otherwise from FILE or \
                     `{DEFAULT_SOURCE_PATH}`"
                )),
            RunError::Decode(_) => {
                Diagnostic::error(self.error_code()).with_message(self.to_string())
            }
        }
    }
}
