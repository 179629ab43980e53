//! Decode and evaluate a program, reporting failures on stderr.

use std::io::{self, IsTerminal};
use std::time::Instant;

use rinha_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use rinha_eval::{
    stdout_handler, Interpreter, InterpreterBuilder, SharedPrintHandler, Value,
    DEFAULT_MAX_CALL_DEPTH,
};
use tracing::debug;

use crate::input::InputSource;
use crate::RunError;

/// How errors are written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    /// `<filename>:<start>:<end>: <message>`
    #[default]
    Human,
    /// One JSON object per error.
    Json,
}

impl ErrorFormat {
    pub fn parse(value: &str) -> Option<ErrorFormat> {
        match value {
            "human" => Some(ErrorFormat::Human),
            "json" => Some(ErrorFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Call-depth limit; `None` is unlimited.
    pub max_depth: Option<usize>,
    /// Print evaluation counters to stderr when done.
    pub profile: bool,
    /// Print the call backtrace after a runtime error.
    pub backtrace: bool,
    pub color: ColorMode,
    pub error_format: ErrorFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            profile: false,
            backtrace: false,
            color: ColorMode::Auto,
            error_format: ErrorFormat::Human,
        }
    }
}

/// Parse a `--max-depth` value. `0` means unlimited.
pub fn parse_max_depth(value: &str) -> Option<Option<usize>> {
    match value.parse::<usize>().ok()? {
        0 => Some(None),
        n => Some(Some(n)),
    }
}

pub fn build_interpreter(options: &RunOptions, print_handler: SharedPrintHandler) -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(print_handler)
        .max_call_depth(options.max_depth)
        .profile(options.profile)
        .build()
}

/// Decode `source` and evaluate it with `interpreter`.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<Value, RunError> {
    let start = Instant::now();
    let file = rinha_ir::parse_file(source)?;
    debug!(file = %file.name, elapsed = ?start.elapsed(), "decoded syntax tree");

    let value = interpreter.run(&file)?;
    Ok(value)
}

/// Read, decode and evaluate a program, printing to stdout. Returns the
/// process exit code.
pub fn run_input(input: &InputSource, options: &RunOptions) -> i32 {
    let source = match input.read() {
        Ok(source) => source,
        Err(err) => {
            report_error(&err, options);
            return err.exit_code();
        }
    };

    let mut interpreter = build_interpreter(options, stdout_handler());
    let result = run_source(&source, &mut interpreter);

    if let Some(counters) = interpreter.counters() {
        eprintln!("{}", counters.report());
    }

    match result {
        Ok(_) => 0,
        Err(err) => {
            report_error(&err, options);
            err.exit_code()
        }
    }
}

/// Write an error to stderr in the configured format.
pub fn report_error(err: &RunError, options: &RunOptions) {
    let diagnostic = err.to_diagnostic();
    match options.error_format {
        ErrorFormat::Human => {
            let is_tty = io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
            emitter.emit(&diagnostic);
            emitter.flush();
        }
        ErrorFormat::Json => {
            let mut emitter = JsonEmitter::new(io::stderr());
            emitter.emit(&diagnostic);
            emitter.flush();
        }
    }

    if options.backtrace {
        if let RunError::Eval(eval_err) = err {
            if let Some(backtrace) = &eval_err.backtrace {
                eprint!("{backtrace}");
            }
        }
    }
}

#[cfg(test)]
mod tests;
