//! Command implementations for the `rinha` binary.

mod explain;
mod run;

pub use explain::explain_error;
pub use run::{
    build_interpreter, parse_max_depth, report_error, run_input, run_source, ErrorFormat,
    RunOptions,
};
