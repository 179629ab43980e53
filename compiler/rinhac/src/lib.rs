//! Rinha host: reads a JSON syntax tree, evaluates it and reports errors.
//!
//! The `rinha` binary is a thin argument parser over [`commands`].

pub mod commands;
mod error;
pub mod input;
mod tracing_setup;

pub use error::RunError;
pub use tracing_setup::init_tracing;
