//! Rinha IR - syntax tree types for the Rinha language.
//!
//! This crate contains the data structures shared by every other crate in
//! the workspace:
//! - `Location` for source positions carried by every node
//! - `Term` / `TermKind` for the immutable syntax tree
//! - `BinaryOp` for the operator tags of `Binary` nodes
//! - `File` for the top-level translation unit
//!
//! Lexing and parsing happen outside this workspace. The tree arrives as
//! JSON, and [`decode`] turns that JSON into a `File`.

pub mod decode;
mod location;
mod operators;
mod term;

pub use decode::{parse_file, parse_term, DecodeError};
pub use location::Location;
pub use operators::BinaryOp;
pub use term::{File, FunctionDef, Parameter, Term, TermKind};

/// Arbitrary-precision integer used for `Int` literals.
pub use num_bigint::BigInt;
