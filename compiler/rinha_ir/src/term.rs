//! Syntax tree nodes.
//!
//! The tree is immutable once decoded. Children are boxed and owned by their
//! parent; function definitions are the exception and sit behind an `Arc`
//! so closures can keep their body alive without copying the subtree.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;

use crate::{BinaryOp, Location};

/// A syntax tree node: a kind plus the location it was parsed from.
#[derive(Clone, Eq, PartialEq)]
pub struct Term {
    pub kind: TermKind,
    pub location: Location,
}

impl Term {
    pub fn new(kind: TermKind, location: Location) -> Self {
        Term { kind, location }
    }

    /// The wire name of this node's kind (`"Int"`, `"Let"`, ...).
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Trees are torn down with an explicit work list. `Let` chains and nested
/// calls are as deep as the program is long, and the derived drop glue
/// would recurse once per level.
impl Drop for Term {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.take_children(&mut pending);
        while let Some(mut term) = pending.pop() {
            term.kind.take_children(&mut pending);
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.location)
    }
}

/// A binding site: a `Let` name or a function parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Parameter {
    pub text: Arc<str>,
    pub location: Location,
}

impl Parameter {
    pub fn new(text: impl Into<Arc<str>>, location: Location) -> Self {
        Parameter {
            text: text.into(),
            location,
        }
    }
}

/// A function literal: ordered parameters and a body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDef {
    pub parameters: Vec<Parameter>,
    pub body: Term,
}

impl FunctionDef {
    /// Number of parameters the function expects.
    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Node variants.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TermKind {
    /// Integer literal of any magnitude.
    Int(BigInt),

    /// String literal.
    Str(Arc<str>),

    /// Boolean literal.
    Bool(bool),

    /// Binary operation: `lhs op rhs`.
    Binary {
        op: BinaryOp,
        lhs: Box<Term>,
        rhs: Box<Term>,
    },

    /// `print(value)`
    Print(Box<Term>),

    /// `if (condition) { then } else { otherwise }`
    If {
        condition: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
    },

    /// `first(value)`
    First(Box<Term>),

    /// `second(value)`
    Second(Box<Term>),

    /// `(first, second)`
    Tuple { first: Box<Term>, second: Box<Term> },

    /// Variable reference.
    Var(Arc<str>),

    /// `let name = value; next`
    Let {
        name: Parameter,
        value: Box<Term>,
        next: Box<Term>,
    },

    /// `fn (parameters) => { body }`
    Function(Arc<FunctionDef>),

    /// `callee(arguments)`
    Call {
        callee: Box<Term>,
        arguments: Vec<Term>,
    },
}

impl TermKind {
    /// The wire name of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            TermKind::Int(_) => "Int",
            TermKind::Str(_) => "Str",
            TermKind::Bool(_) => "Bool",
            TermKind::Binary { .. } => "Binary",
            TermKind::Print(_) => "Print",
            TermKind::If { .. } => "If",
            TermKind::First(_) => "First",
            TermKind::Second(_) => "Second",
            TermKind::Tuple { .. } => "Tuple",
            TermKind::Var(_) => "Var",
            TermKind::Let { .. } => "Let",
            TermKind::Function(_) => "Function",
            TermKind::Call { .. } => "Call",
        }
    }

    /// Move every child term into `out`, leaving a leaf behind.
    fn take_children(&mut self, out: &mut Vec<Term>) {
        if self.is_leaf() {
            return;
        }
        match std::mem::replace(self, TermKind::Bool(false)) {
            TermKind::Int(_) | TermKind::Str(_) | TermKind::Bool(_) | TermKind::Var(_) => {}
            TermKind::Binary { lhs, rhs, .. } => out.extend([*lhs, *rhs]),
            TermKind::Print(value) | TermKind::First(value) | TermKind::Second(value) => {
                out.push(*value);
            }
            TermKind::If {
                condition,
                then,
                otherwise,
            } => out.extend([*condition, *then, *otherwise]),
            TermKind::Tuple { first, second } => out.extend([*first, *second]),
            TermKind::Let { value, next, .. } => out.extend([*value, *next]),
            // Closures may still hold the definition.
            TermKind::Function(def) => {
                if let Ok(def) = Arc::try_unwrap(def) {
                    out.push(def.body);
                }
            }
            TermKind::Call { callee, arguments } => {
                out.push(*callee);
                out.extend(arguments);
            }
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            TermKind::Int(_) | TermKind::Str(_) | TermKind::Bool(_) | TermKind::Var(_)
        )
    }
}

/// A decoded translation unit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct File {
    pub name: String,
    pub expression: Term,
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests;
