//! Runtime values.
//!
//! Values are immutable. Strings, tuples and closures live behind a
//! [`Heap`] handle, so copying a value between bindings never copies its
//! payload.

mod heap;

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::Zero;
use rinha_ir::{FunctionDef, Location};

use crate::Environment;

pub use heap::Heap;

/// Runtime value of a Rinha program.
#[derive(Clone)]
pub enum Value {
    /// Arbitrary-precision integer.
    Int(BigInt),
    Str(Heap<str>),
    Bool(bool),
    /// Pair of values.
    Tuple(Heap<Pair>),
    /// Function together with the environment it was created in.
    Closure(Heap<Closure>),
}

/// Payload of a tuple value.
#[derive(PartialEq)]
pub struct Pair(pub Value, pub Value);

/// Tuples built by recursion nest once per call. Unlink the nested pairs
/// this one solely owns with a work list instead of recursive drop glue.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_tuples(self, &mut pending);
        while let Some(mut pair) = pending.pop() {
            if let Some(pair) = Heap::get_mut(&mut pair) {
                take_tuples(pair, &mut pending);
            }
        }
    }
}

fn take_tuples(pair: &mut Pair, out: &mut Vec<Heap<Pair>>) {
    for slot in [&mut pair.0, &mut pair.1] {
        if let Value::Tuple(_) = slot {
            if let Value::Tuple(inner) = std::mem::replace(slot, Value::Bool(false)) {
                out.push(inner);
            }
        }
    }
}

/// A function value.
///
/// `env` is a handle to the defining environment, not a snapshot: bindings
/// added to it after the closure was created are visible to the body. This
/// is what lets `let f = fn ...; f(...)` recurse.
pub struct Closure {
    pub function: Arc<FunctionDef>,
    pub env: Environment,
    /// Location of the `Function` node that produced the closure.
    pub location: Location,
}

impl Closure {
    #[inline]
    pub fn arity(&self) -> usize {
        self.function.arity()
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The environment may contain this closure; never print it.
        let params: Vec<&str> = self
            .function
            .parameters
            .iter()
            .map(|p| &*p.text)
            .collect();
        f.debug_struct("Closure")
            .field("parameters", &params)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl Value {
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(n.into())
    }

    /// Create a string value. An `Arc<str>` is shared, not copied.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(Heap::from_arc(s.into()))
    }

    pub fn tuple(first: Value, second: Value) -> Self {
        Value::Tuple(Heap::new(Pair(first, second)))
    }

    pub fn closure(function: Arc<FunctionDef>, env: Environment, location: Location) -> Self {
        Value::Closure(Heap::new(Closure {
            function,
            env,
            location,
        }))
    }

    /// Name of the value's runtime kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Tuple(_) => "tuple",
            Value::Closure(_) => "closure",
        }
    }

    /// Coerce to a boolean for `if`, `&&` and `||`.
    ///
    /// `0`, `""`, `false`, tuples and closures are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => !n.is_zero(),
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Tuple(_) | Value::Closure(_) => false,
        }
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }
}

/// The display form used by `print` and string concatenation.
///
/// Nested tuples are rendered from an explicit stack, so arbitrarily deep
/// pairs print without recursion.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Value(&'a Value),
            Text(&'static str),
        }

        let mut pending = vec![Piece::Value(self)];
        while let Some(piece) = pending.pop() {
            let value = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Value(value) => value,
            };
            match value {
                Value::Int(n) => write!(f, "{n}")?,
                Value::Str(s) => f.write_str(s)?,
                Value::Bool(b) => write!(f, "{b}")?,
                Value::Tuple(pair) => {
                    f.write_str("(")?;
                    pending.extend([
                        Piece::Text(")"),
                        Piece::Value(&pair.1),
                        Piece::Text(", "),
                        Piece::Value(&pair.0),
                    ]);
                }
                Value::Closure(_) => f.write_str("<#closure>")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Tuple(pair) => write!(f, "Tuple({:?}, {:?})", pair.0, pair.1),
            Value::Closure(c) => c.fmt(f),
        }
    }
}

/// Host-side equality, for tests and embedding.
///
/// Tuples compare structurally and closures by identity. The language's
/// `==` operator is stricter; see `evaluate_binary`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}
