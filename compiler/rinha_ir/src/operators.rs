//! Binary operator tags.

use std::fmt;

/// Operator of a `Binary` node.
///
/// The variant names match the wire tags emitted by the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,

    // Comparison
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// All operators, in wire-tag order.
    pub const ALL: [BinaryOp; 13] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Eq,
        Self::Neq,
        Self::Lt,
        Self::Gt,
        Self::Lte,
        Self::Gte,
        Self::And,
        Self::Or,
    ];

    /// Parse a wire tag (`"Add"`, `"Neq"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.tag() == tag)
    }

    /// The wire tag for this operator.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Rem => "Rem",
            Self::Eq => "Eq",
            Self::Neq => "Neq",
            Self::Lt => "Lt",
            Self::Gt => "Gt",
            Self::Lte => "Lte",
            Self::Gte => "Gte",
            Self::And => "And",
            Self::Or => "Or",
        }
    }

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Integer-only operators: `Sub`, `Mul`, `Div`, `Rem`.
    ///
    /// `Add` is excluded because it also concatenates strings.
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Sub | Self::Mul | Self::Div | Self::Rem)
    }

    /// Ordering comparisons: `Lt`, `Gt`, `Lte`, `Gte`.
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Lte | Self::Gte)
    }

    /// Logical connectives: `And`, `Or`.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
