//! Binary operator implementations.
//!
//! Both operands are already evaluated; `&&` and `||` never short-circuit.
//! Dispatch is a direct match on the operator.

use num_bigint::BigInt;
use num_traits::Zero;
use rinha_ir::BinaryOp;

use crate::errors::{division_by_zero, invalid_operation, EvalError, EvalResult};
use crate::Value;

/// Apply a binary operator to two values.
///
/// Errors carry no location; the caller attaches the `Binary` node's.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => integer_arith(&left, &right, op, |a, b| Ok(a - b)),
        BinaryOp::Mul => integer_arith(&left, &right, op, |a, b| Ok(a * b)),
        BinaryOp::Div => integer_arith(&left, &right, op, |a, b| {
            if b.is_zero() {
                return Err(division_by_zero());
            }
            Ok(a / b)
        }),
        BinaryOp::Rem => integer_arith(&left, &right, op, |a, b| {
            if b.is_zero() {
                return Err(division_by_zero());
            }
            Ok(a % b)
        }),
        BinaryOp::Lt => integer_compare(&left, &right, op, |a, b| a < b),
        BinaryOp::Gt => integer_compare(&left, &right, op, |a, b| a > b),
        BinaryOp::Lte => integer_compare(&left, &right, op, |a, b| a <= b),
        BinaryOp::Gte => integer_compare(&left, &right, op, |a, b| a >= b),
        BinaryOp::Eq => Ok(Value::Bool(values_equal(&left, &right))),
        BinaryOp::Neq => Ok(Value::Bool(!values_equal(&left, &right))),
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
    }
}

/// Integer sum, or concatenation of display forms when either side is a
/// string.
fn add(left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (left, right) if left.is_str() || right.is_str() => {
            Ok(Value::string(format!("{left}{right}")))
        }
        (left, right) => Err(invalid_operation(BinaryOp::Add, &left, &right)),
    }
}

/// `/` and `%` truncate toward zero, so the remainder takes the sign of
/// the dividend.
fn integer_arith(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    f: impl FnOnce(&BigInt, &BigInt) -> Result<BigInt, EvalError>,
) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => f(a, b).map(Value::Int),
        _ => Err(invalid_operation(op, left, right)),
    }
}

fn integer_compare(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    f: impl FnOnce(&BigInt, &BigInt) -> bool,
) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(invalid_operation(op, left, right)),
    }
}

/// Language equality: same kind and same value. Tuples and closures are
/// never equal to anything, themselves included.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests;
