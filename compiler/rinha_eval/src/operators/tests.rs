#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::str::FromStr;

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn eval(left: Value, right: Value, op: BinaryOp) -> Value {
    evaluate_binary(left, right, op).unwrap()
}

fn kind_of(left: Value, right: Value, op: BinaryOp) -> EvalErrorKind {
    evaluate_binary(left, right, op).unwrap_err().kind
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(eval(Value::int(2), Value::int(3), BinaryOp::Add), Value::int(5));
    assert_eq!(eval(Value::int(5), Value::int(8), BinaryOp::Sub), Value::int(-3));
    assert_eq!(eval(Value::int(4), Value::int(6), BinaryOp::Mul), Value::int(24));
    assert_eq!(eval(Value::int(7), Value::int(2), BinaryOp::Div), Value::int(3));
    assert_eq!(eval(Value::int(7), Value::int(2), BinaryOp::Rem), Value::int(1));
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(eval(Value::int(-7), Value::int(2), BinaryOp::Div), Value::int(-3));
    assert_eq!(eval(Value::int(7), Value::int(-2), BinaryOp::Div), Value::int(-3));
    assert_eq!(eval(Value::int(-7), Value::int(2), BinaryOp::Rem), Value::int(-1));
    assert_eq!(eval(Value::int(7), Value::int(-2), BinaryOp::Rem), Value::int(1));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        kind_of(Value::int(1), Value::int(0), BinaryOp::Div),
        EvalErrorKind::DivisionByZero
    );
    assert_eq!(
        kind_of(Value::int(1), Value::int(0), BinaryOp::Rem),
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn test_no_fixed_width_overflow() {
    let max = Value::int(i64::MAX);
    let sum = eval(max.clone(), max, BinaryOp::Add);
    assert_eq!(sum, Value::Int(BigInt::from_str("18446744073709551614").unwrap()));

    let big = Value::Int(BigInt::from(u128::MAX));
    assert_eq!(
        eval(big.clone(), big, BinaryOp::Mul).to_string(),
        "115792089237316195423570985008687907852589419931798687112530834793049593217025"
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(eval(Value::int(2), Value::int(3), BinaryOp::Lt), Value::from(true));
    assert_eq!(eval(Value::int(3), Value::int(2), BinaryOp::Gt), Value::from(true));
    assert_eq!(eval(Value::int(3), Value::int(3), BinaryOp::Lte), Value::from(true));
    assert_eq!(eval(Value::int(2), Value::int(3), BinaryOp::Gte), Value::from(false));
}

#[test]
fn test_comparison_requires_ints() {
    assert_eq!(
        kind_of(Value::from("a"), Value::from("b"), BinaryOp::Lt),
        EvalErrorKind::InvalidOperation {
            op: BinaryOp::Lt,
            left: "str",
            right: "str",
        }
    );
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        eval(Value::from("a"), Value::int(1), BinaryOp::Add),
        Value::from("a1")
    );
    assert_eq!(
        eval(Value::int(1), Value::from("a"), BinaryOp::Add),
        Value::from("1a")
    );
    assert_eq!(
        eval(Value::from(true), Value::from("!"), BinaryOp::Add),
        Value::from("true!")
    );
    assert_eq!(
        eval(
            Value::from("pair: "),
            Value::tuple(Value::int(1), Value::int(2)),
            BinaryOp::Add
        ),
        Value::from("pair: (1, 2)")
    );
}

#[test]
fn test_add_without_strings_requires_ints() {
    assert_eq!(
        kind_of(Value::from(true), Value::int(1), BinaryOp::Add),
        EvalErrorKind::InvalidOperation {
            op: BinaryOp::Add,
            left: "bool",
            right: "int",
        }
    );
}

#[test]
fn test_arithmetic_rejects_strings() {
    assert!(matches!(
        kind_of(Value::from("3"), Value::int(1), BinaryOp::Sub),
        EvalErrorKind::InvalidOperation { op: BinaryOp::Sub, .. }
    ));
}

#[test]
fn test_equality_by_kind_then_value() {
    assert_eq!(eval(Value::int(1), Value::int(1), BinaryOp::Eq), Value::from(true));
    assert_eq!(eval(Value::from("a"), Value::from("a"), BinaryOp::Eq), Value::from(true));
    assert_eq!(eval(Value::from(true), Value::from(false), BinaryOp::Eq), Value::from(false));
    assert_eq!(eval(Value::int(1), Value::from("1"), BinaryOp::Eq), Value::from(false));
    assert_eq!(eval(Value::int(1), Value::from(true), BinaryOp::Neq), Value::from(true));
}

#[test]
fn test_tuples_never_equal() {
    let t = Value::tuple(Value::int(1), Value::int(2));
    assert_eq!(eval(t.clone(), t.clone(), BinaryOp::Eq), Value::from(false));
    assert_eq!(eval(t.clone(), t, BinaryOp::Neq), Value::from(true));
}

#[test]
fn test_logical_uses_truthiness() {
    assert_eq!(eval(Value::int(1), Value::from("x"), BinaryOp::And), Value::from(true));
    assert_eq!(eval(Value::int(0), Value::from(true), BinaryOp::And), Value::from(false));
    assert_eq!(eval(Value::from(""), Value::int(0), BinaryOp::Or), Value::from(false));
    assert_eq!(
        eval(
            Value::tuple(Value::int(1), Value::int(1)),
            Value::from("y"),
            BinaryOp::Or
        ),
        Value::from(true)
    );
}
