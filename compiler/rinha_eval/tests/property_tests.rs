//! Property-based tests for the evaluator.
//!
//! Generated programs check integer arithmetic against `num-bigint`,
//! tuple projection and string coercion.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use proptest::prelude::*;
use rinha_eval::{buffer_handler, EvalErrorKind, EvalResult, InterpreterBuilder, Value};
use rinha_ir::{BinaryOp, Location, Term, TermKind};

fn node(kind: TermKind) -> Term {
    Term::new(kind, Location::new("prop.rinha", 0, 1))
}

fn int(n: &BigInt) -> Term {
    node(TermKind::Int(n.clone()))
}

fn string(s: &str) -> Term {
    node(TermKind::Str(s.into()))
}

fn binary(op: BinaryOp, lhs: Term, rhs: Term) -> Term {
    node(TermKind::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

fn tuple(first: Term, second: Term) -> Term {
    node(TermKind::Tuple {
        first: Box::new(first),
        second: Box::new(second),
    })
}

fn eval(term: &Term) -> (EvalResult, String) {
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let env = interp.env().clone();
    let result = interp.evaluate(term, &env);
    (result, handler.get_output())
}

fn eval_ok(term: &Term) -> Value {
    eval(term).0.expect("evaluation should succeed")
}

/// Integers well outside the 64-bit range, including negatives.
fn big_int_strategy() -> impl Strategy<Value = BigInt> {
    (any::<i128>(), any::<i128>()).prop_map(|(hi, lo)| (BigInt::from(hi) << 128u32) + lo)
}

/// Leaf terms of every value kind.
fn leaf_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        big_int_strategy().prop_map(|n| int(&n)),
        "[a-z ]{0,12}".prop_map(|s| string(&s)),
        any::<bool>().prop_map(|b| node(TermKind::Bool(b))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_add_is_exact(a in big_int_strategy(), b in big_int_strategy()) {
        let result = eval_ok(&binary(BinaryOp::Add, int(&a), int(&b)));
        prop_assert_eq!(result, Value::Int(a + b));
    }

    #[test]
    fn prop_mul_and_sub_are_exact(a in big_int_strategy(), b in big_int_strategy()) {
        let product = eval_ok(&binary(BinaryOp::Mul, int(&a), int(&b)));
        prop_assert_eq!(product, Value::Int(&a * &b));
        let difference = eval_ok(&binary(BinaryOp::Sub, int(&a), int(&b)));
        prop_assert_eq!(difference, Value::Int(a - b));
    }

    #[test]
    fn prop_div_by_zero_always_fails(a in big_int_strategy()) {
        for op in [BinaryOp::Div, BinaryOp::Rem] {
            let (result, _) = eval(&binary(op, int(&a), int(&BigInt::zero())));
            prop_assert_eq!(result.unwrap_err().kind, EvalErrorKind::DivisionByZero);
        }
    }

    #[test]
    fn prop_div_rem_identity(a in big_int_strategy(), b in big_int_strategy()) {
        prop_assume!(!b.is_zero());
        let quotient = eval_ok(&binary(BinaryOp::Div, int(&a), int(&b)));
        let remainder = eval_ok(&binary(BinaryOp::Rem, int(&a), int(&b)));
        let q = quotient.as_int().unwrap();
        let r = remainder.as_int().unwrap();

        prop_assert_eq!(q * &b + r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn prop_comparisons_match_bigint(a in big_int_strategy(), b in big_int_strategy()) {
        let cases = [
            (BinaryOp::Lt, a < b),
            (BinaryOp::Gt, a > b),
            (BinaryOp::Lte, a <= b),
            (BinaryOp::Gte, a >= b),
            (BinaryOp::Eq, a == b),
            (BinaryOp::Neq, a != b),
        ];
        for (op, expected) in cases {
            prop_assert_eq!(eval_ok(&binary(op, int(&a), int(&b))), Value::Bool(expected));
        }
    }

    #[test]
    fn prop_tuple_projection(first in leaf_strategy(), second in leaf_strategy()) {
        let expected_first = eval_ok(&first);
        let expected_second = eval_ok(&second);
        let pair = tuple(first, second);

        let got_first = eval_ok(&node(TermKind::First(Box::new(pair.clone()))));
        let got_second = eval_ok(&node(TermKind::Second(Box::new(pair))));
        prop_assert_eq!(got_first, expected_first);
        prop_assert_eq!(got_second, expected_second);
    }

    #[test]
    fn prop_string_coercion(s in "[a-z]{0,8}", n in big_int_strategy()) {
        let left = eval_ok(&binary(BinaryOp::Add, string(&s), int(&n)));
        prop_assert_eq!(left.to_string(), format!("{s}{n}"));
        let right = eval_ok(&binary(BinaryOp::Add, int(&n), string(&s)));
        prop_assert_eq!(right.to_string(), format!("{n}{s}"));
    }

    #[test]
    fn prop_print_echoes_display_form(leaf in leaf_strategy()) {
        let expected = eval_ok(&leaf);
        let (result, output) = eval(&node(TermKind::Print(Box::new(leaf))));
        prop_assert_eq!(output, format!("{expected}\n"));
        prop_assert_eq!(result.unwrap(), expected);
    }

    #[test]
    fn prop_if_true_is_then(then in leaf_strategy(), otherwise in leaf_strategy()) {
        let expected = eval_ok(&then);
        let term = node(TermKind::If {
            condition: Box::new(node(TermKind::Bool(true))),
            then: Box::new(then),
            otherwise: Box::new(node(TermKind::Print(Box::new(otherwise)))),
        });
        let (result, output) = eval(&term);
        prop_assert_eq!(result.unwrap(), expected);
        prop_assert_eq!(output, "");
    }
}
