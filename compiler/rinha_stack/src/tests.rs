use super::*;

#[test]
fn test_passes_through_result() {
    let result: Result<u32, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn test_mutual_recursion() {
    fn is_even(n: u64) -> bool {
        ensure_sufficient_stack(|| if n == 0 { true } else { is_odd(n - 1) })
    }

    fn is_odd(n: u64) -> bool {
        ensure_sufficient_stack(|| if n == 0 { false } else { is_even(n - 1) })
    }

    assert!(is_even(10));
    assert!(is_odd(7));
}

#[test]
fn test_deep_recursion() {
    // Far past what an 8MB main-thread stack survives without growth.
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(200_000), 20_000_100_000);
}
