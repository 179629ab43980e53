use super::*;
use pretty_assertions::assert_eq;

fn loc(start: u32, end: u32) -> Location {
    Location::new("calc.rinha", start, end)
}

#[test]
fn test_located_headline() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("division by zero")
        .with_label(loc(14, 19), "divisor is zero");

    assert_eq!(diag.headline(), "calc.rinha:14:19: division by zero");
    assert_eq!(diag.to_string(), "calc.rinha:14:19: division by zero");
}

#[test]
fn test_unlocated_headline() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_message("cannot read input");
    assert_eq!(diag.headline(), "error[E9001]: cannot read input");
}

#[test]
fn test_display_with_secondary_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E6006)
        .with_message("expected 2 arguments, got 1")
        .with_label(loc(40, 46), "called here")
        .with_secondary_label(loc(4, 30), "function defined here")
        .with_note("arguments are never defaulted");

    assert_eq!(
        diag.to_string(),
        "calc.rinha:40:46: expected 2 arguments, got 1\n  \
         --> calc.rinha:4:30: function defined here\n  \
         = note: arguments are never defaulted"
    );
}

#[test]
fn test_primary_location_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_secondary_label(loc(1, 2), "context")
        .with_label(loc(5, 6), "here");

    assert_eq!(diag.primary_location(), Some(&loc(5, 6)));
    assert!(diag.is_error());
}
