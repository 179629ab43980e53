#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use rinha_diagnostic::ErrorCode;
use rinha_eval::buffer_handler;

const PRINT_SUM: &str = r#"{
    "name": "sum.rinha",
    "expression": {
        "kind": "Print",
        "value": {
            "kind": "Binary",
            "op": "Add",
            "lhs": {"kind": "Int", "value": 1, "location": {"filename": "sum.rinha", "start": 6, "end": 7}},
            "rhs": {"kind": "Int", "value": 2, "location": {"filename": "sum.rinha", "start": 10, "end": 11}},
            "location": {"filename": "sum.rinha", "start": 6, "end": 11}
        },
        "location": {"filename": "sum.rinha", "start": 0, "end": 12}
    },
    "location": {"filename": "sum.rinha", "start": 0, "end": 12}
}"#;

#[test]
fn test_run_source_prints() {
    let handler = buffer_handler();
    let mut interp = build_interpreter(&RunOptions::default(), handler.clone());
    let value = run_source(PRINT_SUM, &mut interp).unwrap();
    assert_eq!(value, Value::int(3));
    assert_eq!(handler.get_output(), "3\n");
}

#[test]
fn test_run_source_invalid_json() {
    let mut interp = build_interpreter(&RunOptions::default(), buffer_handler());
    let err = run_source("{\"name\": ", &mut interp).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::E1001);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_run_source_malformed_tree() {
    let mut interp = build_interpreter(&RunOptions::default(), buffer_handler());
    let err = run_source(r#"{"name": "x", "expression": {"kind": "Loop"}}"#, &mut interp)
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::E1002);
    assert_eq!(
        err.to_diagnostic().headline(),
        "error[E1002]: invalid syntax tree: unknown node kind `Loop`"
    );
}

#[test]
fn test_parse_max_depth() {
    assert_eq!(parse_max_depth("0"), Some(None));
    assert_eq!(parse_max_depth("1000"), Some(Some(1000)));
    assert_eq!(parse_max_depth("-3"), None);
    assert_eq!(parse_max_depth("lots"), None);
}

#[test]
fn test_error_format_parse() {
    assert_eq!(ErrorFormat::parse("json"), Some(ErrorFormat::Json));
    assert_eq!(ErrorFormat::parse("human"), Some(ErrorFormat::Human));
    assert_eq!(ErrorFormat::parse("xml"), None);
}

#[test]
fn test_profile_option_enables_counters() {
    let options = RunOptions {
        profile: true,
        ..RunOptions::default()
    };
    let mut interp = build_interpreter(&options, buffer_handler());
    run_source(PRINT_SUM, &mut interp).unwrap();
    assert_eq!(interp.counters().unwrap().terms_evaluated, 4);
}

#[test]
fn test_read_error_explains_input_selection() {
    let err = RunError::Read {
        source_name: "`missing.json`".to_string(),
        error: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    let diag = err.to_diagnostic();

    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        diag.headline(),
        "error[E9001]: cannot read `missing.json`: not found"
    );
    assert_eq!(diag.notes.len(), 1);
    assert!(diag.notes[0].contains(crate::input::DEFAULT_SOURCE_PATH));
}
