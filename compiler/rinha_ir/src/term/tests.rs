use super::*;

fn loc(start: u32, end: u32) -> Location {
    Location::new("t.rinha", start, end)
}

#[test]
fn test_kind_names_match_wire_tags() {
    let int = Term::new(TermKind::Int(BigInt::from(1)), loc(0, 1));
    let var = Term::new(TermKind::Var("x".into()), loc(0, 1));
    let tuple = Term::new(
        TermKind::Tuple {
            first: Box::new(int.clone()),
            second: Box::new(var.clone()),
        },
        loc(0, 6),
    );

    assert_eq!(int.kind_name(), "Int");
    assert_eq!(var.kind_name(), "Var");
    assert_eq!(tuple.kind_name(), "Tuple");
}

#[test]
fn test_function_arity() {
    let def = FunctionDef {
        parameters: vec![Parameter::new("a", loc(4, 5)), Parameter::new("b", loc(7, 8))],
        body: Term::new(TermKind::Var("a".into()), loc(14, 15)),
    };
    assert_eq!(def.arity(), 2);
}

#[test]
fn test_function_def_is_shared() {
    let def = Arc::new(FunctionDef {
        parameters: Vec::new(),
        body: Term::new(TermKind::Bool(true), loc(9, 13)),
    });
    let term = Term::new(TermKind::Function(Arc::clone(&def)), loc(0, 15));
    let copy = term.clone();

    let (TermKind::Function(a), TermKind::Function(b)) = (&term.kind, &copy.kind) else {
        panic!("expected functions");
    };
    assert!(Arc::ptr_eq(a, b));
}

#[test]
fn test_debug_includes_location() {
    let term = Term::new(TermKind::Bool(false), loc(3, 8));
    assert_eq!(format!("{term:?}"), "Bool(false) @ t.rinha@3..8");
}

#[test]
fn test_drop_deep_tree() {
    let mut term = Term::new(TermKind::Int(BigInt::from(0)), loc(0, 1));
    for _ in 0..200_000 {
        let value = Term::new(TermKind::Bool(true), loc(0, 4));
        term = Term::new(
            TermKind::Let {
                name: Parameter::new("_", loc(4, 5)),
                value: Box::new(value),
                next: Box::new(term),
            },
            loc(0, 10),
        );
    }
    drop(term);
}

#[test]
fn test_drop_keeps_shared_function_body() {
    let def = Arc::new(FunctionDef {
        parameters: vec![Parameter::new("x", loc(4, 5))],
        body: Term::new(TermKind::Var("x".into()), loc(10, 11)),
    });
    let term = Term::new(TermKind::Function(Arc::clone(&def)), loc(0, 11));
    drop(term);

    assert_eq!(def.body.kind, TermKind::Var("x".into()));
}
