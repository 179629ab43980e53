//! `rinha --explain <code>`: long-form documentation for an error code.

use rinha_diagnostic::ErrorCode;

/// Print the explanation for `code_str`. Returns the process exit code.
pub fn explain_error(code_str: &str) -> i32 {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX, e.g. E1001 or E6003.");
        return 1;
    };

    println!("{code}: {}", code.explanation());
    0
}
