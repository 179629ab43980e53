use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Tree decoding errors
/// - E6xxx: Runtime errors
/// - E9xxx: Host errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Decoding Errors (E1xxx)
    /// Input is not valid JSON
    E1001,
    /// JSON is valid but is not a well-formed syntax tree
    E1002,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Operator applied to unsupported operand kinds
    E6002,
    /// Division or remainder by zero
    E6003,
    /// Value of the wrong kind (e.g. `first` of a non-tuple)
    E6004,
    /// Call of a value that is not a function
    E6005,
    /// Wrong number of arguments
    E6006,
    /// Call depth limit exceeded
    E6007,

    // Host Errors (E9xxx)
    /// Input could not be read
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Look up a code by its textual form. Case-insensitive.
    pub fn parse(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Long-form explanation, shown by `rinha --explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "The input is not a valid JSON document.",
            ErrorCode::E1002 => {
                "The input is valid JSON but does not describe a syntax tree: a node has an \
                 unknown `kind`, is missing a field, or a field has the wrong type."
            }
            ErrorCode::E6001 => {
                "A variable was referenced that is not bound by any enclosing `let` or \
                 function parameter."
            }
            ErrorCode::E6002 => {
                "An operator was applied to operands it does not support. `+` accepts two \
                 integers or at least one string; `-`, `*`, `/`, `%`, `<`, `>`, `<=` and `>=` \
                 accept only integers."
            }
            ErrorCode::E6003 => "The right operand of `/` or `%` evaluated to zero.",
            ErrorCode::E6004 => {
                "A value of the wrong kind was used, such as `first` or `second` applied to \
                 something that is not a tuple."
            }
            ErrorCode::E6005 => "The callee of a call expression did not evaluate to a function.",
            ErrorCode::E6006 => {
                "A function was called with a different number of arguments than it \
                 declares parameters."
            }
            ErrorCode::E6007 => {
                "The program recursed deeper than the configured call depth limit. Raise it \
                 with `--max-depth=<n>`, or pass `--max-depth=0` to remove it."
            }
            ErrorCode::E9001 => "The program file or standard input could not be read.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E6003.to_string(), "E6003");
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    }

    #[test]
    fn test_parse_round_trips() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::parse("e6006"), Some(ErrorCode::E6006));
        assert_eq!(ErrorCode::parse("E0000"), None);
    }

    #[test]
    fn test_runtime_range() {
        assert!(ErrorCode::E6001.is_runtime_error());
        assert!(ErrorCode::E6007.is_runtime_error());
        assert!(!ErrorCode::E1002.is_runtime_error());
        assert!(!ErrorCode::E9001.is_runtime_error());
    }

    #[test]
    fn test_every_code_is_explained() {
        for code in ErrorCode::ALL {
            assert!(!code.explanation().is_empty(), "{code} has no explanation");
        }
    }
}
