//! Program input: piped stdin, a file argument, or the default path.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::RunError;

/// Where the program is read from when neither stdin nor a file is given.
pub const DEFAULT_SOURCE_PATH: &str = "/var/rinha/source.rinha.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Piped stdin wins; otherwise the file argument, falling back to
    /// [`DEFAULT_SOURCE_PATH`].
    pub fn select(file: Option<&str>, stdin_is_terminal: bool) -> InputSource {
        if !stdin_is_terminal {
            return InputSource::Stdin;
        }
        InputSource::File(PathBuf::from(file.unwrap_or(DEFAULT_SOURCE_PATH)))
    }

    pub fn read(&self) -> Result<String, RunError> {
        debug!(source = %self, "reading program");
        let result = match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin().lock().read_to_string(&mut buf).map(|_| buf)
            }
            InputSource::File(path) => std::fs::read_to_string(path),
        };
        result.map_err(|error| RunError::Read {
            source_name: self.to_string(),
            error,
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "`{}`", path.display()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_piped_stdin_wins() {
        assert_eq!(InputSource::select(Some("a.json"), false), InputSource::Stdin);
        assert_eq!(InputSource::select(None, false), InputSource::Stdin);
    }

    #[test]
    fn test_file_argument() {
        assert_eq!(
            InputSource::select(Some("fib.json"), true),
            InputSource::File(PathBuf::from("fib.json"))
        );
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            InputSource::select(None, true),
            InputSource::File(PathBuf::from(DEFAULT_SOURCE_PATH))
        );
    }

    #[test]
    fn test_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/rinha/program.json"));
        let err = source.read().unwrap_err();
        assert!(matches!(err, RunError::Read { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(err
            .to_string()
            .starts_with("cannot read `/nonexistent/rinha/program.json`: "));
    }
}
