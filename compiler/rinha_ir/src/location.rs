//! Source locations.
//!
//! Every node of the syntax tree carries a `Location`. Locations exist only
//! for diagnostics; they never influence evaluation.

use std::fmt;
use std::sync::Arc;

/// Source location of a syntax tree node.
///
/// `start` and `end` are byte offsets into the original source file, as
/// reported by the external parser. The filename is shared between all
/// nodes decoded from the same file.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Location {
    pub filename: Arc<str>,
    pub start: u32,
    pub end: u32,
}

impl Location {
    /// Create a new location.
    pub fn new(filename: impl Into<Arc<str>>, start: u32, end: u32) -> Self {
        Location {
            filename: filename.into(),
            start,
            end,
        }
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.filename, self.start, self.end)
    }
}

/// Renders `<filename>:<start>:<end>`, the prefix of every runtime diagnostic.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.start, self.end)
    }
}
