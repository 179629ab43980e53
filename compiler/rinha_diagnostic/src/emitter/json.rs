//! JSON Emitter
//!
//! Machine-readable output: one JSON object per diagnostic, one per line.

use std::io::Write;

use serde_json::{json, Value};

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

pub struct JsonEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn label_to_json(label: &Label) -> Value {
    json!({
        "filename": &*label.location.filename,
        "start": label.location.start,
        "end": label.location.end,
        "message": label.message,
        "primary": label.is_primary,
    })
}

/// The JSON object written for a diagnostic.
pub(crate) fn diagnostic_to_json(diagnostic: &Diagnostic) -> Value {
    json!({
        "code": diagnostic.code.as_str(),
        "severity": diagnostic.severity.to_string(),
        "message": diagnostic.message,
        "rendered": diagnostic.headline(),
        "labels": diagnostic.labels.iter().map(label_to_json).collect::<Vec<_>>(),
        "notes": diagnostic.notes,
    })
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(self.writer, "{}", diagnostic_to_json(diagnostic));
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
