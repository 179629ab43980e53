//! JSON tree decoding.
//!
//! The external parser emits the syntax tree as JSON: every node is an
//! object with a `kind` tag, kind-specific fields and a `location`. This
//! module turns that document into a [`File`].
//!
//! Decoding goes through `serde_json::Value` rather than derived
//! `Deserialize` impls. Integer literals may exceed any fixed-width type,
//! and `serde_json`'s `arbitrary_precision` number representation does not
//! survive serde's buffering of internally tagged enums.

use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Number, Value as Json};

use crate::{BinaryOp, File, FunctionDef, Location, Parameter, Term, TermKind};

/// Errors produced while decoding a JSON syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object for {context}")]
    ExpectedObject { context: &'static str },

    #[error("`{node}` node is missing field `{field}`")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    #[error("field `{field}` of `{node}` must be {expected}")]
    InvalidField {
        node: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown node kind `{0}`")]
    UnknownKind(String),

    #[error("unknown binary operator `{0}`")]
    UnknownOperator(String),

    #[error("`{0}` is not an integer literal")]
    InvalidInteger(String),
}

/// Parse a JSON document into a [`File`].
///
/// Nesting depth is unbounded: `Let` chains nest one level per binding, so
/// real programs routinely exceed `serde_json`'s default limit.
pub fn parse_file(source: &str) -> Result<File, DecodeError> {
    let json = read_json(source)?;
    let file = Decoder::default().file(&json);
    release(json);
    file
}

/// Parse a JSON document holding a single node into a [`Term`].
pub fn parse_term(source: &str) -> Result<Term, DecodeError> {
    let json = read_json(source)?;
    let term = Decoder::default().term(&json);
    release(json);
    term
}

/// `serde_json` parses recursively; `serde_stacker` grows the stack under
/// it so the recursion limit can be lifted safely.
fn read_json(source: &str) -> Result<Json, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();
    let json = Json::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(json)
}

/// Drop a JSON document without recursing once per nesting level.
fn release(json: Json) {
    let mut pending = vec![json];
    while let Some(json) = pending.pop() {
        match json {
            Json::Array(items) => pending.extend(items),
            Json::Object(fields) => pending.extend(fields.into_iter().map(|(_, value)| value)),
            _ => {}
        }
    }
}

/// Stateful decoder.
///
/// Keeps the most recent filename so every node of a file shares a single
/// `Arc<str>` allocation.
#[derive(Default)]
struct Decoder {
    filename: Option<Arc<str>>,
}

type Object = Map<String, Json>;

impl Decoder {
    fn file(&mut self, json: &Json) -> Result<File, DecodeError> {
        let obj = json
            .as_object()
            .ok_or(DecodeError::ExpectedObject { context: "File" })?;
        let name = str_field(obj, "File", "name")?.to_owned();
        let expression = self.term(field(obj, "File", "expression")?)?;
        let location = match obj.get("location") {
            Some(loc) => Some(self.location(loc, "File")?),
            None => None,
        };
        Ok(File {
            name,
            expression,
            location,
        })
    }

    fn term(&mut self, json: &Json) -> Result<Term, DecodeError> {
        rinha_stack::ensure_sufficient_stack(|| self.term_inner(json))
    }

    fn boxed(
        &mut self,
        obj: &Object,
        node: &'static str,
        name: &'static str,
    ) -> Result<Box<Term>, DecodeError> {
        self.term(field(obj, node, name)?).map(Box::new)
    }

    fn term_inner(&mut self, json: &Json) -> Result<Term, DecodeError> {
        let obj = json
            .as_object()
            .ok_or(DecodeError::ExpectedObject { context: "term" })?;
        let tag = str_field(obj, "term", "kind")?;
        let location = match obj.get("location") {
            Some(loc) => self.location(loc, "term")?,
            None => Location::default(),
        };

        let kind = match tag {
            "Int" => TermKind::Int(integer(field(obj, "Int", "value")?)?),
            "Str" => TermKind::Str(Arc::from(str_field(obj, "Str", "value")?)),
            "Bool" => TermKind::Bool(bool_field(obj, "Bool", "value")?),
            "Binary" => {
                let op_tag = str_field(obj, "Binary", "op")?;
                let op = BinaryOp::from_tag(op_tag)
                    .ok_or_else(|| DecodeError::UnknownOperator(op_tag.to_owned()))?;
                TermKind::Binary {
                    op,
                    lhs: self.boxed(obj, "Binary", "lhs")?,
                    rhs: self.boxed(obj, "Binary", "rhs")?,
                }
            }
            "Print" => TermKind::Print(self.boxed(obj, "Print", "value")?),
            "First" => TermKind::First(self.boxed(obj, "First", "value")?),
            "Second" => TermKind::Second(self.boxed(obj, "Second", "value")?),
            "If" => TermKind::If {
                condition: self.boxed(obj, "If", "condition")?,
                then: self.boxed(obj, "If", "then")?,
                otherwise: self.boxed(obj, "If", "otherwise")?,
            },
            "Tuple" => TermKind::Tuple {
                first: self.boxed(obj, "Tuple", "first")?,
                second: self.boxed(obj, "Tuple", "second")?,
            },
            "Var" => TermKind::Var(Arc::from(str_field(obj, "Var", "text")?)),
            "Let" => TermKind::Let {
                name: self.parameter(field(obj, "Let", "name")?)?,
                value: self.boxed(obj, "Let", "value")?,
                next: self.boxed(obj, "Let", "next")?,
            },
            "Function" => {
                let parameters = array_field(obj, "Function", "parameters")?
                    .iter()
                    .map(|p| self.parameter(p))
                    .collect::<Result<Vec<_>, _>>()?;
                let body = self.term(field(obj, "Function", "value")?)?;
                TermKind::Function(Arc::new(FunctionDef { parameters, body }))
            }
            "Call" => {
                let callee = self.boxed(obj, "Call", "callee")?;
                let arguments = array_field(obj, "Call", "arguments")?
                    .iter()
                    .map(|a| self.term(a))
                    .collect::<Result<Vec<_>, _>>()?;
                TermKind::Call { callee, arguments }
            }
            other => return Err(DecodeError::UnknownKind(other.to_owned())),
        };

        Ok(Term::new(kind, location))
    }

    fn parameter(&mut self, json: &Json) -> Result<Parameter, DecodeError> {
        let obj = json
            .as_object()
            .ok_or(DecodeError::ExpectedObject { context: "Parameter" })?;
        let text = str_field(obj, "Parameter", "text")?;
        let location = match obj.get("location") {
            Some(loc) => self.location(loc, "Parameter")?,
            None => Location::default(),
        };
        Ok(Parameter::new(text, location))
    }

    fn location(&mut self, json: &Json, node: &'static str) -> Result<Location, DecodeError> {
        let obj = json.as_object().ok_or(DecodeError::InvalidField {
            node,
            field: "location",
            expected: "an object",
        })?;
        let filename = self.filename(str_field(obj, "Location", "filename")?);
        Ok(Location {
            filename,
            start: offset(obj, "start")?,
            end: offset(obj, "end")?,
        })
    }

    fn filename(&mut self, name: &str) -> Arc<str> {
        match &self.filename {
            Some(cached) if &**cached == name => Arc::clone(cached),
            _ => {
                let fresh: Arc<str> = Arc::from(name);
                self.filename = Some(Arc::clone(&fresh));
                fresh
            }
        }
    }
}

fn field<'a>(
    obj: &'a Object,
    node: &'static str,
    name: &'static str,
) -> Result<&'a Json, DecodeError> {
    obj.get(name)
        .ok_or(DecodeError::MissingField { node, field: name })
}

fn str_field<'a>(
    obj: &'a Object,
    node: &'static str,
    name: &'static str,
) -> Result<&'a str, DecodeError> {
    field(obj, node, name)?
        .as_str()
        .ok_or(DecodeError::InvalidField {
            node,
            field: name,
            expected: "a string",
        })
}

fn bool_field(obj: &Object, node: &'static str, name: &'static str) -> Result<bool, DecodeError> {
    field(obj, node, name)?
        .as_bool()
        .ok_or(DecodeError::InvalidField {
            node,
            field: name,
            expected: "a boolean",
        })
}

fn array_field<'a>(
    obj: &'a Object,
    node: &'static str,
    name: &'static str,
) -> Result<&'a Vec<Json>, DecodeError> {
    field(obj, node, name)?
        .as_array()
        .ok_or(DecodeError::InvalidField {
            node,
            field: name,
            expected: "an array",
        })
}

fn offset(obj: &Object, name: &'static str) -> Result<u32, DecodeError> {
    field(obj, "Location", name)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(DecodeError::InvalidField {
            node: "Location",
            field: name,
            expected: "an offset between 0 and 4294967295",
        })
}

fn integer(json: &Json) -> Result<BigInt, DecodeError> {
    match json {
        Json::Number(n) => number_to_bigint(n),
        other => Err(DecodeError::InvalidInteger(other.to_string())),
    }
}

/// With `arbitrary_precision`, a `Number` renders as the literal text from
/// the document, so integers of any magnitude round-trip exactly.
fn number_to_bigint(n: &Number) -> Result<BigInt, DecodeError> {
    let text = n.to_string();
    BigInt::from_str(&text).map_err(|_| DecodeError::InvalidInteger(text))
}
