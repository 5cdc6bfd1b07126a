//! The engine's argument type.
//!
//! Directives consume positional arguments of varying shapes: integers for
//! `~b`/`~B`/`~x`/`~X`/`~+`/`~#`/`~c`, floats for `~e`/`~f`/`~g`, character
//! data for `~s`, and opaque terms for `~w`/`~W`/`~p`/`~P` that are handed
//! straight to the term writer / pretty-printer collaborators (`spec.md`
//! §6.4) without this crate ever inspecting their shape.

use std::fmt;
use std::sync::Arc;

/// A positional format argument.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    /// A compound value built from other arguments, for exercising
    /// `~w`/`~p`-style term writers on nested structure without requiring a
    /// caller-supplied term type.
    List(Vec<Value>),
    /// An opaque value passed through to a [`crate::collab::TermWriter`] or
    /// [`crate::collab::PrettyPrinter`]. The engine never inspects it beyond
    /// formatting it with `Debug` in the default collaborator
    /// implementations.
    Term(Arc<dyn fmt::Debug + Send + Sync>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n:?})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bytes(b) => write!(f, "Bytes({b:?})"),
            Value::List(items) => write!(f, "List({items:?})"),
            Value::Term(t) => write!(f, "Term({t:?})"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Opaque terms are compared by debug text; there is no
            // structural equality contract on the collaborator side.
            (Value::Term(a), Value::Term(b)) => format!("{a:?}") == format!("{b:?}"),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Term(_) => "term",
        }
    }
}
