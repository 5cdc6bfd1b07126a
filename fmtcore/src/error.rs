//! Public error type for the engine.
//!
//! Parser errors are fatal: there is no partial output on a `FormatError`.
//! Render-time failures that the spec calls out as recoverable (mis-encoded
//! `~ts` binaries) are handled locally and never surface as a `FormatError`.

use thiserror::Error;

/// What went wrong while parsing or rendering a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognised control character, or a directive the scanner could
    /// not make sense of.
    BadFormat(String),
    /// The argument list was exhausted before a directive that needed one.
    MissingArg,
    /// An argument was the wrong type for the position it was consumed at
    /// (e.g. a non-integer where `*` needs an integer).
    BadArgType {
        expected: &'static str,
        got: &'static str,
    },
    /// An `~e`/`~f`/`~g` precision was out of the allowed range.
    BadPrecision,
    /// A `~b`/`~B`/`~x`/`~X` base (via precision) was outside 2..=36.
    BadBase,
}

/// A failed parse or render, with the code-point position in the format
/// string at which the engine gave up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("format error at position {position}: {kind}")]
pub struct FormatError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl FormatError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::BadFormat(msg) => write!(f, "bad format: {msg}"),
            ErrorKind::MissingArg => write!(f, "missing argument"),
            ErrorKind::BadArgType { expected, got } => {
                write!(f, "expected {expected} argument, got {got}")
            }
            ErrorKind::BadPrecision => write!(f, "precision out of range"),
            ErrorKind::BadBase => write!(f, "base out of range (2..=36)"),
        }
    }
}
