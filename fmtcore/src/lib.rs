//! A format-directed text-rendering engine: given a format string and a
//! positional argument list, produces rendered text under a two-pass
//! budget-aware renderer.
//!
//! The engine is purely functional: a render call holds no mutable shared
//! state, performs no I/O, and never blocks. Pretty-printing of compound
//! terms and generic term-to-text conversion are deliberately out of
//! scope — callers plug those in through [`TermWriter`] and
//! [`PrettyPrinter`] (the crate ships `Debug`-based defaults so the engine
//! is usable without one). For the same reason the crate does no logging
//! of its own: it has nothing to log beyond the single pure computation
//! its public functions already return a `Result` for.

pub mod collab;
pub mod directive;
pub mod error;
pub mod numeric;
pub mod parser;
pub mod render;
pub mod text;
pub mod unparse;
pub mod value;

use std::borrow::Cow;

pub use collab::{DebugPrettyPrinter, DebugTermWriter, PrettyOpts, PrettyPrinter, TermWriter};
pub use directive::{Adjust, ControlChar, Directive, Encoding, MapsOrder, Token};
pub use error::{ErrorKind, FormatError};
pub use value::Value;

/// Render options (`spec.md` §6.1). The only knob is `chars_limit`: the
/// cap on total user-visible characters in the output, shared across the
/// big (`~s ~w ~W ~p ~P`) directives. `-1` means unlimited.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub chars_limit: i64,
}

impl Default for Options {
    fn default() -> Self {
        Options { chars_limit: -1 }
    }
}

/// A format string, accepted either as text or as a raw byte sequence
/// (`spec.md` §4.1: "accepts symbolic name, byte sequence, or code-point
/// sequence"). Byte input is normalised to text: valid UTF-8 decodes as
/// Unicode, anything else is reinterpreted code point by code point as
/// Latin-1, matching the same fallback the engine uses for `~ts` binaries
/// that turn out not to be valid Unicode (`spec.md` §4.6).
#[derive(Debug, Clone, Copy)]
pub enum FormatArg<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> FormatArg<'a> {
    fn normalize(self) -> Cow<'a, str> {
        match self {
            FormatArg::Str(s) => Cow::Borrowed(s),
            FormatArg::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => Cow::Borrowed(s),
                Err(_) => Cow::Owned(b.iter().map(|&byte| byte as char).collect()),
            },
        }
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(s: &'a str) -> Self {
        FormatArg::Str(s)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(s: &'a String) -> Self {
        FormatArg::Str(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for FormatArg<'a> {
    fn from(b: &'a [u8]) -> Self {
        FormatArg::Bytes(b)
    }
}

/// Tokenise `fmt` against `args` (`spec.md` §2, §4.1).
pub fn parse<'a>(fmt: impl Into<FormatArg<'a>>, args: &[Value]) -> Result<Vec<Token>, FormatError> {
    let text = fmt.into().normalize();
    parser::parse(&text, args)
}

/// Reconstruct a format string and its flattened argument list from a
/// token sequence (`spec.md` §4.2).
pub fn unparse(tokens: &[Token]) -> (String, Vec<Value>) {
    (unparse::format_string(tokens), unparse::arguments(tokens))
}

/// Advance a terminal column counter through `text` (`spec.md` §4.5).
pub fn indent_column(text: &str, start: usize) -> usize {
    self::text::indent_column(text, start)
}

/// Render `fmt` against `args` to a character string, using the default
/// (`Debug`-based) term writer and pretty-printer and unlimited output.
pub fn render_chars<'a>(fmt: impl Into<FormatArg<'a>>, args: &[Value]) -> Result<String, FormatError> {
    render_chars_with(
        fmt,
        args,
        Options::default(),
        &DebugTermWriter,
        &DebugPrettyPrinter,
    )
}

/// As [`render_chars`], with explicit [`Options`].
pub fn render_chars_opts<'a>(
    fmt: impl Into<FormatArg<'a>>,
    args: &[Value],
    options: Options,
) -> Result<String, FormatError> {
    render_chars_with(fmt, args, options, &DebugTermWriter, &DebugPrettyPrinter)
}

/// As [`render_chars`], with caller-supplied term writer and
/// pretty-printer collaborators for `~w`/`~W`/`~p`/`~P`.
pub fn render_chars_with<'a>(
    fmt: impl Into<FormatArg<'a>>,
    args: &[Value],
    options: Options,
    term_writer: &dyn TermWriter,
    pretty_printer: &dyn PrettyPrinter,
) -> Result<String, FormatError> {
    let text = fmt.into().normalize();
    let tokens = parser::parse(&text, args)?;
    render::render(&tokens, options.chars_limit, term_writer, pretty_printer)
}

/// Render `fmt` against `args` to a UTF-8 byte sequence. Carries the same
/// user-visible text as [`render_chars`] (`spec.md` §6.3).
pub fn render_bytes<'a>(fmt: impl Into<FormatArg<'a>>, args: &[Value]) -> Result<Vec<u8>, FormatError> {
    render_chars(fmt, args).map(String::into_bytes)
}

/// As [`render_bytes`], with explicit [`Options`].
pub fn render_bytes_opts<'a>(
    fmt: impl Into<FormatArg<'a>>,
    args: &[Value],
    options: Options,
) -> Result<Vec<u8>, FormatError> {
    render_chars_opts(fmt, args, options).map(String::into_bytes)
}

/// As [`render_bytes`], with caller-supplied collaborators.
pub fn render_bytes_with<'a>(
    fmt: impl Into<FormatArg<'a>>,
    args: &[Value],
    options: Options,
    term_writer: &dyn TermWriter,
    pretty_printer: &dyn PrettyPrinter,
) -> Result<Vec<u8>, FormatError> {
    render_chars_with(fmt, args, options, term_writer, pretty_printer).map(String::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_1_interleaved_literals_and_directives() {
        assert_eq!(
            render_chars("~w+~w=~w", &[Value::Int(2), Value::Int(3), Value::Int(5)]).unwrap(),
            "2+3=5"
        );
    }

    #[test]
    fn scenario_3_left_adjusted_width() {
        assert_eq!(
            render_chars("~-10s!", &[Value::from("hi")]).unwrap(),
            "hi        !"
        );
    }

    #[test]
    fn scenario_4_fixed_point_precision() {
        assert_eq!(render_chars("~.3f", &[Value::Float(3.14159)]).unwrap(), "3.142");
    }

    #[test]
    fn scenario_5_scientific_notation() {
        assert_eq!(render_chars("~e", &[Value::Float(0.000123)]).unwrap(), "1.23000e-4");
    }

    #[test]
    fn scenario_6_unicode_string_grapheme_length() {
        let out = render_chars("~ts", &[Value::from("café")]).unwrap();
        assert_eq!(out, "café");
        assert_eq!(text::char_count(&out, Encoding::Unicode), 4);
    }

    #[test]
    fn scenario_7_chars_limit_exact_fit() {
        let out = render_chars_opts(
            "~s",
            &[Value::from("ok")],
            Options { chars_limit: 2 },
        )
        .unwrap();
        assert_eq!(out, "ok");
    }

    #[test]
    fn scenario_9_tab_then_letters() {
        assert_eq!(indent_column("\tabc", 0), 11);
    }

    #[test]
    fn bytes_and_chars_agree() {
        let chars = render_chars("~w", &[Value::Int(42)]).unwrap();
        let bytes = render_bytes("~w", &[Value::Int(42)]).unwrap();
        assert_eq!(chars.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn byte_format_string_is_accepted() {
        let out = render_chars(b"~w" as &[u8], &[Value::Int(7)]).unwrap();
        assert_eq!(out, "7");
    }
}
