//! Second pass: render the big directives under a per-directive share of
//! the `chars_limit` budget, tracking the running indent column
//! (`spec.md` §4.3 "Second pass").

use super::small::{Counters, Piece};
use super::{apply_field_full, Overflow};
use crate::collab::{PrettyOpts, PrettyPrinter, TermWriter};
use crate::directive::{ControlChar, Directive, Encoding};
use crate::error::{ErrorKind, FormatError};
use crate::value::Value;

/// Default line length handed to the pretty-printer when wrapping `~p`/`~P`
/// output. The engine itself never wraps text; this is only a hint a real
/// pretty-printer collaborator may use.
const DEFAULT_LINE_LENGTH: usize = 80;

pub fn build_limited(
    pieces: Vec<Piece>,
    counters: &Counters,
    chars_limit: i64,
    term_writer: &dyn TermWriter,
    pretty_printer: &dyn PrettyPrinter,
) -> Result<String, FormatError> {
    let mut remaining: i64 = if chars_limit >= 0 {
        (chars_limit - counters.other as i64).max(0)
    } else {
        -1
    };
    let mut count = (counters.p + counters.w) as i64;
    let mut indent: usize = 0;
    let mut out = String::new();

    for piece in pieces {
        match piece {
            Piece::Text(text) => {
                indent = crate::text::indent_column(&text, indent);
                out.push_str(&text);
            }
            Piece::Big(d) => {
                let budget = if remaining < 0 {
                    -1
                } else if count <= 0 {
                    remaining
                } else {
                    remaining / count
                };
                let rendered =
                    render_big_directive(&d, budget, indent, term_writer, pretty_printer)?;
                let len = crate::text::char_count(&rendered, d.encoding) as i64;
                if remaining >= 0 {
                    remaining = (remaining - len).max(0);
                }
                count -= 1;
                if matches!(d.control_char, ControlChar::P | ControlChar::UpperP) {
                    indent = crate::text::indent_column(&rendered, indent);
                }
                out.push_str(&rendered);
            }
        }
    }
    Ok(out)
}

fn render_big_directive(
    d: &Directive,
    budget: i64,
    indent: usize,
    term_writer: &dyn TermWriter,
    pretty_printer: &dyn PrettyPrinter,
) -> Result<String, FormatError> {
    let (raw, overflow) = match d.control_char {
        ControlChar::S => (value_as_text(&d.args[0], d.encoding, d.position)?, Overflow::Slice),
        ControlChar::W | ControlChar::UpperW => {
            let depth = depth_arg(d);
            let text = term_writer.write(&d.args[0], depth, d.encoding, &d.maps_order, budget);
            (text, Overflow::Stars)
        }
        ControlChar::P | ControlChar::UpperP => {
            let depth = depth_arg(d);
            let opts = PrettyOpts {
                chars_limit: budget,
                column: indent,
                line_length: DEFAULT_LINE_LENGTH,
                depth,
                encoding: d.encoding,
                strings: d.strings,
            };
            let (text, _column) = pretty_printer.pretty_print(&d.args[0], opts);
            (text, Overflow::Stars)
        }
        other => unreachable!("{other:?} is not a big directive"),
    };

    let field_adjusted = apply_field_full(
        &raw,
        d.width,
        d.precision,
        d.pad_char,
        d.adjust,
        d.encoding,
        overflow,
    );

    Ok(if budget < 0 {
        field_adjusted
    } else {
        crate::text::ellipsise(&field_adjusted, budget.max(0) as usize, d.encoding)
    })
}

fn depth_arg(d: &Directive) -> Option<usize> {
    d.args.get(1).and_then(Value::as_int).map(|n| n.max(0) as usize)
}

fn value_as_text(v: &Value, encoding: Encoding, position: usize) -> Result<String, FormatError> {
    match v {
        Value::Str(s) => Ok(s.clone()),
        Value::Char(c) => Ok(c.to_string()),
        Value::Bytes(b) => Ok(decode_bytes(b, encoding)),
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Char(c) => Ok(*c),
                Value::Int(n) => char::from_u32(*n as u32)
                    .ok_or_else(|| FormatError::new(ErrorKind::BadFormat("invalid code point".to_string()), position)),
                other => Err(FormatError::new(
                    ErrorKind::BadArgType {
                        expected: "char",
                        got: other.type_name(),
                    },
                    position,
                )),
            })
            .collect(),
        other => Err(FormatError::new(
            ErrorKind::BadArgType {
                expected: "character data",
                got: other.type_name(),
            },
            position,
        )),
    }
}

/// Decode a byte sequence as UTF-8, falling back to Latin-1 interpretation
/// on invalid Unicode rather than failing the whole render
/// (`spec.md` §4.6: this is observed, preserved behaviour for `~ts`).
fn decode_bytes(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Unicode => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        },
        Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{DebugPrettyPrinter, DebugTermWriter};
    use crate::parser::parse;
    use crate::render::small::build_small;

    fn render(fmt: &str, args: &[Value], chars_limit: i64) -> String {
        let tokens = parse(fmt, args).unwrap();
        let (pieces, counters) = build_small(&tokens).unwrap();
        build_limited(
            pieces,
            &counters,
            chars_limit,
            &DebugTermWriter,
            &DebugPrettyPrinter,
        )
        .unwrap()
    }

    #[test]
    fn plain_string_round_trips() {
        assert_eq!(render("~s", &[Value::from("ok")], -1), "ok");
    }

    #[test]
    fn chars_limit_truncates_big_directive() {
        let out = render("~s", &[Value::from("ok")], 2);
        assert_eq!(out, "ok");
    }

    #[test]
    fn left_adjusted_width_pads_after() {
        assert_eq!(render("~-10s!", &[Value::from("hi")], -1), "hi        !");
    }

    #[test]
    fn pretty_printed_large_list_is_ellipsised() {
        let items: Vec<Value> = (0..50).map(Value::Int).collect();
        let out = render("~p", &[Value::List(items)], 10);
        assert!(out.ends_with("..."));
        assert!(crate::text::char_count(&out, Encoding::Unicode) <= 10);
    }
}
