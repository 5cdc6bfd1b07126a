//! External collaborator contracts for `~w ~W ~p ~P` (`spec.md` §6.4).
//!
//! Pretty-printing and generic term-to-text conversion are explicitly out
//! of scope for this crate (`spec.md` §1); it only defines the interface a
//! host application's real pretty-printer and term writer plug into. The
//! `Debug*` types below are a usable-out-of-the-box default, not a
//! substitute for a real implementation.

use crate::directive::{Encoding, MapsOrder};
use crate::value::Value;

/// Parameters threaded into a [`PrettyPrinter`] call.
#[derive(Debug, Clone, Copy)]
pub struct PrettyOpts {
    /// Remaining character budget for this directive (`-1` = unlimited).
    pub chars_limit: i64,
    pub column: usize,
    pub line_length: usize,
    pub depth: Option<usize>,
    pub encoding: Encoding,
    pub strings: bool,
}

/// Generic term-to-text conversion for `~w`/`~W`.
pub trait TermWriter {
    /// Render `term` as text, stopping structural expansion at `depth`
    /// levels of nesting (`None` = unlimited, as for plain `~w`).
    fn write(
        &self,
        term: &Value,
        depth: Option<usize>,
        encoding: Encoding,
        maps_order: &MapsOrder,
        chars_limit: i64,
    ) -> String;
}

/// Layout-aware pretty-printing for `~p`/`~P`. Returns the rendered text
/// together with the output column it ends at, so the caller can seed the
/// next directive's indentation.
pub trait PrettyPrinter {
    fn pretty_print(&self, term: &Value, opts: PrettyOpts) -> (String, usize);
}

/// Default [`TermWriter`] built from `Debug`-equivalent rendering of
/// [`Value`]. Depth limits collapse nested [`Value::List`]s to `...` once
/// exceeded; everything else ignores `maps_order` and `chars_limit`
/// (callers needing real budget-aware writing should bring their own).
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugTermWriter;

impl TermWriter for DebugTermWriter {
    fn write(
        &self,
        term: &Value,
        depth: Option<usize>,
        encoding: Encoding,
        _maps_order: &MapsOrder,
        _chars_limit: i64,
    ) -> String {
        write_plain_depth(term, depth, encoding)
    }
}

/// Default [`PrettyPrinter`]: renders with [`DebugTermWriter`] and reports
/// the resulting column via [`crate::text::indent_column`]. It performs no
/// actual line wrapping — a real pretty-printer is expected to use
/// `opts.line_length` to break long terms across lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugPrettyPrinter;

impl PrettyPrinter for DebugPrettyPrinter {
    fn pretty_print(&self, term: &Value, opts: PrettyOpts) -> (String, usize) {
        let text = write_plain_depth(term, opts.depth, opts.encoding);
        let column = crate::text::indent_column(&text, opts.column);
        (text, column)
    }
}

/// Render a [`Value`] as plain debug text, with no depth limit.
pub fn write_plain(value: &Value, encoding: Encoding) -> String {
    write_plain_depth(value, None, encoding)
}

/// Render a [`Value`] as plain debug text, collapsing nested lists past
/// `depth` levels to `"..."`.
pub fn write_plain_depth(value: &Value, depth: Option<usize>, encoding: Encoding) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Char(c) => c.to_string(),
        Value::Str(s) => format!("{s:?}"),
        Value::Bytes(b) => format!("{b:?}"),
        Value::List(items) => {
            if depth == Some(0) {
                return "...".to_string();
            }
            let next_depth = depth.map(|d| d - 1);
            let rendered: Vec<String> = items
                .iter()
                .map(|v| write_plain_depth(v, next_depth, encoding))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Term(t) => format!("{t:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_writer_renders_scalars() {
        let w = DebugTermWriter;
        let out = w.write(&Value::Int(5), None, Encoding::Unicode, &MapsOrder::Undefined, -1);
        assert_eq!(out, "5");
    }

    #[test]
    fn depth_limit_collapses_nested_lists() {
        let nested = Value::List(vec![Value::List(vec![Value::Int(1)])]);
        assert_eq!(write_plain_depth(&nested, Some(1), Encoding::Unicode), "[...]");
        assert_eq!(write_plain_depth(&nested, None, Encoding::Unicode), "[[1]]");
    }
}
