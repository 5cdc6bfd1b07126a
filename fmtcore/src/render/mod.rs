//! Two-pass renderer (`spec.md` §4.3, §9 "two-pass vs streaming").
//!
//! A first pass ([`small`]) renders every small (bounded-size) directive
//! immediately and tallies how many big (unbounded) directives remain; a
//! second pass ([`big`]) renders those under a per-directive share of the
//! `chars_limit` budget. Splitting this way, rather than streaming, is
//! required because the per-directive budget depends on having counted
//! every big directive up front.

pub mod big;
pub mod small;

use crate::collab::{PrettyPrinter, TermWriter};
use crate::directive::{Adjust, Encoding, Token};
use crate::error::FormatError;

/// How an oversized payload signals truncation when both width and
/// precision are given and the raw output exceeds the precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Replace the payload with a run of `*` (`~w`/`~W` and the integer
    /// and term-writer forms).
    Stars,
    /// Slice the payload down to the precision (`~s`).
    Slice,
}

/// Pad `payload` out to `width` with `pad_char`, in the direction `adjust`
/// says. Does nothing if `payload` already meets or exceeds `width`.
pub fn apply_field_width(
    payload: &str,
    width: Option<i64>,
    pad_char: char,
    adjust: Adjust,
    encoding: Encoding,
) -> String {
    let Some(w) = width else {
        return payload.to_string();
    };
    let w = w.max(0) as usize;
    let len = crate::text::char_count(payload, encoding);
    if len >= w {
        return payload.to_string();
    }
    let pad = crate::text::padding(pad_char, w - len);
    crate::text::adjust(payload, &pad, adjust)
}

fn normalize_to_precision(
    payload: &str,
    precision: i64,
    pad_char: char,
    encoding: Encoding,
    overflow: Overflow,
) -> String {
    let p = precision.max(0) as usize;
    let len = crate::text::char_count(payload, encoding);
    if len == p {
        return payload.to_string();
    }
    if len < p {
        let pad = crate::text::padding(pad_char, p - len);
        return crate::text::adjust(payload, &pad, Adjust::Left);
    }
    match overflow {
        Overflow::Stars => crate::text::padding('*', p),
        Overflow::Slice => crate::text::truncate_to(payload, p, encoding),
    }
}

/// Full field adjustment: width and precision both apply, precision first
/// (always left-adjusted, per `spec.md` §4.3), then width.
pub fn apply_field_full(
    payload: &str,
    width: Option<i64>,
    precision: Option<i64>,
    pad_char: char,
    adjust: Adjust,
    encoding: Encoding,
    overflow: Overflow,
) -> String {
    match (width, precision) {
        (None, None) => payload.to_string(),
        (Some(_), None) => apply_field_width(payload, width, pad_char, adjust, encoding),
        (None, Some(p)) => normalize_to_precision(payload, p, pad_char, encoding, overflow),
        (Some(_), Some(p)) => {
            let normalized = normalize_to_precision(payload, p, pad_char, encoding, overflow);
            apply_field_width(&normalized, width, pad_char, adjust, encoding)
        }
    }
}

/// Render a parsed directive/literal sequence to text.
///
/// `chars_limit < 0` means unlimited; `chars_limit >= 0` bounds the total
/// user-visible character count of the result, truncating big-directive
/// output with an ellipsis as needed.
pub fn render(
    tokens: &[Token],
    chars_limit: i64,
    term_writer: &dyn TermWriter,
    pretty_printer: &dyn PrettyPrinter,
) -> Result<String, FormatError> {
    let (pieces, counters) = small::build_small(tokens)?;
    big::build_limited(pieces, &counters, chars_limit, term_writer, pretty_printer)
}
