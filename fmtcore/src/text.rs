//! Text utilities: column/tab accounting, grapheme length, padding,
//! truncation, case fold (`spec.md` §4.5).

use crate::directive::{Adjust, Encoding};
use unicode_segmentation::UnicodeSegmentation;

const TAB_STOP: usize = 8;

/// Number of user-visible characters in `text` under `encoding`.
///
/// Latin-1 text is counted code point by code point (one code point, one
/// column); Unicode text is counted by grapheme cluster, since that is what
/// a terminal actually advances the cursor by.
pub fn char_count(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Latin1 => text.chars().count(),
        Encoding::Unicode => text.graphemes(true).count(),
    }
}

/// Advance a terminal column counter through `text`, starting at `start`.
///
/// `\n` resets the column to 0, `\t` advances to the next multiple of 8,
/// and any other grapheme cluster advances the column by one.
pub fn indent_column(text: &str, start: usize) -> usize {
    let mut column = start;
    for g in text.graphemes(true) {
        match g {
            "\n" => column = 0,
            "\t" => column = next_tab_stop(column),
            _ => column += 1,
        }
    }
    column
}

fn next_tab_stop(column: usize) -> usize {
    (column / TAB_STOP + 1) * TAB_STOP
}

/// Slice `text` down to at most `n` user-visible characters.
///
/// Under `Latin1` this slices by code point; under `Unicode` it slices by
/// grapheme cluster, so a combining sequence is never split in half.
pub fn truncate_to(text: &str, n: usize, encoding: Encoding) -> String {
    match encoding {
        Encoding::Latin1 => text.chars().take(n).collect(),
        Encoding::Unicode => text.graphemes(true).take(n).collect(),
    }
}

/// If `text` is longer than `limit` user-visible characters, keep the first
/// `limit - 3` and append `"..."`. If trimming down to exactly `limit`
/// leaves a remainder of at most 3 characters, that near-fit is emitted
/// verbatim instead, per `spec.md` §4.5.
pub fn ellipsise(text: &str, limit: usize, encoding: Encoding) -> String {
    let len = char_count(text, encoding);
    if len <= limit {
        return text.to_string();
    }
    if len - limit <= 3 {
        return text.to_string();
    }
    if limit < 3 {
        return truncate_to(text, limit, encoding);
    }
    let mut kept = truncate_to(text, limit - 3, encoding);
    kept.push_str("...");
    kept
}

/// Concatenate `payload` and `padding` in the order the adjustment implies:
/// `[payload, pad]` when left-adjusted, `[pad, payload]` when right-adjusted.
pub fn adjust(payload: &str, padding: &str, side: Adjust) -> String {
    match side {
        Adjust::Left => format!("{payload}{padding}"),
        Adjust::Right => format!("{padding}{payload}"),
    }
}

/// Build a run of `n` copies of `pad_char` for use with [`adjust`].
pub fn padding(pad_char: char, n: usize) -> String {
    std::iter::repeat(pad_char).take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_column_tab_then_letters() {
        assert_eq!(indent_column("\tabc", 0), 11);
    }

    #[test]
    fn indent_column_newline_resets() {
        assert_eq!(indent_column("abc\ndef", 0), 3);
    }

    #[test]
    fn indent_column_multiple_tabs() {
        assert_eq!(indent_column("\t\t", 0), 16);
        assert_eq!(indent_column("a\t", 0), 8);
    }

    #[test]
    fn grapheme_char_count() {
        assert_eq!(char_count("café", Encoding::Unicode), 4);
    }

    #[test]
    fn ellipsise_long_text_gets_dots() {
        assert_eq!(ellipsise("abcdefghij", 5, Encoding::Latin1), "ab...");
    }

    #[test]
    fn ellipsise_near_fit_is_verbatim() {
        // limit=7 would need to cut 2 chars; that's <=3, so no ellipsis.
        assert_eq!(ellipsise("abcdefghi", 7, Encoding::Latin1), "abcdefghi");
    }

    #[test]
    fn ellipsise_short_text_is_untouched() {
        assert_eq!(ellipsise("ok", 10, Encoding::Latin1), "ok");
    }

    #[test]
    fn adjust_left_puts_pad_after() {
        assert_eq!(adjust("hi", "  ", Adjust::Left), "hi  ");
    }

    #[test]
    fn adjust_right_puts_pad_before() {
        assert_eq!(adjust("hi", "  ", Adjust::Right), "  hi");
    }

    proptest::proptest! {
        #[test]
        fn ellipsise_never_overshoots_limit_by_more_than_the_dots(
            text in "[ -~]{0,60}",
            limit in 0usize..30,
        ) {
            let out = ellipsise(&text, limit, Encoding::Latin1);
            proptest::prop_assert!(char_count(&out, Encoding::Latin1) <= limit + 3);
        }
    }
}
