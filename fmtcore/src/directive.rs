//! The directive data model (`spec.md` §3).
//!
//! A parsed format string is a `Vec<Token>`: literal code points interleaved
//! with fully-parsed `Directive` records. This mirrors the teacher's
//! `Directive` enum in `clformat-macro/src/parse.rs`, generalized from a
//! closed Common-Lisp-flavoured alphabet to the wider, parameterised
//! alphabet this engine supports.

use crate::Value;

/// Field adjustment: which side padding goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Left,
    Right,
}

/// Output text encoding for `~s`/`~w`/`~p` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Latin1,
    Unicode,
}

/// How `~k`/`~K` want a term writer to order map keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapsOrder {
    Undefined,
    Ordered,
    Reversed,
    /// An arbitrary comparator token consumed from the argument list by `~K`.
    Comparator(Box<Value>),
}

impl Default for MapsOrder {
    fn default() -> Self {
        MapsOrder::Undefined
    }
}

/// The fixed alphabet of control characters (`spec.md` §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChar {
    W,
    P,
    UpperW,
    UpperP,
    S,
    E,
    F,
    G,
    B,
    UpperB,
    X,
    UpperX,
    Plus,
    Hash,
    C,
    Tilde,
    N,
    I,
}

impl ControlChar {
    /// Whether this control char's output is bounded purely by its own
    /// arguments ("small") or can be unbounded and must share the
    /// chars-limit budget ("big").
    pub fn is_big(self) -> bool {
        matches!(
            self,
            ControlChar::S
                | ControlChar::W
                | ControlChar::UpperW
                | ControlChar::P
                | ControlChar::UpperP
        )
    }

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'w' => ControlChar::W,
            'p' => ControlChar::P,
            'W' => ControlChar::UpperW,
            'P' => ControlChar::UpperP,
            's' => ControlChar::S,
            'e' => ControlChar::E,
            'f' => ControlChar::F,
            'g' => ControlChar::G,
            'b' => ControlChar::B,
            'B' => ControlChar::UpperB,
            'x' => ControlChar::X,
            'X' => ControlChar::UpperX,
            '+' => ControlChar::Plus,
            '#' => ControlChar::Hash,
            'c' => ControlChar::C,
            '~' => ControlChar::Tilde,
            'n' => ControlChar::N,
            'i' => ControlChar::I,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        match self {
            ControlChar::W => 'w',
            ControlChar::P => 'p',
            ControlChar::UpperW => 'W',
            ControlChar::UpperP => 'P',
            ControlChar::S => 's',
            ControlChar::E => 'e',
            ControlChar::F => 'f',
            ControlChar::G => 'g',
            ControlChar::B => 'b',
            ControlChar::UpperB => 'B',
            ControlChar::X => 'x',
            ControlChar::UpperX => 'X',
            ControlChar::Plus => '+',
            ControlChar::Hash => '#',
            ControlChar::C => 'c',
            ControlChar::Tilde => '~',
            ControlChar::N => 'n',
            ControlChar::I => 'i',
        }
    }
}

/// A fully parsed `~...` directive.
///
/// `*`-consumption happens during parsing, not rendering: by the time a
/// `Directive` exists, `width`/`precision`/`pad_char` already hold their
/// resolved literal values (or `None`/the default space), so the render
/// pass never needs to know whether a value came from the format string
/// text or from an argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Code-point index of the directive's leading `~` in the source
    /// format string, carried through to render time so numeric-formatter
    /// failures (bad base, bad precision) can still report a position.
    pub position: usize,
    pub control_char: ControlChar,
    pub width: Option<i64>,
    pub adjust: Adjust,
    pub precision: Option<i64>,
    pub pad_char: char,
    pub encoding: Encoding,
    pub strings: bool,
    pub maps_order: MapsOrder,
    pub args: Vec<Value>,
}

/// An element of a parsed format string: a literal code point, or a fully
/// parsed directive. Grounded in `uutils-coreutils`'s `FormatItem<C>`
/// (`Spec` vs `Char`) and the design note in `spec.md` §9 recommending a
/// tagged sum iterated with an index rather than recursion.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Literal(char),
    Directive(Directive),
}
