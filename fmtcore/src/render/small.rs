//! First pass: render every small directive in place, leave big directives
//! as placeholders, and tally `Counters` (`spec.md` §4.3 "First pass").

use super::apply_field_width;
use crate::directive::{ControlChar, Directive, Token};
use crate::error::{ErrorKind, FormatError};
use crate::numeric;

/// An element of the first-pass output: either fully rendered text, or a
/// big directive still waiting for its share of the chars-limit budget.
#[derive(Debug, Clone)]
pub enum Piece {
    Text(String),
    Big(Directive),
}

/// Tally of big-directive counts and small-output length, threaded into
/// the second pass (`spec.md` §3 "Counters").
#[derive(Debug, Clone, Copy, Default)]
pub struct Counters {
    /// Number of `~p`/`~P` directives.
    pub p: usize,
    /// Number of `~w`/`~W`/`~s` directives.
    pub w: usize,
    /// Reserved: the source tracks this separately from `w` but never
    /// increments it (`spec.md` §9 open question). Preserved as dead
    /// weight for behavioural parity, not read anywhere.
    #[allow(dead_code)]
    pub s: usize,
    /// Total character length of literals and small-directive output.
    pub other: usize,
}

pub fn build_small(tokens: &[Token]) -> Result<(Vec<Piece>, Counters), FormatError> {
    let mut pieces = Vec::with_capacity(tokens.len());
    let mut counters = Counters::default();
    for token in tokens {
        match token {
            Token::Literal(c) => {
                let mut buf = [0u8; 4];
                pieces.push(Piece::Text(c.encode_utf8(&mut buf).to_string()));
                counters.other += 1;
            }
            Token::Directive(d) => {
                if d.control_char.is_big() {
                    match d.control_char {
                        ControlChar::P | ControlChar::UpperP => counters.p += 1,
                        _ => counters.w += 1,
                    }
                    pieces.push(Piece::Big(d.clone()));
                } else {
                    let text = render_small_directive(d)?;
                    counters.other += crate::text::char_count(&text, d.encoding);
                    pieces.push(Piece::Text(text));
                }
            }
        }
    }
    Ok((pieces, counters))
}

fn render_small_directive(d: &Directive) -> Result<String, FormatError> {
    use ControlChar::*;
    let raw = match d.control_char {
        Tilde => "~".to_string(),
        N => "\n".to_string(),
        I => String::new(),
        C => {
            let c = d.args[0].as_char().expect("parser validated ~c's arg as a char");
            let c = if d.encoding == crate::directive::Encoding::Latin1 {
                char::from_u32((c as u32) & 0xFF).unwrap_or(c)
            } else {
                c
            };
            let count = d.precision.unwrap_or(1).max(0) as usize;
            std::iter::repeat(c).take(count).collect()
        }
        B | UpperB => {
            let n = d.args[0].as_int().expect("parser validated ~b's arg as an int");
            let base = base_param(d)?;
            numeric::render_plain(n, base, d.control_char == UpperB)
        }
        X | UpperX => {
            let n = d.args[0].as_int().expect("parser validated ~x's arg as an int");
            let prefix = match &d.args[1] {
                crate::value::Value::Str(s) => s.clone(),
                _ => unreachable!("parser validated ~x's second arg as a string"),
            };
            let base = base_param(d)?;
            numeric::render_prefixed(n, base, d.control_char == UpperX, &prefix)
        }
        Plus | Hash => {
            let n = d.args[0].as_int().expect("parser validated ~+'s arg as an int");
            let base = base_param(d)?;
            numeric::render_based(n, base, d.control_char == Hash)
        }
        E => {
            let x = d.args[0].as_float().expect("parser validated ~e's arg as a float");
            let precision = d.precision.unwrap_or(6).max(0) as usize;
            numeric::render_e(x, precision).map_err(|kind| FormatError::new(kind, d.position))?
        }
        F => {
            let x = d.args[0].as_float().expect("parser validated ~f's arg as a float");
            let precision = d.precision.unwrap_or(6).max(0) as usize;
            numeric::render_f(x, precision).map_err(|kind| FormatError::new(kind, d.position))?
        }
        G => {
            let x = d.args[0].as_float().expect("parser validated ~g's arg as a float");
            let precision = d.precision.unwrap_or(6).max(0) as usize;
            numeric::render_g(x, precision).map_err(|kind| FormatError::new(kind, d.position))?
        }
        S | W | UpperW | P | UpperP => unreachable!("big directives are handled in the second pass"),
    };
    Ok(apply_field_width(&raw, d.width, d.pad_char, d.adjust, d.encoding))
}

fn base_param(d: &Directive) -> Result<u32, FormatError> {
    let base = d.precision.unwrap_or(10);
    if (2..=36).contains(&base) {
        Ok(base as u32)
    } else {
        Err(FormatError::new(ErrorKind::BadBase, d.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::value::Value;

    #[test]
    fn small_directives_render_immediately() {
        let tokens = parse("~6.2.0b", &[Value::Int(3)]).unwrap();
        let (pieces, counters) = build_small(&tokens).unwrap();
        assert_eq!(pieces.len(), 1);
        match &pieces[0] {
            Piece::Text(s) => assert_eq!(s, "000011"),
            _ => panic!("expected text"),
        }
        assert_eq!(counters.other, 6);
        assert_eq!(counters.w, 0);
        assert_eq!(counters.p, 0);
    }

    #[test]
    fn big_directives_are_deferred() {
        let tokens = parse("~s", &[Value::from("hi")]).unwrap();
        let (pieces, counters) = build_small(&tokens).unwrap();
        assert!(matches!(pieces[0], Piece::Big(_)));
        assert_eq!(counters.w, 1);
    }

    #[test]
    fn out_of_range_base_is_an_error() {
        let tokens = parse("~.1b", &[Value::Int(3)]).unwrap();
        let err = build_small(&tokens).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadBase);
    }

    #[test]
    fn float_precision_defaults_to_six() {
        let tokens = parse("~e", &[Value::Float(0.000123)]).unwrap();
        let (pieces, _) = build_small(&tokens).unwrap();
        match &pieces[0] {
            Piece::Text(s) => assert_eq!(s, "1.23000e-4"),
            _ => panic!("expected text"),
        }
    }
}
