//! Inverse of the parser (`spec.md` §4.2): reconstructs a format string and
//! argument list from a directive/literal token sequence.
//!
//! The round trip is structural, not byte-identical — `*`-consumed
//! width/precision/pad values are always written back out as literal
//! digits/characters, never as `*`, so reparsing the reconstructed string
//! never needs to pull an argument for them.

use crate::directive::{Adjust, Encoding, MapsOrder, Token};
use crate::value::Value;

/// Reconstruct the format string `tokens` would have been parsed from.
pub fn format_string(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(c) => out.push(*c),
            Token::Directive(d) => {
                out.push('~');
                if d.adjust == Adjust::Left {
                    out.push('-');
                }
                if let Some(w) = d.width {
                    out.push_str(&w.to_string());
                }
                let needs_pad_dot = d.pad_char != ' ';
                match d.precision {
                    Some(p) => {
                        out.push('.');
                        out.push_str(&p.to_string());
                    }
                    None if needs_pad_dot => out.push('.'),
                    None => {}
                }
                if needs_pad_dot {
                    out.push('.');
                    out.push(d.pad_char);
                }
                if d.encoding == Encoding::Unicode {
                    out.push('t');
                }
                if !d.strings {
                    out.push('l');
                }
                match &d.maps_order {
                    MapsOrder::Ordered => out.push('k'),
                    MapsOrder::Reversed | MapsOrder::Comparator(_) => out.push('K'),
                    MapsOrder::Undefined => {}
                }
                out.push(d.control_char.to_char());
            }
        }
    }
    out
}

/// Concatenate every directive's consumed arguments back into a flat list,
/// in the order `parse` would consume them: a reinserted comparator first
/// for `~K` directives, then the control char's own payload.
pub fn arguments(tokens: &[Token]) -> Vec<Value> {
    let mut out = Vec::new();
    for token in tokens {
        if let Token::Directive(d) = token {
            if let MapsOrder::Comparator(cmp) = &d.maps_order {
                out.push((**cmp).clone());
            }
            out.extend(d.args.iter().cloned());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn round_trips_a_simple_directive() {
        let tokens = parse("~w+~w=~w", &[Value::Int(2), Value::Int(3), Value::Int(5)]).unwrap();
        let fmt = format_string(&tokens);
        let args = arguments(&tokens);
        let reparsed = parse(&fmt, &args).unwrap();
        assert_eq!(reparsed, tokens);
    }

    #[test]
    fn normalises_star_params_to_literals() {
        let tokens = parse("~*s", &[Value::Int(-10), Value::from("hi")]).unwrap();
        let fmt = format_string(&tokens);
        assert_eq!(fmt, "~-10s");
    }

    #[test]
    fn round_trips_width_precision_and_pad() {
        let tokens = parse("~6.2.0b", &[Value::Int(3)]).unwrap();
        let fmt = format_string(&tokens);
        assert_eq!(fmt, "~6.2.0b");
        let args = arguments(&tokens);
        let reparsed = parse(&fmt, &args).unwrap();
        assert_eq!(reparsed, tokens);
    }
}
