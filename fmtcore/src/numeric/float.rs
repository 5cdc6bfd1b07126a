//! Correctly-rounded floating point formatting (`~e ~f ~g`, `spec.md` §4.4).
//!
//! Mirrors the shape of the teacher's `Decimal<T>` digit walk in
//! `clformat/src/decimal.rs`, but starts from Rust's own round-trip-correct
//! `{:e}` formatter rather than hand-rolled digit extraction, since std
//! already guarantees shortest-round-trip decimal digits for every `f64`.

use crate::error::ErrorKind;

/// A float's sign and significant decimal digits, as `0.d0 d1 d2 ... * 10^(exponent+1)`.
///
/// `digits[0]` is always the most significant (non-zero, unless the value
/// is exactly zero) digit, sitting at decimal position `10^exponent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposed {
    pub negative: bool,
    pub digits: Vec<u8>,
    pub exponent: i32,
}

/// Decompose `x` into sign, significant digits, and the power of ten of the
/// leading digit. Negative zero keeps its sign bit (`spec.md` scenario 6).
pub fn float_decompose(x: f64) -> Decomposed {
    let negative = x.is_sign_negative();
    if x == 0.0 {
        return Decomposed {
            negative,
            digits: vec![0],
            exponent: 0,
        };
    }
    let rendered = format!("{:e}", x.abs());
    let (mantissa, exp_str) = rendered
        .split_once('e')
        .expect("std's `{:e}` formatter always emits an exponent");
    let exponent: i32 = exp_str
        .parse()
        .expect("std's `{:e}` exponent is always a plain integer");
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(|&b| b != b'.')
        .map(|b| b - b'0')
        .collect();
    Decomposed {
        negative,
        digits,
        exponent,
    }
}

/// Round `digits` (most significant first) to `precision` digits, applying
/// round-half-up and propagating the carry leftward.
///
/// Returns `(rounded, carried)`. When the carry escapes the leading digit
/// (every kept digit was a `9`), `rounded` grows to `precision + 1` digits
/// with a new leading `1` and `carried` is `true` — the caller is
/// responsible for deciding whether that extra digit shifts the exponent
/// and/or gets trimmed back off, since the two call sites (`~e`'s fixed
/// significant-digit count and `~f`'s position-anchored fractional count)
/// need different answers to that question.
pub fn round_digits(digits: &[u8], precision: usize) -> (Vec<u8>, bool) {
    if digits.len() <= precision {
        let mut out = digits.to_vec();
        out.resize(precision, 0);
        return (out, false);
    }
    let mut out = digits[..precision].to_vec();
    let round_up = digits[precision] >= 5;
    if !round_up {
        return (out, false);
    }
    let mut i = out.len();
    while i > 0 {
        i -= 1;
        if out[i] == 9 {
            out[i] = 0;
        } else {
            out[i] += 1;
            return (out, false);
        }
    }
    out.insert(0, 1);
    (out, true)
}

fn format_exponent(sign: &str, lead: &str, frac: &str, exponent: i32) -> String {
    let exp_sign = if exponent >= 0 { "+" } else { "-" };
    format!("{sign}{lead}.{frac}e{exp_sign}{}", exponent.abs())
}

fn render_e_digits(x: f64, precision: usize) -> String {
    let d = float_decompose(x);
    let (mut mantissa, carried) = round_digits(&d.digits, precision);
    let exponent = if carried {
        mantissa.truncate(precision);
        d.exponent + 1
    } else {
        d.exponent
    };
    let digit_chars: String = mantissa.iter().map(|b| (b'0' + b) as char).collect();
    let (lead, frac) = digit_chars.split_at(1);
    let sign = if d.negative { "-" } else { "" };
    format_exponent(sign, lead, frac, exponent)
}

fn render_f_digits(x: f64, precision: usize) -> String {
    let d = float_decompose(x);
    let wanted = d.exponent + precision as i32 + 1;
    let (digits, top_exp) = if wanted < 0 {
        (Vec::new(), d.exponent)
    } else {
        let (rounded, carried) = round_digits(&d.digits, wanted as usize);
        let top_exp = if carried { d.exponent + 1 } else { d.exponent };
        (rounded, top_exp)
    };
    let get = |pos: i32| -> u8 {
        let idx = top_exp - pos;
        if idx < 0 {
            return 0;
        }
        digits.get(idx as usize).copied().unwrap_or(0)
    };
    let mut int_part = String::new();
    if top_exp < 0 {
        int_part.push('0');
    } else {
        for pos in (0..=top_exp).rev() {
            int_part.push((b'0' + get(pos)) as char);
        }
    }
    let mut frac_part = String::new();
    for pos in 1..=precision as i32 {
        frac_part.push((b'0' + get(-pos)) as char);
    }
    let sign = if d.negative { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}

/// `~e`: scientific notation with `precision` significant digits
/// (`precision - 1` fractional digits). Requires `precision >= 2`.
pub fn render_e(x: f64, precision: usize) -> Result<String, ErrorKind> {
    if precision < 2 {
        return Err(ErrorKind::BadPrecision);
    }
    Ok(render_e_digits(x, precision))
}

/// `~f`: fixed-point notation with exactly `precision` fractional digits.
/// Requires `precision >= 1`.
pub fn render_f(x: f64, precision: usize) -> Result<String, ErrorKind> {
    if precision < 1 {
        return Err(ErrorKind::BadPrecision);
    }
    Ok(render_f_digits(x, precision))
}

/// `~g`: fixed-point when the magnitude is within range of `precision`,
/// scientific otherwise. Requires `precision >= 1`.
pub fn render_g(x: f64, precision: usize) -> Result<String, ErrorKind> {
    if precision < 1 {
        return Err(ErrorKind::BadPrecision);
    }
    let d = float_decompose(x);
    let e = d.exponent;
    if e >= -1 && e <= precision as i32 - 1 {
        let frac_precision = (precision as i32 - 1 - e).max(0) as usize;
        Ok(render_f_digits(x, frac_precision))
    } else {
        Ok(render_e_digits(x, precision.max(2)))
    }
}
