//! Numeric conversion: integer base conversion and correctly-rounded
//! floating point formatting (`spec.md` §4.4).

pub mod float;
pub mod int;

pub use float::{render_e, render_f, render_g};
pub use int::{render_based, render_plain, render_prefixed, to_base, DIGIT_ALPHABET};
