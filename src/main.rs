use fmtcore::{render_chars, render_chars_opts, Options, Value};

fn main() {
    let greeting = render_chars(
        "Hello ~s, you are visitor number ~6.2.0b (base 2).",
        &[Value::from("there"), Value::Int(3)],
    )
    .expect("format string is well-formed");
    println!("{greeting}");

    let pi = render_chars("pi to 3 decimals: ~.3f", &[Value::Float(3.14159)]).unwrap();
    println!("{pi}");

    let truncated = render_chars_opts(
        "~p",
        &[Value::List((0..50).map(Value::Int).collect())],
        Options { chars_limit: 16 },
    )
    .unwrap();
    println!("{truncated}");
}
