//! Decodes a sample NewOrderSingle and prints the annotated fields.
//!
//! Run with `cargo run --example decode_order`. Pass raw FIX text as the
//! first argument to decode your own message; `|` and `^A` delimiters are
//! accepted.

use fixlens::prelude::*;

const SAMPLE: &str = "8=FIX.4.4|9=178|35=D|49=SENDER|56=TARGET|34=1|52=20230101-10:30:00|\
                      11=ORDER123|21=1|55=MSFT|54=1|38=100|40=2|44=150.50|59=0|10=123";

fn main() {
    init_logging();

    let raw = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_string());
    let engine = DecodeEngine::new();
    let message = engine.decode(&raw);

    if let Some(error) = &message.error {
        eprintln!("decode failed: {error}");
        return;
    }

    for field in &message.fields {
        let meaning = if field.semantic_value.is_empty() {
            String::new()
        } else {
            format!(" ({})", field.semantic_value)
        };
        println!("{:>8}  {:<20} {}{}", field.tag, field.name, field.raw_value, meaning);
    }
}

/// Initializes logging for examples.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
