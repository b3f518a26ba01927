//! Relaxing whitespace and bounding nesting with DecodeOptions.
//!
//! Run with: cargo run --example custom_options

use objson::{decode, decode_with_options, DecodeOptions, ErrorKind, Whitespace};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let pretty = b"{\n\t\"name\": \"MyApp\",\n\t\"version\": \"1.0.0\",\n\t\"debug\": true\n}";

    // Default options: only the space character separates tokens
    println!("Default whitespace:");
    match decode(pretty) {
        Ok(map) => println!("  decoded {} fields", map.len()),
        Err(err) => println!("  rejected: {err}"),
    }

    // Json whitespace also skips tab, line feed and carriage return
    println!("Json whitespace:");
    let json = DecodeOptions::new().with_whitespace(Whitespace::Json);
    let map = decode_with_options(pretty, json)?;
    println!("  decoded {} fields\n", map.len());

    // Bound recursion before decoding untrusted input
    println!("Depth limit of 8:");
    let guarded = json.with_max_depth(8);
    let hostile = format!("{{\"k\": {}", "[".repeat(100_000));
    match decode_with_options(hostile.as_bytes(), guarded) {
        Err(err) if err.kind() == (ErrorKind::DepthLimitExceeded { limit: 8 }) => {
            println!("  stopped at offset {}", err.offset());
        }
        other => println!("  unexpected result: {:?}", other.map(|m| m.len())),
    }

    Ok(())
}
