//! Working with decoded values and handing them to other serde formats.
//!
//! Run with: cargo run --example dynamic_values

use objson::{decode_str, value, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = decode_str(
        r#"{"host": "localhost", "port": 8080, "features": ["auth", "logging", "metrics"], "debug": true}"#,
    )?;

    // Access values dynamically
    if let Some(Value::String(host)) = config.get("host") {
        println!("Accessing field 'host': {}", host);
    }

    if let Some(port) = config.get("port").and_then(Value::as_i64) {
        println!("Accessing field 'port': {}", port);
    }

    if let Some(Value::Array(features)) = config.get("features") {
        println!("Accessing field 'features': {} items\n", features.len());
    }

    // Convert out of the tree with TryFrom
    let debug = bool::try_from(config.get("debug").cloned().unwrap_or_default());
    println!("debug flag: {:?}", debug);

    // The same tree built with the value! macro
    let expected = value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });
    println!("Matches literal: {}\n", Value::Object(config.clone()) == expected);

    // Any serde format can take the decoded tree
    println!("As pretty JSON:\n{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
