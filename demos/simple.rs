//! Decoding a document and inspecting the result.
//!
//! Run with: cargo run --example simple

use objson::{decode, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = br#"{"id": 42, "name": "Alice Johnson", "email": "alice@example.com", "scores": [9.5, -2, 0], "manager": null}"#;

    let user = decode(input)?;
    println!("Decoded {} fields", user.len());

    for (key, value) in &user {
        println!("  {key}: {} ({})", describe(value), value.kind_name());
    }

    let name = user.get("name").and_then(Value::as_str).unwrap_or("<none>");
    let id = user.get("id").and_then(Value::as_i64).unwrap_or_default();
    println!("\nUser #{id} is {name}");

    // Failures carry the byte offset, line and column where they were found.
    match decode(br#"{"id": 42, "name": Alice}"#) {
        Ok(_) => println!("unexpectedly decoded"),
        Err(err) => println!("Rejected: {err} (offset {})", err.offset()),
    }

    Ok(())
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(members) => format!("{} members", members.len()),
    }
}
