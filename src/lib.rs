//! # objson
//!
//! A single-pass decoder for an object-rooted subset of JSON.
//!
//! `objson` parses a byte buffer holding one JSON document whose root is an
//! object into a dynamically-typed [`Value`] tree. Lexing and parsing are fused
//! into one recursive-descent pass over the buffer; there is no token stream
//! and no backtracking.
//!
//! ## Key Features
//!
//! - **Strict root**: the document must be an object, and nothing but
//!   whitespace may follow it
//! - **Positioned errors**: every [`Error`] carries its [`ErrorKind`], byte
//!   offset, line and column
//! - **Closed value type**: [`Value`] has exactly the six JSON kinds, numbers
//!   are `f64`
//! - **Serde bridge**: `Value` and [`Map`] implement `Serialize` and
//!   `Deserialize`
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use objson::{decode, Value};
//!
//! let map = decode(br#"{"name": "Alice", "scores": [1.5, -2], "admin": false}"#).unwrap();
//!
//! assert_eq!(map.get("name").and_then(Value::as_str), Some("Alice"));
//! assert_eq!(
//!     map.get("scores"),
//!     Some(&Value::Array(vec![Value::Number(1.5), Value::Number(-2.0)]))
//! );
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use objson::{decode, ErrorKind};
//!
//! let err = decode(b"{} 1").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TrailingData);
//! assert_eq!(err.offset(), 3);
//! ```
//!
//! ## Supported Subset
//!
//! The decoder deliberately accepts less than RFC 8259: object roots only,
//! space-only whitespace by default, no escape decoding and no exponents. See
//! the [`grammar`] module for the exact rules and [`DecodeOptions`] for the
//! knobs that relax or harden them.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(n) in the buffer length, one pass
//! - **Memory**: the output tree plus stack proportional to nesting depth
//! - **Threads**: a [`Decoder`] owns only its cursor, so separate buffers
//!   decode concurrently without coordination

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use de::Decoder;
pub use error::{Error, ErrorKind, Result};
pub use map::Map;
pub use options::{DecodeOptions, Whitespace};
pub use value::{TypeMismatch, Value};

/// Decodes a buffer holding one document whose root is an object.
///
/// Uses the default [`DecodeOptions`]: only the space character is
/// whitespace and nesting depth is unbounded.
///
/// # Examples
///
/// ```rust
/// use objson::decode;
///
/// let map = decode(br#"{"a": 1, "a": 2}"#).unwrap();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("a").and_then(|v| v.as_f64()), Some(2.0));
/// ```
///
/// # Errors
///
/// Returns the first [`Error`] found; no partial result is produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &[u8]) -> Result<Map> {
    Decoder::new(input).decode()
}

/// Decodes a string holding one document whose root is an object.
///
/// # Examples
///
/// ```rust
/// use objson::decode_str;
///
/// let map = decode_str(r#"{"ok": true}"#).unwrap();
/// assert_eq!(map.get("ok").and_then(|v| v.as_bool()), Some(true));
/// ```
///
/// # Errors
///
/// Same as [`decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_str(input: &str) -> Result<Map> {
    decode(input.as_bytes())
}

/// Decodes a buffer with custom options.
///
/// # Examples
///
/// ```rust
/// use objson::{decode_with_options, DecodeOptions, ErrorKind, Whitespace};
///
/// let options = DecodeOptions::new()
///     .with_whitespace(Whitespace::Json)
///     .with_max_depth(4);
///
/// let map = decode_with_options(b"{\r\n\t\"k\": []\r\n}", options).unwrap();
/// assert!(map.contains_key("k"));
///
/// let err = decode_with_options(br#"{"k": [[[[]]]]}"#, options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded { limit: 4 });
/// ```
///
/// # Errors
///
/// Same as [`decode`], plus [`ErrorKind::DepthLimitExceeded`] when a
/// depth limit is set and exceeded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(input: &[u8], options: DecodeOptions) -> Result<Map> {
    Decoder::with_options(input, options).decode()
}
