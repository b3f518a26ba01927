//! The accepted JSON subset.
//!
//! This module documents exactly which documents the decoder accepts and
//! where it departs from RFC 8259. It contains no code.
//!
//! # Document
//!
//! ```text
//! document = ws object ws
//! value    = object / array / string / number / "true" / "false" / "null"
//! object   = "{" ws [ member *( ws "," ws member ) ] ws "}"
//! member   = string ws ":" ws value
//! array    = "[" ws [ value *( ws "," ws value ) ] ws "]"
//! string   = %x22 *( %x5C any-byte / not-quote ) %x22
//! number   = [ "-" ] int [ "." 1*DIGIT ]
//! int      = "0" / 1*DIGIT            ; leading zero stands alone
//! ws       = *%x20                    ; see Whitespace below
//! ```
//!
//! # Departures From RFC 8259
//!
//! | Area | RFC 8259 | This crate |
//! |------|----------|------------|
//! | Root value | any value | object only ([`ExpectedObjectRoot`]) |
//! | Whitespace | space, tab, LF, CR | space only by default |
//! | String escapes | decoded | kept verbatim, `\"` does not close the string |
//! | Exponents | `1e5`, `2E-3` | not recognized |
//! | Duplicate keys | unspecified | last value wins |
//!
//! These are subset restrictions rather than defects. Input that uses an
//! unsupported feature fails through the ordinary error kinds:
//!
//! ```rust
//! use objson::{decode, ErrorKind};
//!
//! // The `e` is left over after the number `1`.
//! let err = decode(br#"{"n": 1e5}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ExpectedCommaOrCloseBrace);
//!
//! // Escapes survive as written.
//! let map = decode(br#"{"s": "tab\tquote\""}"#).unwrap();
//! assert_eq!(map.get("s").and_then(|v| v.as_str()), Some(r#"tab\tquote\""#));
//! ```
//!
//! # Whitespace
//!
//! By default only `0x20` separates tokens, so a document spread over several
//! lines is rejected at the first line feed. [`Whitespace::Json`] restores the
//! RFC set:
//!
//! ```rust
//! use objson::{decode, decode_with_options, DecodeOptions, ErrorKind, Whitespace};
//!
//! let input = b"{\"a\": 1,\n \"b\": 2}";
//! assert_eq!(decode(input).unwrap_err().kind(), ErrorKind::KeyMustBeString);
//!
//! let options = DecodeOptions::new().with_whitespace(Whitespace::Json);
//! assert_eq!(decode_with_options(input, options).unwrap().len(), 2);
//! ```
//!
//! # Numbers
//!
//! All numbers decode to `f64`. The result is the IEEE-754 double nearest to
//! the decimal literal, the same value `str::parse::<f64>` produces. A leading
//! `0` is not followed by more digits, so `01` fails after the `0`. A literal
//! too large for a finite `f64` fails with [`NumberOutOfRange`] instead of
//! decoding as infinity:
//!
//! ```rust
//! use objson::{decode_str, ErrorKind};
//!
//! let err = decode_str(&format!(r#"{{"n": {}}}"#, "9".repeat(400))).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NumberOutOfRange);
//! ```
//!
//! # Nesting
//!
//! Arrays and objects recurse on the call stack. Untrusted input should set
//! [`DecodeOptions::max_depth`] to bound it.
//!
//! [`ExpectedObjectRoot`]: crate::ErrorKind::ExpectedObjectRoot
//! [`NumberOutOfRange`]: crate::ErrorKind::NumberOutOfRange
//! [`Whitespace::Json`]: crate::Whitespace::Json
//! [`DecodeOptions::max_depth`]: crate::DecodeOptions::max_depth
