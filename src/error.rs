//! Error types for decoding.
//!
//! Every failure is fatal to the decode in progress: the first problem found
//! is returned and no partial value is produced.
//!
//! An [`Error`] pairs an [`ErrorKind`] with the position at which the problem
//! was detected:
//!
//! - [`Error::offset`]: 0-based byte offset into the input buffer
//! - [`Error::line`] / [`Error::column`]: 1-based, derived from the offset
//!   (columns count bytes, lines split on `\n`)
//!
//! ## Examples
//!
//! ```rust
//! use objson::{decode, ErrorKind};
//!
//! let err = decode(br#"{"key": tru}"#).unwrap_err();
//! assert!(matches!(err.kind(), ErrorKind::InvalidLiteral { expected: "true", .. }));
//! assert_eq!(err.offset(), 11);
//! assert_eq!(err.to_string(), "expected `true`, found '}' at line 1, column 12");
//! ```

use std::fmt;
use thiserror::Error;

/// The reason a decode failed.
///
/// Input outside the supported subset (exponent notation, for instance)
/// reports through the same kinds as malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The buffer ended where more input was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// The first significant byte is not `{`.
    #[error("expected `{{` at document root")]
    ExpectedObjectRoot,

    /// An object key does not start with `"`.
    #[error("object key must be a string")]
    KeyMustBeString,

    /// An object key is not followed by `:`.
    #[error("expected `:` after object key")]
    ExpectedColon,

    /// An object member is followed by something other than `,` or `}`.
    #[error("expected `,` or `}}` after object member")]
    ExpectedCommaOrCloseBrace,

    /// An array element is followed by something other than `,` or `]`.
    #[error("expected `,` or `]` after array element")]
    ExpectedCommaOrCloseBracket,

    /// The byte in value position starts no known production.
    #[error("invalid value")]
    InvalidValue,

    /// A `true`, `false` or `null` literal diverged from its spelling.
    #[error("expected `{expected}`, found {}", DisplayByte(.found))]
    InvalidLiteral { expected: &'static str, found: u8 },

    /// A `-` sign is not followed by a digit.
    #[error("expected digit after `-`")]
    InvalidNegativeNumber,

    /// A decimal point is not followed by a digit.
    #[error("expected digit after decimal point")]
    MissingFractionDigit,

    /// A number literal is too large to represent as a finite `f64`.
    #[error("number out of range")]
    NumberOutOfRange,

    /// Non-whitespace bytes follow the root object.
    #[error("trailing data after root object")]
    TrailingData,

    /// The buffer ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,

    /// String contents are not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,

    /// Arrays and objects nest deeper than [`DecodeOptions::max_depth`](crate::DecodeOptions).
    #[error("nesting exceeds depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// A decode failure and where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
    line: usize,
    column: usize,
}

impl Error {
    /// Creates an error of `kind` detected at byte `offset` of `input`.
    ///
    /// Line and column are computed from `input[..offset]`; an offset past the
    /// end of `input` is clamped to its length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objson::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::TrailingData, b"{}\n 1", 4);
    /// assert_eq!((err.line(), err.column()), (2, 2));
    /// ```
    pub fn new(kind: ErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);

        Error {
            kind,
            offset,
            line,
            column: offset - line_start + 1,
        }
    }

    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the 0-based byte offset at which the failure was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the 1-based line of the failure.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based byte column of the failure.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

/// Renders a raw input byte for messages: printable ASCII quoted, the rest as hex.
struct DisplayByte<'a>(&'a u8);

impl fmt::Display for DisplayByte<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = *self.0;
        if byte.is_ascii_graphic() || byte == b' ' {
            write!(f, "'{}'", byte as char)
        } else {
            write!(f, "byte 0x{:02x}", byte)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
