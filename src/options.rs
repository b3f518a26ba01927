//! Configuration options for decoding.
//!
//! - [`DecodeOptions`]: main configuration struct
//! - [`Whitespace`]: which bytes count as insignificant whitespace
//!
//! The defaults reproduce the strict behavior of [`decode`](crate::decode):
//! only the space character separates tokens and nesting depth is unbounded.
//!
//! ## Examples
//!
//! ```rust
//! use objson::{decode_with_options, DecodeOptions, Whitespace};
//!
//! let input = b"{\n  \"name\": \"Alice\"\n}";
//! assert!(objson::decode(input).is_err());
//!
//! let options = DecodeOptions::new().with_whitespace(Whitespace::Json);
//! let map = decode_with_options(input, options).unwrap();
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

/// The set of bytes skipped between tokens.
///
/// # Examples
///
/// ```rust
/// use objson::Whitespace;
///
/// assert!(Whitespace::Space.is_insignificant(b' '));
/// assert!(!Whitespace::Space.is_insignificant(b'\n'));
/// assert!(Whitespace::Json.is_insignificant(b'\n'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Only the space character `0x20`. Tab, line feed and carriage return
    /// are ordinary bytes and are rejected wherever a token is expected.
    #[default]
    Space,
    /// Space, tab, line feed and carriage return, as in RFC 8259.
    Json,
}

impl Whitespace {
    /// Returns `true` if `byte` is skipped between tokens.
    #[inline]
    #[must_use]
    pub const fn is_insignificant(&self, byte: u8) -> bool {
        match self {
            Whitespace::Space => byte == b' ',
            Whitespace::Json => matches!(byte, b' ' | b'\t' | b'\n' | b'\r'),
        }
    }
}

/// Configuration options for decoding.
///
/// # Examples
///
/// ```rust
/// use objson::{DecodeOptions, Whitespace};
///
/// let options = DecodeOptions::new()
///     .with_whitespace(Whitespace::Json)
///     .with_max_depth(64);
/// assert_eq!(options.max_depth, Some(64));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Bytes skipped between tokens. Defaults to [`Whitespace::Space`].
    pub whitespace: Whitespace,
    /// Maximum nesting of arrays and objects, the root object counting as 1.
    /// `None` leaves recursion bounded only by the call stack.
    pub max_depth: Option<usize>,
}

impl DecodeOptions {
    /// Creates default options (space-only whitespace, no depth limit).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objson::{DecodeOptions, Whitespace};
    ///
    /// let options = DecodeOptions::new();
    /// assert_eq!(options.whitespace, Whitespace::Space);
    /// assert!(options.max_depth.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which bytes are skipped between tokens.
    #[must_use]
    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Limits how deeply arrays and objects may nest.
    ///
    /// Decoding fails with
    /// [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind::DepthLimitExceeded)
    /// as soon as a container would open beyond `max_depth`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objson::{decode_with_options, DecodeOptions, ErrorKind};
    ///
    /// let options = DecodeOptions::new().with_max_depth(2);
    /// assert!(decode_with_options(br#"{"a": []}"#, options).is_ok());
    ///
    /// let err = decode_with_options(br#"{"a": [[]]}"#, options).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded { limit: 2 });
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_only_whitespace() {
        let ws = Whitespace::Space;
        assert!(ws.is_insignificant(b' '));
        for byte in [b'\t', b'\n', b'\r', 0x0c, 0x0b, 0] {
            assert!(!ws.is_insignificant(byte));
        }
    }

    #[test]
    fn test_json_whitespace() {
        let ws = Whitespace::Json;
        for byte in [b' ', b'\t', b'\n', b'\r'] {
            assert!(ws.is_insignificant(byte));
        }
        assert!(!ws.is_insignificant(0x0c));
        assert!(!ws.is_insignificant(b'{'));
    }

    #[test]
    fn test_builder() {
        let options = DecodeOptions::new()
            .with_whitespace(Whitespace::Json)
            .with_max_depth(3);
        assert_eq!(options.whitespace, Whitespace::Json);
        assert_eq!(options.max_depth, Some(3));
        assert_eq!(DecodeOptions::default(), DecodeOptions::new());
    }
}
