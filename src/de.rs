//! Decoding.
//!
//! This module provides the [`Decoder`], a cursor over a borrowed byte buffer
//! that parses one object-rooted document into a [`Map`].
//!
//! ## Overview
//!
//! - **Single pass**: lexing and parsing are fused, each production reads the
//!   bytes at the cursor directly and never backtracks
//! - **Recursive descent**: arrays and objects recurse through the value
//!   dispatch, so stack use follows nesting depth unless
//!   [`DecodeOptions::max_depth`] is set
//! - **First error wins**: every production returns its error to the caller
//!   unchanged and no partial value survives
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use objson::{decode, Value};
//!
//! let map = decode(br#"{"k": [{"b": "c", "d": 4}]}"#).unwrap();
//! let first = &map.get("k").and_then(Value::as_array).unwrap()[0];
//! assert_eq!(first.get("b").and_then(Value::as_str), Some("c"));
//! assert_eq!(first.get("d").and_then(Value::as_f64), Some(4.0));
//! ```

use crate::{DecodeOptions, Error, ErrorKind, Map, Result, Value};

/// Integers with at most this many digits are exact when accumulated in an `f64`.
const EXACT_INTEGER_DIGITS: usize = 15;

/// The decoder.
///
/// Holds the input buffer, the cursor position and the current nesting depth.
/// [`Decoder::decode`] consumes the decoder, so each instance parses exactly
/// one document.
///
/// # Examples
///
/// ```rust
/// use objson::{DecodeOptions, Decoder, Whitespace};
///
/// let options = DecodeOptions::new().with_whitespace(Whitespace::Json);
/// let map = Decoder::with_options(b"{\"a\":\n1}", options).decode().unwrap();
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug)]
pub struct Decoder<'a> {
    input: &'a [u8],
    position: usize,
    depth: usize,
    options: DecodeOptions,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `input` with default options.
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, DecodeOptions::default())
    }

    /// Creates a decoder over `input` that applies `options`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objson::{DecodeOptions, Decoder, ErrorKind};
    ///
    /// let options = DecodeOptions::new().with_max_depth(1);
    /// let err = Decoder::with_options(br#"{"k": []}"#, options).decode().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded { limit: 1 });
    /// ```
    pub fn with_options(input: &'a [u8], options: DecodeOptions) -> Self {
        Decoder {
            input,
            position: 0,
            depth: 0,
            options,
        }
    }

    /// Returns the current byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Decodes the whole buffer as one document with an object at its root.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ExpectedObjectRoot`] when the first significant
    /// byte is not `{`, [`ErrorKind::TrailingData`] when anything but
    /// whitespace follows the root object, and the production's error for any
    /// malformed value inside it.
    pub fn decode(mut self) -> Result<Map> {
        tracing::trace!(
            len = self.input.len(),
            whitespace = ?self.options.whitespace,
            max_depth = ?self.options.max_depth,
            "decoding document"
        );

        let result = self.parse_document();
        if let Err(err) = &result {
            tracing::debug!(
                kind = ?err.kind(),
                offset = err.offset(),
                line = err.line(),
                column = err.column(),
                "decode failed"
            );
        }
        result
    }

    fn parse_document(&mut self) -> Result<Map> {
        if self.skip_whitespace() != Some(b'{') {
            return Err(self.error(ErrorKind::ExpectedObjectRoot));
        }

        self.enter()?;
        let root = self.parse_object()?;
        self.leave();

        if self.skip_whitespace().is_some() {
            return Err(self.error(ErrorKind::TrailingData));
        }
        Ok(root)
    }

    fn error(&self, kind: ErrorKind) -> Error {
        self.error_at(kind, self.position)
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> Error {
        Error::new(kind, self.input, offset)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Moves past the byte under the cursor. Callers only advance after
    /// `peek` or `skip_whitespace` has seen a byte there.
    fn advance(&mut self) {
        self.position += 1;
    }

    /// Advances past insignificant whitespace and returns the next byte
    /// without consuming it, or `None` at the end of the buffer.
    fn skip_whitespace(&mut self) -> Option<u8> {
        while let Some(byte) = self.peek() {
            if !self.options.whitespace.is_insignificant(byte) {
                return Some(byte);
            }
            self.advance();
        }
        None
    }

    /// Like `skip_whitespace`, but running out of input is an error.
    fn next_significant(&mut self) -> Result<u8> {
        self.skip_whitespace()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEndOfInput))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        match self.options.max_depth {
            Some(limit) if self.depth > limit => {
                Err(self.error(ErrorKind::DepthLimitExceeded { limit }))
            }
            _ => Ok(()),
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.next_significant()? {
            b'"' => Ok(Value::String(self.parse_string()?)),
            b'0'..=b'9' => Ok(Value::Number(self.parse_number()?)),
            b'-' => {
                self.advance(); // consume sign
                match self.peek() {
                    Some(b'0'..=b'9') => Ok(Value::Number(-self.parse_number()?)),
                    Some(_) => Err(self.error(ErrorKind::InvalidNegativeNumber)),
                    None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
                }
            }
            b't' => {
                self.parse_literal("true")?;
                Ok(Value::Bool(true))
            }
            b'f' => {
                self.parse_literal("false")?;
                Ok(Value::Bool(false))
            }
            b'n' => {
                self.parse_literal("null")?;
                Ok(Value::Null)
            }
            b'[' => {
                self.enter()?;
                let elements = self.parse_array()?;
                self.leave();
                Ok(Value::Array(elements))
            }
            b'{' => {
                self.enter()?;
                let members = self.parse_object()?;
                self.leave();
                Ok(Value::Object(members))
            }
            _ => Err(self.error(ErrorKind::InvalidValue)),
        }
    }

    /// Parses a string whose opening quote is under the cursor.
    ///
    /// Escape sequences are not decoded. A backslash only keeps the byte after
    /// it from closing the string; both bytes land in the result verbatim.
    fn parse_string(&mut self) -> Result<String> {
        self.advance(); // consume opening quote
        let start = self.position;

        loop {
            match self.peek() {
                Some(b'"') => break,
                Some(b'\\') if self.position + 1 < self.input.len() => self.position += 2,
                Some(_) => self.advance(),
                None => return Err(self.error(ErrorKind::UnterminatedString)),
            }
        }

        let contents = &self.input[start..self.position];
        self.advance(); // consume closing quote

        match std::str::from_utf8(contents) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => Err(self.error_at(ErrorKind::InvalidUtf8, start + e.valid_up_to())),
        }
    }

    /// Parses an unsigned number whose first digit is under the cursor.
    ///
    /// A leading `0` stands alone; any further digits are left for the caller
    /// to reject. No exponent part is recognized.
    fn parse_number(&mut self) -> Result<f64> {
        let start = self.position;
        let mut integer = 0.0_f64;
        let mut digits = 0;

        if self.peek() == Some(b'0') {
            self.advance();
        } else {
            while let Some(byte @ b'0'..=b'9') = self.peek() {
                integer = integer * 10.0 + f64::from(byte - b'0');
                digits += 1;
                self.advance();
            }
        }

        if self.peek() != Some(b'.') {
            if digits <= EXACT_INTEGER_DIGITS {
                return Ok(integer);
            }
            return self.reparse_number(start);
        }

        self.advance(); // consume decimal point
        match self.peek() {
            Some(b'0'..=b'9') => {}
            Some(_) => return Err(self.error(ErrorKind::MissingFractionDigit)),
            None => return Err(self.error(ErrorKind::UnexpectedEndOfInput)),
        }
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }

        self.reparse_number(start)
    }

    /// Re-reads the digits scanned since `start` with the correctly rounded
    /// standard parser. Literals beyond the `f64` range are rejected rather
    /// than decoded as infinity.
    fn reparse_number(&self, start: usize) -> Result<f64> {
        let number = std::str::from_utf8(&self.input[start..self.position])
            .ok()
            .and_then(|literal| literal.parse::<f64>().ok())
            .ok_or_else(|| self.error_at(ErrorKind::InvalidValue, start))?;

        if !number.is_finite() {
            return Err(self.error_at(ErrorKind::NumberOutOfRange, start));
        }
        Ok(number)
    }

    /// Matches `literal` byte by byte starting at the cursor.
    fn parse_literal(&mut self, literal: &'static str) -> Result<()> {
        for &expected in literal.as_bytes() {
            match self.peek() {
                Some(found) if found == expected => self.advance(),
                Some(found) => {
                    return Err(self.error(ErrorKind::InvalidLiteral {
                        expected: literal,
                        found,
                    }))
                }
                None => return Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            }
        }
        Ok(())
    }

    /// Parses an array whose `[` is under the cursor.
    fn parse_array(&mut self) -> Result<Vec<Value>> {
        self.advance(); // consume '['
        let mut elements = Vec::new();

        if self.skip_whitespace() == Some(b']') {
            self.advance();
            return Ok(elements);
        }

        loop {
            elements.push(self.parse_value()?);

            match self.next_significant()? {
                b',' => self.advance(),
                b']' => {
                    self.advance();
                    return Ok(elements);
                }
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrCloseBracket)),
            }
        }
    }

    /// Parses an object whose `{` is under the cursor. A repeated key
    /// replaces the earlier value.
    fn parse_object(&mut self) -> Result<Map> {
        self.advance(); // consume '{'
        let mut members = Map::new();

        if self.skip_whitespace() == Some(b'}') {
            self.advance();
            return Ok(members);
        }

        loop {
            if self.next_significant()? != b'"' {
                return Err(self.error(ErrorKind::KeyMustBeString));
            }
            let key = self.parse_string()?;

            if self.next_significant()? != b':' {
                return Err(self.error(ErrorKind::ExpectedColon));
            }
            self.advance();

            let value = self.parse_value()?;
            members.insert(key, value);

            match self.next_significant()? {
                b',' => self.advance(),
                b'}' => {
                    self.advance();
                    return Ok(members);
                }
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrCloseBrace)),
            }
        }
    }
}
