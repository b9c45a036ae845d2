//! Low-level byte-by-byte parser for bracketed text.
//!
//! This module provides [ByteParser] for scanning text-based tree notation
//! with support for peeking, consuming and token extraction. Used as the
//! foundation of the [bracket parser](crate::bracket::BracketParser).

use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::{MalformedTreeError, MalformedTreeKind};
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming and token extraction.
///
/// Structural bytes (parentheses) are ASCII and checked byte-wise. Anything
/// else is read as UTF-8 characters, so labels and words may contain any
/// non-ASCII text (e.g. `(NNP Gòtic)`), and every Unicode whitespace
/// character (e.g. U+2003 EM SPACE) separates tokens.
///
/// # Example
/// ```
/// use paratree::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  (NP clubs)");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.parse_token(b"() \t\n\r").unwrap(), "NP");
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a string slice by copying it.
    ///
    /// # Arguments
    /// * `input` - The string to parse
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` over the full content of a file.
    ///
    /// # Errors
    /// Returns a [MalformedTreeError] of kind [MalformedTreeKind::Io]
    /// if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MalformedTreeError> {
        let source = InMemoryByteSource::from_file(path)?;
        Ok(Self::new(source))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Peeks at the character starting at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(char)` - The current character
    /// * `None` - At EOF, or if the bytes at the current position are not valid UTF-8
    pub fn peek_char(&self) -> Option<char> {
        let b = self.peek()?;
        if b.is_ascii() {
            return Some(char::from(b));
        }

        // A char spans at most 4 bytes; a later char may be cut off
        let window = self.source.get_context(4);
        let valid = match std::str::from_utf8(&window) {
            Ok(text) => text,
            Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).ok()?,
        };
        valid.chars().next()
    }

    fn consume_char(&mut self, ch: char) {
        for _ in 0..ch.len_utf8() {
            self.next_byte();
        }
    }

    /// Skips (consumes) all consecutive whitespace characters, ASCII or not.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.consume_char(ch);
        }
    }

    /// Checks if the current byte is exactly `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it is exactly `ch`.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position (byte offset) in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences (e.g. a multibyte character cut at the end of
    /// the window) are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        let context_bytes = self.source.get_context(k);
        String::from_utf8_lossy(&context_bytes).into_owned()
    }

    /// Parses a token until whitespace, any of the given delimiters, or EOF
    /// is encountered.
    ///
    /// The token may be empty if the parser is positioned at a delimiter.
    ///
    /// # Arguments
    /// * `delimiters` - ASCII bytes that terminate the token besides whitespace
    ///
    /// # Errors
    /// Returns [MalformedTreeKind::InvalidUtf8] if the token bytes are not valid UTF-8.
    pub fn parse_token(&mut self, delimiters: &[u8]) -> Result<String, MalformedTreeError> {
        let mut token = String::new();

        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            let ch = self.peek_char().ok_or_else(|| {
                MalformedTreeError::from_parser(MalformedTreeKind::InvalidUtf8, self)
            })?;
            if ch.is_whitespace() {
                break;
            }
            token.push(ch);
            self.consume_char(ch);
        }

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIMITERS: &[u8] = b"()";

    #[test]
    fn test_skip_whitespace() {
        let mut parser = ByteParser::for_str(" \r  \t\n \t x y");
        parser.skip_whitespace();
        assert_eq!(parser.peek(), Some(b'x'));

        parser.next_byte();
        parser.skip_whitespace();
        assert_eq!(parser.peek(), Some(b'y'));
    }

    #[test]
    fn test_consume_if() {
        let mut parser = ByteParser::for_str("(S");
        assert!(!parser.consume_if(b')'));
        assert!(parser.consume_if(b'('));
        assert_eq!(parser.position(), 1);
    }

    #[test]
    fn test_parse_token_stops_at_delimiters() {
        let mut parser = ByteParser::for_str("NNS)restaurants");
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "NNS");
        assert_eq!(parser.peek(), Some(b')'));
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "");
    }

    #[test]
    fn test_parse_token_keeps_utf8() {
        let mut parser = ByteParser::for_str("Gòtic) ");
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "Gòtic");
    }

    #[test]
    fn test_parse_token_until_eof() {
        let mut parser = ByteParser::for_str("cookie");
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "cookie");
        assert!(parser.is_eof());
    }

    #[test]
    fn test_unicode_whitespace_separates_tokens() {
        let mut parser = ByteParser::for_str("a\u{2003}\u{2003}b\u{00A0}c");
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "a");
        parser.skip_whitespace();
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "b");
        parser.skip_whitespace();
        assert_eq!(parser.parse_token(DELIMITERS).unwrap(), "c");
    }

    #[test]
    fn test_peek_char() {
        let mut parser = ByteParser::for_str("ò\u{3000}");
        assert_eq!(parser.peek_char(), Some('ò'));
        parser.next_byte();
        // Inside a multibyte character
        assert_eq!(parser.peek_char(), None);
    }

    #[test]
    fn test_invalid_utf8_token() {
        let mut parser = ByteParser::new(InMemoryByteSource::from_vec(vec![b'a', 0xFF, b')']));
        let err = parser.parse_token(DELIMITERS).unwrap_err();
        assert_eq!(err.kind(), &MalformedTreeKind::InvalidUtf8);
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn test_context_as_string() {
        let parser = ByteParser::for_str("(NP (NNS clubs))");
        assert_eq!(parser.get_context_as_string(4), "(NP ");
    }
}
