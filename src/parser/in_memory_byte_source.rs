//! In-memory implementation of byte source for the parser.

use crate::parser::byte_source::ByteSource;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// =#========================================================================#=
// IN MEMORY BYTE SOURCE
// =#========================================================================#=
/// An in-memory byte source that owns its data.
///
/// Parse trees are short (one sentence each), so even batch files are
/// read fully into memory.
pub struct InMemoryByteSource {
    /// The owned byte data being parsed
    input: Vec<u8>,
    /// Current position in the byte slice
    pos: usize,
}

impl InMemoryByteSource {
    /// Creates a new in-memory byte source from a Vec of bytes.
    ///
    /// # Arguments
    /// * `bytes` - The byte vector to parse
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            input: bytes,
            pos: 0,
        }
    }

    /// Reads the whole file at `path` into a new byte source.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<InMemoryByteSource> {
        let mut contents = Vec::new();
        let mut file = File::open(path)?;
        file.read_to_end(&mut contents)?;
        Ok(Self::from_vec(contents))
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline(always)]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline(always)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn get_context(&self, k: usize) -> Vec<u8> {
        let start = self.pos.min(self.input.len());
        let end = (self.pos + k).min(self.input.len());
        self.input[start..end].to_vec()
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_next() {
        let mut source = InMemoryByteSource::from_vec(b"(NP".to_vec());
        assert_eq!(source.peek(), Some(b'('));
        assert_eq!(source.next_byte(), Some(b'('));
        assert_eq!(source.position(), 1);
        assert_eq!(source.next_byte(), Some(b'N'));
        assert_eq!(source.next_byte(), Some(b'P'));
        assert!(source.is_eof());
        assert_eq!(source.next_byte(), None);
    }

    #[test]
    fn test_context_is_clamped() {
        let mut source = InMemoryByteSource::from_vec(b"(CC and)".to_vec());
        source.next_byte();
        assert_eq!(source.get_context(3), b"CC ".to_vec());
        assert_eq!(source.get_context(100), b"CC and)".to_vec());
    }
}
