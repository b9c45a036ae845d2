//! Byte source abstractions for the parser.
//!
//! This module provides the [ByteSource] trait; see
//! [InMemoryByteSource](crate::parser::in_memory_byte_source::InMemoryByteSource)
//! for the implementation used by the bracket parser.

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================T=
/// Trait defining the interface for byte sources used by [ByteParser](crate::parser::ByteParser).
///
/// Keeps the scanning logic of the parser independent of where the bytes
/// come from (a string handed in by a caller or a file read from disk).
pub trait ByteSource {
    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn peek(&self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns up to `k` bytes from the current position for error context.
    fn get_context(&self, k: usize) -> Vec<u8>;

    /// Returns the current position (byte offset) in the byte stream.
    fn position(&self) -> usize;

    /// Check if at end of data.
    fn is_eof(&self) -> bool;
}
