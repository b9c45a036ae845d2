//! Constants for parsing and writing bracketed tree notation.

/// Bytes ending a label or token besides whitespace
pub(crate) const NODE_DELIMITERS: &[u8] = b"()";

/// Default maximum nesting depth of a parsed tree
pub const MAX_DEPTH: usize = 1_000;

/// Line width the indented style tries to stay within
pub const DEFAULT_MARGIN: usize = 70;

/// Indentation added per nesting level in the indented style
pub(crate) const INDENT_STEP: usize = 2;
