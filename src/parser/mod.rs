//! Basic low-level byte parser functionality.
pub mod byte_parser;
pub mod byte_source;
pub(crate) mod in_memory_byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{MalformedTreeError, MalformedTreeKind};
