//! Bracketed tree notation (Penn Treebank style) parser and writer.
//!
//! This module provides [BracketParser] to parse labeled trees such as
//! `(S (NP I) (VP (V enjoyed) (NP my cookie)))` into [Tree]s, and the
//! [writer] functions rendering them back, most importantly the canonical
//! [flatten] used to compare trees.
//!
//! # Quick API
//! * [`parse_str`] - parses exactly one tree from a string
//! * [`parse_all_str`] - parses every tree in a string
//! * [`parse_file`] - parses every tree in a file
//!
//! # Format
//! * `tree ::= '(' label child* ')'`
//! * `child ::= tree | token`
//! * `label`, `token`: one or more characters other than `(`, `)` and whitespace
//!
//! Whitespace (any Unicode whitespace, including newlines) may appear
//! between any two elements. There is no quoting and no comment syntax.
//! Nesting is limited to [MAX_DEPTH] levels.

mod defs;
pub mod parser;
pub mod writer;

pub use defs::{DEFAULT_MARGIN, MAX_DEPTH};
pub use parser::{BracketIterator, BracketParser};
pub use writer::{BracketStyle, flatten, normalize_whitespace, to_bracketed};

use crate::model::Tree;
use crate::parser::{ByteParser, MalformedTreeError};
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a string holding exactly one bracketed tree.
///
/// # Errors
/// [MalformedTreeError] when parentheses are unbalanced, a label is missing,
/// or the text is not a single well-formed tree (e.g. an unstructured
/// sentence, or two trees).
///
/// # Example
/// ```
/// use paratree::bracket::parse_str;
///
/// let tree = parse_str("(S (NP I) (VP (V enjoyed) (NP my cookie)))")?;
/// assert_eq!(tree.root().label(), "S");
/// assert!(parse_str("free-form English text").is_err());
/// # Ok::<(), paratree::parser::MalformedTreeError>(())
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<Tree, MalformedTreeError> {
    let mut byte_parser = ByteParser::for_str(text.as_ref());
    BracketParser::new().parse_single(&mut byte_parser)
}

/// Parses all whitespace-separated trees of a string.
pub fn parse_all_str<S: AsRef<str>>(text: S) -> Result<Vec<Tree>, MalformedTreeError> {
    let mut byte_parser = ByteParser::for_str(text.as_ref());
    BracketParser::new().parse_all(&mut byte_parser)
}

/// Parses all whitespace-separated trees of a file.
///
/// # Errors
/// [MalformedTreeError] if the file cannot be read or any tree is malformed.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Tree>, MalformedTreeError> {
    let mut byte_parser = ByteParser::from_file(path)?;
    BracketParser::new().parse_all(&mut byte_parser)
}
