//! Error types for the bracket tree parser.
//!
//! This module provides [MalformedTreeError] and [MalformedTreeKind] for
//! representing and reporting input that is not a single well-formed
//! labeled tree.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// MALFORMED TREE KIND
// =#========================================================================#=
/// Ways in which bracketed tree text can be malformed.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum MalformedTreeKind {
    /// Input is empty or whitespace only.
    #[error("empty input")]
    EmptyInput,
    /// A node was expected to start with `(`, e.g. for unstructured text.
    #[error("expected '(' but found {0:?}")]
    ExpectedOpen(Option<char>),
    /// `(` is not directly followed by a label.
    #[error("missing label after '('")]
    MissingLabel,
    /// Input ended before all open parentheses were closed.
    #[error("unexpected end of input, unbalanced '('")]
    UnexpectedEof,
    /// A `)` without matching `(`.
    #[error("unbalanced ')'")]
    UnbalancedClose,
    /// Text following a complete tree where no further tree is allowed.
    #[error("trailing input after tree")]
    TrailingInput,
    /// A label or token is not valid UTF-8.
    #[error("invalid UTF-8 in token")]
    InvalidUtf8,
    /// Nodes are nested deeper than the parser's maximum depth.
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
    /// Reading the input failed.
    #[error("IO error - {0}")]
    Io(String),
}

// =#========================================================================#=
// MALFORMED TREE ERROR
// =#========================================================================#=
/// Input text is not a well-formed single labeled tree.
///
/// Carries the byte position where parsing stopped and a short excerpt of
/// the input following that position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed tree: {kind} at position {position}")]
pub struct MalformedTreeError {
    kind: MalformedTreeKind,
    position: usize,
    context: String,
}

impl MalformedTreeError {
    /// Create an error from a kind and parser state
    pub fn from_parser<S: ByteSource>(kind: MalformedTreeKind, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Create an error at an explicit position.
    pub fn at(kind: MalformedTreeKind, position: usize, context: String) -> Self {
        Self {
            kind,
            position,
            context,
        }
    }

    /// Convenience constructor for [MalformedTreeKind::EmptyInput]
    pub fn empty_input<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(MalformedTreeKind::EmptyInput, parser)
    }

    /// Convenience constructor for [MalformedTreeKind::ExpectedOpen]
    pub fn expected_open<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        let found = parser.get_context_as_string(4).chars().next();
        Self::from_parser(MalformedTreeKind::ExpectedOpen(found), parser)
    }

    /// Convenience constructor for [MalformedTreeKind::MissingLabel]
    pub fn missing_label<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(MalformedTreeKind::MissingLabel, parser)
    }

    /// Convenience constructor for [MalformedTreeKind::UnexpectedEof]
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(MalformedTreeKind::UnexpectedEof, parser)
    }

    /// Convenience constructor for [MalformedTreeKind::UnbalancedClose]
    pub fn unbalanced_close<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(MalformedTreeKind::UnbalancedClose, parser)
    }

    /// Convenience constructor for [MalformedTreeKind::TrailingInput]
    pub fn trailing_input<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(MalformedTreeKind::TrailingInput, parser)
    }

    /// Convenience constructor for [MalformedTreeKind::TooDeep]
    pub fn too_deep<S: ByteSource>(max_depth: usize, parser: &ByteParser<S>) -> Self {
        Self::from_parser(MalformedTreeKind::TooDeep(max_depth), parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &MalformedTreeKind {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input excerpt starting at the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl From<std::io::Error> for MalformedTreeError {
    fn from(err: std::io::Error) -> Self {
        // No position or parsing context for IO errors
        Self::at(MalformedTreeKind::Io(err.to_string()), 0, String::new())
    }
}
