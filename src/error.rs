//! Crate-level error type.

use crate::model::InvalidPositionError;
use crate::parser::MalformedTreeError;
use thiserror::Error;

/// Errors returned by variation generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input text is not a single well-formed labeled tree.
    #[error(transparent)]
    MalformedTree(#[from] MalformedTreeError),
    /// A position did not resolve on the tree it was applied to.
    /// Never returned for groups detected on the same tree.
    #[error(transparent)]
    InvalidPosition(#[from] InvalidPositionError),
}
