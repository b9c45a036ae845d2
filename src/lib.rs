//! Paratree is a library to paraphrase sentences given as constituency parse
//! trees, by reordering coordinated noun phrases.
//!
//! A coordinated run such as "bars, clubs and Catalan restaurants" can be
//! reordered without changing the meaning or the grammar of a sentence.
//! Given a bracketed parse tree, this crate finds every such run and
//! produces the distinct trees obtained by permuting its noun phrases.
//! Core functionality provided:
//! - Bracket format: Parse and write Penn Treebank style trees, including the
//!   canonical single-line form used to compare trees. See [crate::bracket].
//! - Tree model: Immutable, position-addressed [Tree] whose transformations
//!   share untouched subtrees. See [crate::model].
//! - Variations: Coordinate-group detection and bounded, deterministic
//!   variation generation. See [crate::variation].
//! - Service: Request validation and JSON-shaped responses and errors for
//!   exposing the above behind a request/response boundary. See
//!   [crate::service].
//!
//! Limitations:
//! - Only `NP` runs separated by `,` or `CC` are recognized
//! - A run must span all children of its parent node
//!
//! # Usage patterns
//! 1. [create_variations] runs the whole pipeline on bracketed text.
//! 2. Configure a [Paraphraser](crate::variation::Paraphraser) once and
//!    reuse it, or use [detect_groups](crate::variation::detect_groups) and
//!    [generate](crate::variation::generate) directly for full control.
//!
//! ## Example
//! ```
//! use paratree::create_variations;
//!
//! let tree = "(S (NP (NP (NNS cats)) (CC and) (NP (NNS dogs))) (VP (VBP play)))";
//! let variations = create_variations(tree, 20)?;
//! assert_eq!(
//!     variations,
//!     vec!["(S (NP (NP (NNS dogs)) (CC and) (NP (NNS cats))) (VP (VBP play)))"]
//! );
//! # Ok::<(), paratree::Error>(())
//! ```

pub mod bracket;
pub mod error;
pub mod model;
pub mod parser;
pub mod service;
pub mod variation;

pub use error::Error;

use crate::model::Tree;
use crate::parser::MalformedTreeError;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a string holding exactly one bracketed tree.
///
/// See [`bracket::parse_str`] for full documentation.
pub fn parse_tree<S: AsRef<str>>(text: S) -> Result<Tree, MalformedTreeError> {
    bracket::parse_str(text)
}

/// Returns up to `limit` flattened variations of a bracketed tree, the
/// original excluded.
///
/// See [`variation::create_variations`] for full documentation.
pub fn create_variations<S: AsRef<str>>(text: S, limit: usize) -> Result<Vec<String>, Error> {
    variation::create_variations(text.as_ref(), limit)
}
