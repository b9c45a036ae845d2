//! Paraphrasing trees by reordering coordinated noun phrases.
//!
//! Coordination is commutative: "bars, clubs and restaurants" means the
//! same as "clubs, restaurants and bars". Reordering the noun phrases of a
//! coordinate run therefore yields a paraphrase with unchanged grammar.
//!
//! The pipeline:
//! 1. [detect_groups] finds the coordinate groups of a tree
//! 2. [generate] permutes each group, compounding across groups, until the
//!    limit is exceeded
//! 3. the original tree is dropped from the result
//!
//! # Quick API
//! [`create_variations`] runs the whole pipeline on bracketed text with a
//! given limit. For repeated use with the same settings configure a
//! [Paraphraser].
//!
//! # Limit and truncation
//! Generation stops as soon as the limit is exceeded, even in the middle of
//! the permutations of a group. With a small limit the result is therefore
//! a prefix of discovery order, not "all orderings of the first group".
//! The result is deterministic for equal input and limit.

pub mod defs;
pub mod detector;
pub mod generator;
pub mod permutations;

pub use defs::DEFAULT_LIMIT;
pub use detector::{CoordinateGroup, detect_groups};
pub use generator::{generate, permute};

use crate::bracket;
use crate::error::Error;
use crate::model::Tree;

// =#========================================================================#=
// PARAPHRASER
// =#========================================================================#=
/// Configured variation generator.
///
/// # Configuration
/// * [`with_limit(limit)`](Self::with_limit) - maximum number of variations
///   returned (default [DEFAULT_LIMIT])
///
/// # Example
/// ```
/// use paratree::variation::Paraphraser;
///
/// let paraphraser = Paraphraser::new().with_limit(3);
/// let variations = paraphraser
///     .create_variations("(NP (NP a) (, ,) (NP b) (CC and) (NP c))")
///     .unwrap();
/// assert_eq!(variations.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paraphraser {
    limit: usize,
}

impl Default for Paraphraser {
    fn default() -> Self {
        Self::new()
    }
}

impl Paraphraser {
    /// Creates a paraphraser with the default limit.
    pub fn new() -> Self {
        Paraphraser {
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the maximum number of variations returned.
    ///
    /// # Panics
    /// Panics if `limit` is zero.
    pub fn with_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "limit must be positive");
        self.limit = limit;
        self
    }

    /// Returns the configured limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Parses bracketed tree text and returns its flattened variations.
    ///
    /// # Errors
    /// [Error::MalformedTree] if `text` is not a single well-formed tree.
    pub fn create_variations(&self, text: &str) -> Result<Vec<String>, Error> {
        let tree = bracket::parse_str(text)?;
        self.variations_of(&tree)
    }

    /// Returns the flattened variations of an already parsed tree.
    ///
    /// An empty result means the tree has no coordinate structure that
    /// admits a reordering; this is not an error.
    pub fn variations_of(&self, tree: &Tree) -> Result<Vec<String>, Error> {
        let groups = detect_groups(tree);
        let variations = generate(tree, &groups, self.limit)?;
        Ok(variations.into_iter().collect())
    }
}

/// Parses bracketed tree text and returns up to `limit` flattened
/// variations, the original excluded.
///
/// # Errors
/// [Error::MalformedTree] if `text` is not a single well-formed tree.
///
/// # Panics
/// Panics if `limit` is zero.
///
/// # Example
/// ```
/// use paratree::variation::create_variations;
///
/// let variations = create_variations("(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))", 20)?;
/// assert_eq!(variations, vec!["(NP (NP (NNS dogs)) (CC and) (NP (NNS cats)))"]);
///
/// let none = create_variations("(S (NP I) (VP (V enjoyed) (NP my cookie)))", 20)?;
/// assert!(none.is_empty());
/// # Ok::<(), paratree::Error>(())
/// ```
pub fn create_variations(text: &str, limit: usize) -> Result<Vec<String>, Error> {
    Paraphraser::new().with_limit(limit).create_variations(text)
}
