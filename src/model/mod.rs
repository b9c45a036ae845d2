//! Data model for constituency parse trees.
//!
//! # Tree representation
//! A [Tree] holds a single root [Node]. Each node is either a terminal
//! `Leaf` (a word) or a labeled `Phrase` with ordered children. Children are
//! reference counted, so a tree is immutable once built and
//! [`Tree::substitute`] produces a new tree sharing every untouched subtree.
//!
//! # Addressing
//! Nodes are addressed by [Position]: the sequence of child indices from the
//! root (the root itself is the empty position). Positions are stable only
//! for the tree they were computed on. Resolving a position that leaves the
//! tree yields an [InvalidPositionError].
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | [`Tree::child_at`] | node at a position |
//! | [`Tree::left_sibling`] / [`Tree::right_sibling`] | sibling position, if any |
//! | [`Tree::substitute`] | new tree with one subtree replaced |
//! | [`Tree::flatten`] | canonical single-line string |

pub mod node;
pub mod position;
pub mod tree;

pub use node::Node;
pub use position::{InvalidPositionError, Position};
pub use tree::{PreOrderIter, Tree};
