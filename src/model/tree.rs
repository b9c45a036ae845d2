//! Provides the immutable, position-addressed constituency tree.
//!
//! Core data structures:
//! * [Tree] - a single root [Node], never mutated once constructed
//! * [PreOrderIter] - stack-based traversal yielding each node with its [Position]
//!
//! Every transformation (see [`Tree::substitute`]) returns a new [Tree] that
//! shares all untouched subtrees with its source, so any number of variants
//! derived from one input can coexist and be compared safely.

use crate::bracket;
use crate::bracket::BracketStyle;
use crate::model::node::Node;
use crate::model::position::{InvalidPositionError, Position};
use crate::parser::MalformedTreeError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A constituency parse tree.
///
/// Cloning a tree is cheap (one reference count increment); equality and
/// hashing are structural.
///
/// # Example
/// ```
/// use paratree::model::{Position, Tree};
///
/// let tree: Tree = "(S (NP I) (VP (V enjoyed) (NP my cookie)))".parse().unwrap();
/// let object = tree.child_at(&Position::from([1, 1])).unwrap();
/// assert_eq!(object.label(), "NP");
/// assert_eq!(tree.sentence(), "I enjoyed my cookie");
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Tree {
    root: Arc<Node>,
}

// ============================================================================
// New, Getters / Accessors (pub)
// ============================================================================
impl Tree {
    /// Creates a tree with the given root.
    pub fn new(root: Node) -> Self {
        Tree {
            root: Arc::new(root),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolves a position to the node it addresses.
    ///
    /// # Errors
    /// [InvalidPositionError] if any index along the way is out of range.
    pub fn child_at(&self, position: &Position) -> Result<&Node, InvalidPositionError> {
        self.subtree_ref(position).map(|node| &**node)
    }

    /// Resolves a position to the shared subtree it addresses.
    ///
    /// Unlike [`child_at`](Self::child_at), the result can be placed into
    /// another tree without copying.
    ///
    /// # Errors
    /// [InvalidPositionError] if any index along the way is out of range.
    pub fn subtree_at(&self, position: &Position) -> Result<Arc<Node>, InvalidPositionError> {
        self.subtree_ref(position).map(Arc::clone)
    }

    fn subtree_ref(&self, position: &Position) -> Result<&Arc<Node>, InvalidPositionError> {
        let mut node = &self.root;
        for (depth, &index) in position.iter().enumerate() {
            node = node.child(index).ok_or_else(|| InvalidPositionError {
                position: position.clone(),
                depth,
            })?;
        }
        Ok(node)
    }

    /// Returns the position of the left sibling of the node at `position`.
    ///
    /// `None` for the root, for a first child, or if `position` does not
    /// resolve on this tree.
    pub fn left_sibling(&self, position: &Position) -> Option<Position> {
        let index = position.last_index()?;
        if index == 0 || self.child_at(position).is_err() {
            return None;
        }
        position.with_last_index(index - 1)
    }

    /// Returns the position of the right sibling of the node at `position`.
    ///
    /// `None` for the root, for a last child, or if `position` does not
    /// resolve on this tree.
    pub fn right_sibling(&self, position: &Position) -> Option<Position> {
        let index = position.last_index()?;
        let parent = self.child_at(&position.parent()?).ok()?;
        if index + 1 >= parent.num_children() {
            return None;
        }
        position.with_last_index(index + 1)
    }

    /// Returns a new tree identical to this one except that the subtree at
    /// `position` is replaced by `replacement`.
    ///
    /// Only the nodes on the path from the root to `position` are rebuilt;
    /// everything else is shared with `self`. `self` is left unchanged.
    ///
    /// # Errors
    /// [InvalidPositionError] if `position` does not resolve on this tree.
    pub fn substitute(
        &self,
        position: &Position,
        replacement: Arc<Node>,
    ) -> Result<Tree, InvalidPositionError> {
        // Rebuilds the path bottom-up
        fn replace_in(
            node: &Arc<Node>,
            path: &[usize],
            depth: usize,
            position: &Position,
            replacement: Arc<Node>,
        ) -> Result<Arc<Node>, InvalidPositionError> {
            let Some((&index, rest)) = path.split_first() else {
                return Ok(replacement);
            };
            let invalid = || InvalidPositionError {
                position: position.clone(),
                depth,
            };
            let child = node.child(index).ok_or_else(invalid)?;
            let new_child = replace_in(child, rest, depth + 1, position, replacement)?;
            let new_node = node.with_child_replaced(index, new_child).ok_or_else(invalid)?;
            Ok(Arc::new(new_node))
        }

        let root = replace_in(&self.root, position, 0, position, replacement)?;
        Ok(Tree { root })
    }

    /// Returns the canonical single-line rendering of this tree.
    ///
    /// Two trees are the same variation if and only if their flattened
    /// strings are identical. See [`bracket::flatten`].
    pub fn flatten(&self) -> String {
        bracket::flatten(self)
    }

    /// Renders this tree in bracketed notation with the given style.
    pub fn to_bracketed(&self, style: &BracketStyle) -> String {
        bracket::to_bracketed(self, style)
    }

    /// Returns the number of nodes (phrases and leaves) in this tree.
    pub fn num_nodes(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// Returns the terminal tokens of this tree from left to right.
    pub fn leaves(&self) -> Vec<&str> {
        self.pre_order_iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.label())
            .collect()
    }

    /// Returns the surface sentence, i.e. all tokens joined by single spaces.
    pub fn sentence(&self) -> String {
        self.leaves().join(" ")
    }

    /// Returns the length of the longest root-to-node position in this tree.
    pub fn height(&self) -> usize {
        self.pre_order_iter()
            .map(|(position, _)| position.depth())
            .max()
            .unwrap_or(0)
    }
}

impl FromStr for Tree {
    type Err = MalformedTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bracket::parse_str(s)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
impl Tree {
    /// Returns an iterator over the tree in pre-order (parents before
    /// children, children left to right), yielding each node with its position.
    ///
    /// # Example
    /// ```
    /// use paratree::model::Tree;
    ///
    /// let tree: Tree = "(NP (NNS clubs))".parse().unwrap();
    /// let labels: Vec<_> = tree.pre_order_iter().map(|(_, node)| node.label()).collect();
    /// assert_eq!(labels, vec!["NP", "NNS", "clubs"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Uses an explicit stack instead of recursion, so deep trees cannot
/// overflow the call stack.
pub struct PreOrderIter<'a> {
    stack: Vec<(Position, &'a Node)>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        PreOrderIter {
            stack: vec![(Position::root(), tree.root())],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Position, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (position, node) = self.stack.pop()?;

        // Push children right to left, so the leftmost is visited first
        for (index, child) in node.children().iter().enumerate().rev() {
            self.stack.push((position.child(index), child));
        }

        Some((position, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        "(NP (NP (NNS bars)) (, ,) (NP (NNS clubs)) (CC and) (NP (NNS restaurants)))"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_child_at_root_and_nested() {
        let tree = sample();
        assert_eq!(tree.child_at(&Position::root()).unwrap().label(), "NP");
        assert_eq!(tree.child_at(&Position::from([1])).unwrap().label(), ",");
        assert_eq!(tree.child_at(&Position::from([2, 0, 0])).unwrap().label(), "clubs");
    }

    #[test]
    fn test_child_at_invalid() {
        let tree = sample();
        let err = tree.child_at(&Position::from([2, 3])).unwrap_err();
        assert_eq!(err.depth, 1);
        // Leaves have no children
        assert!(tree.child_at(&Position::from([0, 0, 0, 0])).is_err());
    }

    #[test]
    fn test_siblings() {
        let tree = sample();
        let first = Position::from([0]);
        let last = Position::from([4]);
        assert_eq!(tree.left_sibling(&first), None);
        assert_eq!(tree.right_sibling(&first), Some(Position::from([1])));
        assert_eq!(tree.left_sibling(&last), Some(Position::from([3])));
        assert_eq!(tree.right_sibling(&last), None);
        assert_eq!(tree.left_sibling(&Position::root()), None);
        assert_eq!(tree.right_sibling(&Position::root()), None);
        assert_eq!(tree.right_sibling(&Position::from([9])), None);
    }

    #[test]
    fn test_substitute_is_non_destructive() {
        let tree = sample();
        let clubs = tree.subtree_at(&Position::from([2])).unwrap();
        let swapped = tree.substitute(&Position::from([0]), clubs).unwrap();

        assert_eq!(
            swapped.flatten(),
            "(NP (NP (NNS clubs)) (, ,) (NP (NNS clubs)) (CC and) (NP (NNS restaurants)))"
        );
        assert_eq!(
            tree.flatten(),
            "(NP (NP (NNS bars)) (, ,) (NP (NNS clubs)) (CC and) (NP (NNS restaurants)))"
        );
        // Untouched subtrees are shared
        assert!(Arc::ptr_eq(
            &tree.subtree_at(&Position::from([4])).unwrap(),
            &swapped.subtree_at(&Position::from([4])).unwrap()
        ));
    }

    #[test]
    fn test_substitute_root() {
        let tree = sample();
        let replaced = tree
            .substitute(&Position::root(), Arc::new(Node::leaf("x")))
            .unwrap();
        assert_eq!(replaced.flatten(), "x");
    }

    #[test]
    fn test_substitute_invalid_position() {
        let tree = sample();
        let err = tree
            .substitute(&Position::from([7]), Arc::new(Node::leaf("x")))
            .unwrap_err();
        assert_eq!(err.position, Position::from([7]));
        assert_eq!(err.depth, 0);
    }

    #[test]
    fn test_pre_order_positions() {
        let tree: Tree = "(S (NP I) (VP (V enjoyed)))".parse().unwrap();
        let positions: Vec<String> = tree
            .pre_order_iter()
            .map(|(position, node)| format!("{position}{}", node.label()))
            .collect();
        assert_eq!(
            positions,
            vec!["()S", "(0)NP", "(0, 0)I", "(1)VP", "(1, 0)V", "(1, 0, 0)enjoyed"]
        );
    }

    #[test]
    fn test_leaves_sentence_and_counts() {
        let tree = sample();
        assert_eq!(tree.leaves(), vec!["bars", ",", "clubs", "and", "restaurants"]);
        assert_eq!(tree.sentence(), "bars , clubs and restaurants");
        assert_eq!(tree.num_nodes(), 14);
        assert_eq!(tree.height(), 3);
    }
}
