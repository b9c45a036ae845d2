//! Node module for constituency tree representation.

use std::sync::Arc;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node of a constituency parse tree.
///
/// A node is either:
/// - **Leaf**: a terminal token (a word), carries no label of its own
/// - **Phrase**: a labeled node (`NP`, `VP`, `CC`, `,`, ...) with an
///   ordered list of children; zero children is allowed
///
/// Children are held behind [Arc], so trees derived from one another by
/// [substitution](crate::model::Tree::substitute) share every untouched
/// subtree. Nodes are never mutated after construction.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Node {
    /// Terminal token
    Leaf(String),
    /// Labeled node with ordered children
    Phrase {
        /// Phrase or part-of-speech label
        label: String,
        /// Ordered children of this node
        children: Vec<Arc<Node>>,
    },
}

impl Node {
    /// Creates a new leaf carrying `token`.
    pub fn leaf<S: Into<String>>(token: S) -> Self {
        Node::Leaf(token.into())
    }

    /// Creates a new labeled node with the given children.
    pub fn phrase<S: Into<String>>(label: S, children: Vec<Node>) -> Self {
        Node::Phrase {
            label: label.into(),
            children: children.into_iter().map(Arc::new).collect(),
        }
    }

    /// Creates a new labeled node from already shared children.
    pub fn phrase_shared<S: Into<String>>(label: S, children: Vec<Arc<Node>>) -> Self {
        Node::Phrase {
            label: label.into(),
            children,
        }
    }

    /// Returns the label of a phrase, or the token of a leaf.
    pub fn label(&self) -> &str {
        match self {
            Node::Leaf(token) => token,
            Node::Phrase { label, .. } => label,
        }
    }

    /// Returns whether this node is a phrase labeled exactly `label`.
    ///
    /// Leaves never match, even if their token equals `label`.
    pub fn has_label(&self, label: &str) -> bool {
        matches!(self, Node::Phrase { label: l, .. } if l == label)
    }

    /// Returns whether this node is a terminal token.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns whether this node is a labeled phrase.
    pub fn is_phrase(&self) -> bool {
        matches!(self, Node::Phrase { .. })
    }

    /// Returns the children of this node (empty for a leaf).
    pub fn children(&self) -> &[Arc<Node>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Phrase { children, .. } => children,
        }
    }

    /// Returns the child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<&Arc<Node>> {
        self.children().get(index)
    }

    /// Returns the number of children of this node.
    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    /// Returns a copy of this phrase with the child at `index` replaced.
    ///
    /// All other children are shared with `self`.
    /// Returns `None` for a leaf or if `index` is out of range.
    pub(crate) fn with_child_replaced(&self, index: usize, replacement: Arc<Node>) -> Option<Node> {
        match self {
            Node::Leaf(_) => None,
            Node::Phrase { label, children } => {
                if index >= children.len() {
                    return None;
                }
                let mut children = children.clone();
                children[index] = replacement;
                Some(Node::Phrase {
                    label: label.clone(),
                    children,
                })
            }
        }
    }
}
