//! Root-relative addressing of nodes.

use std::fmt;
use std::ops::Deref;
use thiserror::Error;

// =#========================================================================#=
// POSITION
// =#========================================================================#=
/// Sequence of child indices leading from the root to a node.
///
/// The root is the empty position. A position is only meaningful with
/// respect to the tree it was computed on.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Default)]
pub struct Position(Vec<usize>);

impl Position {
    /// Position of the root.
    pub fn root() -> Self {
        Position(Vec::new())
    }

    /// Returns whether this is the root position.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of the `index`-th child of the node at this position.
    pub fn child(&self, index: usize) -> Self {
        let mut path = Vec::with_capacity(self.0.len() + 1);
        path.extend_from_slice(&self.0);
        path.push(index);
        Position(path)
    }

    /// Position of the parent, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        Some(Position(parent.to_vec()))
    }

    /// Index of this node among its siblings, `None` for the root.
    pub fn last_index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Position of the sibling with the given index, `None` for the root.
    pub(crate) fn with_last_index(&self, index: usize) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        let mut path = parent.to_vec();
        path.push(index);
        Some(Position(path))
    }

    /// Number of steps from the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl Deref for Position {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<usize>> for Position {
    fn from(path: Vec<usize>) -> Self {
        Position(path)
    }
}

impl From<&[usize]> for Position {
    fn from(path: &[usize]) -> Self {
        Position(path.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Position {
    fn from(path: [usize; N]) -> Self {
        Position(path.to_vec())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, ")")
    }
}

// =#========================================================================#=
// INVALID POSITION ERROR
// =#========================================================================#=
/// A position does not resolve to a node of the tree it was applied to.
///
/// Positions produced by this crate always resolve on the tree they were
/// computed on, so this error points to positions used across trees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid position {position}: no child at step {depth}")]
pub struct InvalidPositionError {
    /// The offending position
    pub position: Position,
    /// Index into the position of the first step that failed to resolve
    pub depth: usize,
}
