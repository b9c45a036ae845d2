//! Detection of coordinate noun-phrase groups.
//!
//! A coordinate group is a maximal run of sibling nodes alternating between
//! noun phrases and separators, `NP (SEP NP)+` with `SEP` one of `,` / `CC`,
//! that spans the children of some node starting from its first child.
//! Only the noun-phrase positions of a run are recorded, since only those
//! may be reordered.

use crate::model::{Node, Position, Tree};
use crate::variation::defs::{NOUN_PHRASE, SEPARATORS};
use std::ops::Deref;
use std::sync::Arc;

// =#========================================================================#=
// COORDINATE GROUP
// =#========================================================================#=
/// Positions of the noun phrases of one coordinate run, left to right.
///
/// # Invariants
/// - At least two positions, all children of the same parent
/// - Every position resolves to an `NP` phrase in the tree it was detected on
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct CoordinateGroup(Vec<Position>);

impl CoordinateGroup {
    /// Returns the noun-phrase positions of this group.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Position of the node whose children form this run.
    pub fn parent(&self) -> Option<Position> {
        self.0.first().and_then(Position::parent)
    }

    /// Returns whether `tree` has a coordinate run at exactly these positions.
    ///
    /// This fails for a tree in which the run was moved away from its parent
    /// position, e.g. by reordering an enclosing group.
    pub fn resolves_on(&self, tree: &Tree) -> bool {
        let Some(parent) = self.parent() else {
            return false;
        };
        tree.child_at(&parent)
            .ok()
            .and_then(|node| scan_run(&parent, node.children()))
            .is_some_and(|run| run == *self)
    }
}

impl Deref for CoordinateGroup {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// =#========================================================================#=
// DETECTION
// =#========================================================================#=
/// Finds all coordinate groups of a tree.
///
/// Every node's children are scanned once, from the first child, and all
/// subtrees are visited, so coordination nested inside a noun phrase is
/// found as well. Groups are returned in pre-order of their runs (top to
/// bottom, left to right), which is the order variations get generated in.
///
/// # Example
/// ```
/// use paratree::bracket::parse_str;
/// use paratree::variation::detect_groups;
///
/// let tree = parse_str("(NP (NP (NNS bars)) (, ,) (NP (NNS clubs)) (CC and) (NP (NNS pubs)))")?;
/// let groups = detect_groups(&tree);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].len(), 3);
/// # Ok::<(), paratree::parser::MalformedTreeError>(())
/// ```
pub fn detect_groups(tree: &Tree) -> Vec<CoordinateGroup> {
    tree.pre_order_iter()
        .filter_map(|(position, node)| scan_run(&position, node.children()))
        .collect()
}

/// What the run needs next while scanning siblings left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    NounPhrase,
    Separator,
}

/// Scans the children of the node at `parent` for an alternating run.
///
/// The whole sibling list must alternate; any break rejects the run, as
/// does a trailing separator. A lone noun phrase is not a group.
fn scan_run(parent: &Position, siblings: &[Arc<Node>]) -> Option<CoordinateGroup> {
    let mut slots = Vec::new();
    let mut expect = Expect::NounPhrase;

    for (index, sibling) in siblings.iter().enumerate() {
        expect = match expect {
            Expect::NounPhrase if is_noun_phrase(sibling) => {
                slots.push(parent.child(index));
                Expect::Separator
            }
            Expect::Separator if is_separator(sibling) => Expect::NounPhrase,
            _ => return None,
        };
    }

    if expect == Expect::NounPhrase || slots.len() < 2 {
        return None;
    }
    Some(CoordinateGroup(slots))
}

fn is_noun_phrase(node: &Node) -> bool {
    node.has_label(NOUN_PHRASE)
}

fn is_separator(node: &Node) -> bool {
    SEPARATORS.iter().any(|separator| node.has_label(separator))
}
