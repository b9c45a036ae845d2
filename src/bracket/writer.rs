//! Bracketed notation writing, including the canonical flattening.

use crate::bracket::defs::{DEFAULT_MARGIN, INDENT_STEP};
use crate::model::{Node, Tree};

/// Style for rendering a tree in bracketed notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStyle {
    /// Single line, one space between elements (the canonical form)
    Flat,
    /// Breaks nodes whose flat form does not fit within `margin` columns
    /// over several lines, indenting children by two spaces per level
    Indented {
        /// Maximum line width a node may use before it is broken up
        margin: usize,
    },
}

impl Default for BracketStyle {
    fn default() -> Self {
        BracketStyle::Indented {
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Returns the canonical single-line rendering of a tree.
///
/// The result is bracketed notation with every run of whitespace collapsed
/// to a single space and no leading or trailing whitespace. It is a pure
/// function of tree structure: equal trees flatten to equal strings, and
/// reordering children changes the string.
///
/// # Example
/// ```
/// use paratree::bracket::{flatten, parse_str};
///
/// let tree = parse_str("(NP\n  (NP (NNS bars) )\n  (CC and)\n  (NP (NNS clubs)))").unwrap();
/// assert_eq!(flatten(&tree), "(NP (NP (NNS bars)) (CC and) (NP (NNS clubs)))");
/// ```
pub fn flatten(tree: &Tree) -> String {
    to_bracketed(tree, &BracketStyle::Flat)
}

/// Renders a tree in bracketed notation with the given [BracketStyle].
pub fn to_bracketed(tree: &Tree, style: &BracketStyle) -> String {
    match style {
        BracketStyle::Flat => {
            let mut out = String::new();
            write_flat(tree.root(), &mut out);
            out
        }
        BracketStyle::Indented { margin } => write_indented(tree.root(), *margin, 0),
    }
}

/// Collapses every run of whitespace to a single space and trims both ends.
///
/// Applied to any rendering of a tree, this yields the same string as
/// [flatten], since labels and tokens contain no whitespace.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pending output of the flat writer
enum Step<'a> {
    Open(&'a Node),
    Space,
    Close,
}

fn write_flat(node: &Node, out: &mut String) {
    let mut stack = vec![Step::Open(node)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Space => out.push(' '),
            Step::Close => out.push(')'),
            Step::Open(Node::Leaf(token)) => out.push_str(token),
            Step::Open(Node::Phrase { label, children }) => {
                out.push('(');
                out.push_str(label);
                stack.push(Step::Close);
                for child in children.iter().rev() {
                    stack.push(Step::Open(child.as_ref()));
                    stack.push(Step::Space);
                }
            }
        }
    }
}

fn write_indented(node: &Node, margin: usize, indent: usize) -> String {
    let mut flat = String::new();
    write_flat(node, &mut flat);
    if flat.chars().count() + indent < margin {
        return flat;
    }

    // Only phrases get here, a leaf's flat form is its token
    let Node::Phrase { label, children } = node else {
        return flat;
    };

    let child_indent = indent + INDENT_STEP;
    let mut out = format!("({label}");
    for child in children {
        out.push('\n');
        out.push_str(&" ".repeat(child_indent));
        out.push_str(&write_indented(child, margin, child_indent));
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::parse_str;

    const GOTHIC_QUARTER: &str = "(S (NP (NP (DT The) (JJ charming) (NNP Gothic) (NNP Quarter) ) (, ,) (CC or) (NP (NNP Barri) (NNP Gòtic) ) ) (, ,) (VP (VBZ has) (NP (NP (JJ narrow) (JJ medieval) (NNS streets) ) (VP (VBN filled) (PP (IN with) (NP (NP (JJ trendy) (NNS bars) ) (, ,) (NP (NNS clubs) ) (CC and) (NP (JJ Catalan) (NNS restaurants) ) ) ) ) ) ) )";

    #[test]
    fn test_flat_collapses_spacing() {
        let tree = parse_str("(S   (NP I)\n\t(VP (V enjoyed) (NP my  cookie) ) )").unwrap();
        assert_eq!(flatten(&tree), "(S (NP I) (VP (V enjoyed) (NP my cookie)))");
    }

    #[test]
    fn test_flat_empty_phrase() {
        let tree = parse_str("(S (X ) (NP I))").unwrap();
        assert_eq!(flatten(&tree), "(S (X) (NP I))");
    }

    #[test]
    fn test_indented_short_tree_stays_on_one_line() {
        let tree = parse_str("(NP (NNS clubs))").unwrap();
        assert_eq!(to_bracketed(&tree, &BracketStyle::default()), "(NP (NNS clubs))");
    }

    #[test]
    fn test_indented_breaks_long_nodes() {
        let tree = parse_str("(NP (NP (NNS bars)) (CC and) (NP (NNS clubs)))").unwrap();
        let indented = to_bracketed(&tree, &BracketStyle::Indented { margin: 20 });
        assert_eq!(
            indented,
            "(NP\n  (NP (NNS bars))\n  (CC and)\n  (NP (NNS clubs)))"
        );
    }

    #[test]
    fn test_indented_normalizes_back_to_flat() {
        let tree = parse_str(GOTHIC_QUARTER).unwrap();
        let indented = to_bracketed(&tree, &BracketStyle::default());
        assert!(indented.contains('\n'));
        assert_eq!(normalize_whitespace(&indented), flatten(&tree));
        assert_eq!(flatten(&parse_str(&indented).unwrap()), flatten(&tree));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  (NP\n   (NNS clubs) )  "), "(NP (NNS clubs) )");
    }
}
