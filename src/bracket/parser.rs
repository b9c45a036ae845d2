//! Structs and logic to parse bracketed trees.
//!
//! This module provides the [BracketParser] struct, which parses single trees
//! or all trees of a source, as well as lazy parsing via a [BracketIterator].

use crate::bracket::defs::{MAX_DEPTH, NODE_DELIMITERS};
use crate::model::{Node, Tree};
use crate::parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::MalformedTreeError;
use std::sync::Arc;

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================#=
/// Parser for labeled trees in bracketed notation `(LABEL child child ...)`.
///
/// A child is either a nested parenthesized node or a bare token. Labels and
/// tokens are maximal runs of characters other than parentheses and
/// whitespace. Whitespace between elements is free-form, including line
/// breaks, so indented (pretty-printed) trees parse like single-line ones.
///
/// Parsing uses an explicit stack of open nodes. Nesting is capped at
/// [MAX_DEPTH] levels by default (see [`with_max_depth`](Self::with_max_depth)),
/// since rendering and dropping a tree recurse over its depth.
///
/// # Parsing
/// * [`parse_tree`](Self::parse_tree) - Parse the next tree
/// * [`parse_all`](Self::parse_all) - Parse all trees eagerly
/// * [`into_iter`](Self::into_iter) - Parse trees lazily
///
/// # Example
/// ```
/// use paratree::bracket::BracketParser;
/// use paratree::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("(NP (NNS clubs)) (NP (NNS bars))");
/// let trees = BracketParser::new().parse_all(&mut byte_parser).unwrap();
/// assert_eq!(trees.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BracketParser {
    /// Open nodes: label and children parsed so far
    open: Vec<(String, Vec<Arc<Node>>)>,
    max_depth: usize,
}

impl Default for BracketParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl BracketParser {
    /// Creates a new [BracketParser].
    pub fn new() -> Self {
        Self {
            open: Vec::new(),
            max_depth: MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth; deeper input is rejected with
    /// [MalformedTreeKind::TooDeep](crate::parser::MalformedTreeKind::TooDeep).
    ///
    /// A tree of a single phrase has depth 1.
    ///
    /// # Panics
    /// If `max_depth` is zero.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        assert!(max_depth > 0, "max_depth must be positive");
        self.max_depth = max_depth;
        self
    }

    /// Maximum nesting depth accepted by this parser.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses a single complete input: exactly one tree, optionally
    /// surrounded by whitespace.
    ///
    /// # Errors
    /// [MalformedTreeError] if the input is not a single well-formed tree,
    /// including trailing text after the tree.
    pub fn parse_single<B: ByteSource>(
        &mut self,
        parser: &mut ByteParser<B>,
    ) -> Result<Tree, MalformedTreeError> {
        parser.skip_whitespace();
        if parser.is_eof() {
            return Err(MalformedTreeError::empty_input(parser));
        }

        let tree = self.parse_tree(parser)?;

        parser.skip_whitespace();
        if parser.peek_is(b')') {
            return Err(MalformedTreeError::unbalanced_close(parser));
        }
        if !parser.is_eof() {
            return Err(MalformedTreeError::trailing_input(parser));
        }

        Ok(tree)
    }

    /// Parses all trees from the byte source until EOF.
    ///
    /// Trees are separated by optional whitespace.
    pub fn parse_all<B: ByteSource>(
        &mut self,
        parser: &mut ByteParser<B>,
    ) -> Result<Vec<Tree>, MalformedTreeError> {
        let mut trees = Vec::new();
        loop {
            parser.skip_whitespace();
            if parser.is_eof() {
                break;
            }
            trees.push(self.parse_tree(parser)?);
        }
        Ok(trees)
    }

    /// Consumes the parser and returns an iterator over trees from the byte source.
    pub fn into_iter<B: ByteSource>(self, byte_parser: ByteParser<B>) -> BracketIterator<B> {
        BracketIterator {
            byte_parser,
            parser: self,
            done: false,
        }
    }

    /// Parses the next tree from the given [ByteParser].
    ///
    /// Leading whitespace is skipped; the parser is left directly after the
    /// closing parenthesis of the root.
    ///
    /// # Errors
    /// [MalformedTreeError] if parentheses are unbalanced, a label is
    /// missing, nesting exceeds the maximum depth, or the input does not
    /// start with `(`.
    pub fn parse_tree<B: ByteSource>(
        &mut self,
        parser: &mut ByteParser<B>,
    ) -> Result<Tree, MalformedTreeError> {
        self.open.clear();

        parser.skip_whitespace();
        if parser.peek_is(b')') {
            return Err(MalformedTreeError::unbalanced_close(parser));
        }
        if !parser.peek_is(b'(') {
            return Err(MalformedTreeError::expected_open(parser));
        }

        loop {
            parser.skip_whitespace();
            match parser.peek() {
                None => return Err(MalformedTreeError::unexpected_eof(parser)),
                Some(b'(') => self.open_node(parser)?,
                Some(b')') => {
                    parser.next_byte();
                    if let Some(root) = self.close_node() {
                        return Ok(Tree::new(root));
                    }
                }
                Some(_) => {
                    let token = parser.parse_token(NODE_DELIMITERS)?;
                    self.push_child(Node::Leaf(token));
                }
            }
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl BracketParser {
    /// Parses `(` followed by a label and opens a new node.
    fn open_node<B: ByteSource>(
        &mut self,
        parser: &mut ByteParser<B>,
    ) -> Result<(), MalformedTreeError> {
        if self.open.len() >= self.max_depth {
            return Err(MalformedTreeError::too_deep(self.max_depth, parser));
        }
        if !parser.consume_if(b'(') {
            return Err(MalformedTreeError::expected_open(parser));
        }
        parser.skip_whitespace();
        let label = parser.parse_token(NODE_DELIMITERS)?;
        if label.is_empty() {
            return Err(MalformedTreeError::missing_label(parser));
        }
        self.open.push((label, Vec::new()));
        Ok(())
    }

    /// Closes the innermost open node and attaches it to its parent.
    ///
    /// Returns the node if it was the root.
    fn close_node(&mut self) -> Option<Node> {
        let (label, children) = self.open.pop()?;
        let node = Node::phrase_shared(label, children);
        match self.open.last_mut() {
            Some((_, siblings)) => {
                siblings.push(Arc::new(node));
                None
            }
            None => Some(node),
        }
    }

    fn push_child(&mut self, node: Node) {
        if let Some((_, children)) = self.open.last_mut() {
            children.push(Arc::new(node));
        }
    }
}

// =#========================================================================#=
// BRACKET ITERATOR (lazy parser)
// =#========================================================================#=
/// Iterator to parse bracketed trees.
///
/// Created by [BracketParser::into_iter()].
/// Yields `Result<Tree, MalformedTreeError>` for each tree and stops after
/// the first error.
pub struct BracketIterator<B: ByteSource> {
    parser: BracketParser,
    byte_parser: ByteParser<B>,
    done: bool,
}

impl<B: ByteSource> Iterator for BracketIterator<B> {
    type Item = Result<Tree, MalformedTreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.byte_parser.skip_whitespace();
        if self.byte_parser.is_eof() {
            self.done = true;
            return None;
        }

        let result = self.parser.parse_tree(&mut self.byte_parser);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MalformedTreeKind;

    fn parse(text: &str) -> Result<Tree, MalformedTreeError> {
        BracketParser::new().parse_single(&mut ByteParser::for_str(text))
    }

    #[test]
    fn test_parse_simple() {
        let tree = parse("(S (NP I) (VP (V enjoyed) (NP my cookie)))").unwrap();
        let root = tree.root();
        assert_eq!(root.label(), "S");
        assert_eq!(root.num_children(), 2);
        let object = &root.children()[1].children()[1];
        assert!(object.has_label("NP"));
        assert_eq!(object.num_children(), 2);
        assert!(object.children()[0].is_leaf());
    }

    #[test]
    fn test_parse_whitespace_after_open_paren() {
        let tree = parse("( S ( NP I ) )").unwrap();
        assert_eq!(tree.flatten(), "(S (NP I))");
    }

    #[test]
    fn test_parse_empty_phrase() {
        let tree = parse("(S (X) (NP I))").unwrap();
        assert_eq!(tree.root().children()[0].num_children(), 0);
        assert!(tree.root().children()[0].is_phrase());
    }

    #[test]
    fn test_errors() {
        let kind = |text: &str| parse(text).unwrap_err().kind().clone();

        assert_eq!(kind(""), MalformedTreeKind::EmptyInput);
        assert_eq!(kind("   \n"), MalformedTreeKind::EmptyInput);
        assert_eq!(kind("free-form English text"), MalformedTreeKind::ExpectedOpen(Some('f')));
        assert_eq!(kind("(S (NP I)"), MalformedTreeKind::UnexpectedEof);
        assert_eq!(kind("(S (NP I)))"), MalformedTreeKind::UnbalancedClose);
        assert_eq!(kind(") (S)"), MalformedTreeKind::UnbalancedClose);
        assert_eq!(kind("( (S (NP I)))"), MalformedTreeKind::MissingLabel);
        assert_eq!(kind("()"), MalformedTreeKind::MissingLabel);
        assert_eq!(kind("(S (NP I)) (S (NP you))"), MalformedTreeKind::TrailingInput);
        assert_eq!(kind("(S (NP I)) and more"), MalformedTreeKind::TrailingInput);
    }

    #[test]
    fn test_max_depth() {
        let nested = |depth: usize| format!("{}x{}", "(A ".repeat(depth), ")".repeat(depth));

        let mut parser = BracketParser::new().with_max_depth(3);
        assert_eq!(parser.max_depth(), 3);
        let tree = parser.parse_single(&mut ByteParser::for_str(&nested(3))).unwrap();
        assert_eq!(tree.height(), 3);

        let err = parser.parse_single(&mut ByteParser::for_str(&nested(4))).unwrap_err();
        assert_eq!(err.kind(), &MalformedTreeKind::TooDeep(3));
        assert_eq!(err.position(), 9);

        assert!(parse(&nested(MAX_DEPTH)).is_ok());
        assert_eq!(
            parse(&nested(MAX_DEPTH + 1)).unwrap_err().kind(),
            &MalformedTreeKind::TooDeep(MAX_DEPTH)
        );
    }

    #[test]
    fn test_unicode_whitespace_between_tokens() {
        let tree = parse("(NP\u{3000}(NN a\u{2003}\u{2003}b))").unwrap();
        assert_eq!(tree.leaves(), vec!["a", "b"]);
        assert_eq!(tree.flatten(), "(NP (NN a b))");
    }

    #[test]
    fn test_parser_is_reusable_after_error() {
        let mut parser = BracketParser::new();
        assert!(parser.parse_single(&mut ByteParser::for_str("(S (NP")).is_err());
        let tree = parser.parse_single(&mut ByteParser::for_str("(NP I)")).unwrap();
        assert_eq!(tree.flatten(), "(NP I)");
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let byte_parser = ByteParser::for_str("(A a)\n(B b)\n(C c\n");
        let results: Vec<_> = BracketParser::new().into_iter(byte_parser).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(results[2].is_err());
    }
}
