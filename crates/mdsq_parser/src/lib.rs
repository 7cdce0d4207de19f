//! # mdsq_parser
//!
//! Markdown parser for the mdsq core.
//!
//! This crate converts Markdown source text into a position-annotated
//! [`MdNode`] tree. Parsing is total: every input produces a tree, and
//! malformed markup degrades to literal text rather than failing. Block
//! structure (paragraphs, headings, lists, block quotes, code blocks,
//! thematic breaks) is recognized first; text-bearing blocks delegate their
//! content to the inline pass (emphasis, strong, links, images, code spans,
//! line breaks).
//!
//! ## Example
//!
//! ```rust
//! use mdsq_ast::{AstArena, NodeType};
//! use mdsq_parser::MarkdownParser;
//!
//! let arena = AstArena::new();
//! let parser = MarkdownParser::new();
//! let root = parser.parse(&arena, "# Hello\n\nThis is a paragraph.");
//!
//! assert_eq!(root.node_type, NodeType::Root);
//! assert_eq!(root.children.len(), 2);
//! ```

mod block;
mod inline;
mod line_index;

pub use line_index::LineIndex;

use mdsq_ast::{AstArena, MdNode, NodeType, Span};

use crate::block::{BlockParser, split_lines};

/// Markdown parser producing arena-allocated syntax trees.
///
/// The parser holds no state; one instance may be shared freely across
/// threads and invocations.
#[derive(Debug, Default)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses the source text into a syntax tree rooted at a `Root` node
    /// spanning the entire input.
    ///
    /// Never fails: unmatched or ambiguous markup is parsed as literal text.
    pub fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> MdNode<'a> {
        let lines = split_lines(source);
        let blocks = BlockParser::new(arena).parse(&lines);
        let children = arena.alloc_slice_copy(&blocks);
        MdNode::new_parent(NodeType::Root, Span::new(0, source.len() as u32), children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty_input() {
        let arena = AstArena::new();
        let root = MarkdownParser::new().parse(&arena, "");

        assert_eq!(root.node_type, NodeType::Root);
        assert_eq!(root.span, Span::new(0, 0));
        assert!(root.children.is_empty());
    }

    #[test]
    fn parse_blank_input_has_no_children() {
        let arena = AstArena::new();
        let root = MarkdownParser::new().parse(&arena, "\n\n  \n");

        assert_eq!(root.span, Span::new(0, 5));
        assert!(root.children.is_empty());
    }

    #[test]
    fn root_span_covers_entire_input() {
        let arena = AstArena::new();
        let source = "# Title\n\nBody text.\n";
        let root = MarkdownParser::new().parse(&arena, source);

        assert_eq!(root.span, Span::new(0, source.len() as u32));
    }

    #[test]
    fn parse_is_deterministic() {
        let arena1 = AstArena::new();
        let arena2 = AstArena::new();
        let source = "para *one*\n\n- a\n- b\n\n> quote";
        let parser = MarkdownParser::new();

        let a = parser.parse(&arena1, source);
        let b = parser.parse(&arena2, source);

        fn collect(node: &MdNode<'_>, out: &mut Vec<(NodeType, u32, u32)>) {
            out.push((node.node_type, node.span.start, node.span.end));
            for child in node.children {
                collect(child, out);
            }
        }

        let mut flat_a = Vec::new();
        let mut flat_b = Vec::new();
        collect(&a, &mut flat_a);
        collect(&b, &mut flat_b);
        assert_eq!(flat_a, flat_b);
    }
}
