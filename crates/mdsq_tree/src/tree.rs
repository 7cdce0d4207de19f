//! The finished, immutable tree and its row shape.

use mdsq_ast::{AstArena, NodeType};
use mdsq_parser::MarkdownParser;
use serde::Serialize;

use crate::builder::TreeBuilder;
use crate::rows::Rows;

/// One node's full attribute set, in the uniform nullable-column shape of
/// the table-valued interface.
///
/// `value` is non-null exactly for text-bearing node types (Text, CodeSpan,
/// CodeBlock); `details` is non-null exactly for metadata-bearing node types
/// (Link, Image, Heading, CodeBlock, List).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Node id: level-order position, starting at 0 for the root.
    pub rowid: i64,
    /// Id of the enclosing node; the root references itself.
    pub parent: i64,
    /// Node type discriminant.
    pub node_type: NodeType,
    /// Text payload of text-bearing nodes.
    pub value: Option<String>,
    /// JSON metadata of metadata-bearing nodes.
    pub details: Option<serde_json::Value>,
    /// Span start, byte offset into the source.
    pub start_offset: u32,
    /// 1-indexed line of the span start.
    pub start_line: u32,
    /// 1-indexed column of the span start, counted in characters.
    pub start_column: u32,
    /// Span end, exclusive byte offset into the source.
    pub end_offset: u32,
    /// 1-indexed line of the span end.
    pub end_line: u32,
    /// 1-indexed column of the span end, counted in characters.
    pub end_column: u32,
    /// Verbatim source slice between `start_offset` and `end_offset`.
    pub raw: String,
}

/// A finished parse: the flat node list indexed by id.
///
/// Built once per invocation and never mutated afterwards; consumers either
/// iterate the rows or hand the whole tree to the renderer path. There is no
/// shared state between trees.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub(crate) rows: Vec<Row>,
}

impl Tree {
    /// Parses source text and materializes the flat tree in one step.
    pub fn parse(source: &str) -> Tree {
        let arena = AstArena::new();
        let root = MarkdownParser::new().parse(&arena, source);
        TreeBuilder::new(source).build(&root)
    }

    /// The root row (always present, always id 0).
    pub fn root(&self) -> &Row {
        &self.rows[0]
    }

    /// Looks up a row by node id.
    pub fn get(&self, id: i64) -> Option<&Row> {
        usize::try_from(id).ok().and_then(|i| self.rows.get(i))
    }

    /// The parent row of the given row; the root is its own parent.
    pub fn parent_of(&self, row: &Row) -> Option<&Row> {
        self.get(row.parent)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A tree is never empty: even empty input has its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates rows in id order without consuming the tree.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Consumes the tree into the pull-based row cursor.
    pub fn into_rows(self) -> Rows {
        Rows::new(self.rows)
    }
}
