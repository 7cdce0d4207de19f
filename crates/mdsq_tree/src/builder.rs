//! Flattening a parsed tree into the row list.

use std::collections::VecDeque;

use mdsq_ast::{MdNode, NodeData};
use mdsq_parser::LineIndex;
use serde_json::json;

use crate::tree::{Row, Tree};

/// Assigns node ids and projects nodes to their row shape.
///
/// Ids are assigned level-order: the root gets 0, then each dequeued node's
/// children are appended left-to-right, so every node's parent id is strictly
/// smaller than its own. `raw` is finalized from each node's span, and the
/// line index resolves byte offsets into 1-indexed line/column pairs.
pub struct TreeBuilder<'s> {
    source: &'s str,
    index: LineIndex<'s>,
}

impl<'s> TreeBuilder<'s> {
    /// Creates a builder over the source buffer the tree was parsed from.
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            index: LineIndex::new(source),
        }
    }

    /// Flattens the parse tree rooted at `root` into its row list.
    pub fn build(&self, root: &MdNode<'_>) -> Tree {
        let mut rows = Vec::new();
        let mut queue: VecDeque<(i64, &MdNode<'_>)> = VecDeque::new();
        // The root is its own parent: the self-reference marks "no parent".
        queue.push_back((0, root));

        while let Some((parent, node)) = queue.pop_front() {
            let id = rows.len() as i64;
            for child in node.children {
                queue.push_back((id, child));
            }
            rows.push(self.project(id, parent, node));
        }

        Tree { rows }
    }

    fn project(&self, id: i64, parent: i64, node: &MdNode<'_>) -> Row {
        let span = node.span;
        let start = self.index.position(span.start);
        let end = self.index.position(span.end);
        Row {
            rowid: id,
            parent,
            node_type: node.node_type,
            value: node.value.map(str::to_owned),
            details: details_json(&node.data),
            start_offset: span.start,
            start_line: start.line,
            start_column: start.column,
            end_offset: span.end,
            end_line: end.line,
            end_column: end.column,
            raw: self.source[span.start as usize..span.end as usize].to_owned(),
        }
    }
}

/// Projects the typed payload to the nullable JSON `details` column.
fn details_json(data: &NodeData<'_>) -> Option<serde_json::Value> {
    match data {
        NodeData::None => None,
        NodeData::Heading(level) => Some(json!({ "level": level })),
        NodeData::List(list) => Some(json!({ "ordered": list.ordered, "start": list.start })),
        NodeData::CodeBlock(language) => Some(json!({ "language": language })),
        NodeData::Link(link) => Some(json!({ "title": link.title, "url": link.url })),
    }
}
