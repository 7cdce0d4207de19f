//! Walk functions for AST traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern and
//! are used by the default implementations in the `Visitor` trait.

use std::ops::ControlFlow;

use crate::{MdNode, NodeType};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate type-specific visitor
/// method, bracketed by the `enter_node`/`exit_node` hooks.
pub fn walk_node<'a, V>(visitor: &mut V, node: &MdNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;

    let result = match node.node_type {
        // Block-level nodes
        NodeType::Root => visitor.visit_root(node),
        NodeType::Paragraph => visitor.visit_paragraph(node),
        NodeType::Heading => visitor.visit_heading(node),
        NodeType::BlockQuote => visitor.visit_block_quote(node),
        NodeType::List => visitor.visit_list(node),
        NodeType::ListItem => visitor.visit_list_item(node),
        NodeType::CodeBlock => visitor.visit_code_block(node),
        NodeType::ThematicBreak => visitor.visit_thematic_break(node),

        // Inline-level nodes
        NodeType::Text => visitor.visit_text(node),
        NodeType::Emphasis => visitor.visit_emphasis(node),
        NodeType::Strong => visitor.visit_strong(node),
        NodeType::Link => visitor.visit_link(node),
        NodeType::Image => visitor.visit_image(node),
        NodeType::CodeSpan => visitor.visit_code_span(node),
        NodeType::LineBreak => visitor.visit_line_break(node),
    };

    result?;

    visitor.exit_node(node)
}

/// Walks all children of a node, supporting early termination via
/// `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &MdNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, Span};

    /// A simple visitor that counts nodes of each type.
    struct NodeCounter {
        root_count: usize,
        paragraph_count: usize,
        text_count: usize,
        total_count: usize,
    }

    impl NodeCounter {
        fn new() -> Self {
            Self {
                root_count: 0,
                paragraph_count: 0,
                text_count: 0,
                total_count: 0,
            }
        }
    }

    impl<'a> Visitor<'a> for NodeCounter {
        fn enter_node(&mut self, _node: &MdNode<'a>) -> VisitResult {
            self.total_count += 1;
            ControlFlow::Continue(())
        }

        fn visit_root(&mut self, node: &MdNode<'a>) -> VisitResult {
            self.root_count += 1;
            walk_children(self, node)
        }

        fn visit_paragraph(&mut self, node: &MdNode<'a>) -> VisitResult {
            self.paragraph_count += 1;
            walk_children(self, node)
        }

        fn visit_text(&mut self, _node: &MdNode<'a>) -> VisitResult {
            self.text_count += 1;
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn walk_node_visits_single_text_node() {
        let arena = AstArena::new();
        let text = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(0, 5), "hello"));

        let mut counter = NodeCounter::new();
        let result = walk_node(&mut counter, text);

        assert!(result.is_continue());
        assert_eq!(counter.text_count, 1);
        assert_eq!(counter.total_count, 1);
    }

    #[test]
    fn walk_node_visits_nested_structure() {
        let arena = AstArena::new();

        // Root -> Paragraph -> [Text, Text]
        let text1 = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(0, 5), "hello"));
        let text2 = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(6, 11), "world"));
        let para_children = arena.alloc_slice_copy(&[*text1, *text2]);
        let para = arena.alloc(MdNode::new_parent(
            NodeType::Paragraph,
            Span::new(0, 11),
            para_children,
        ));
        let root_children = arena.alloc_slice_copy(&[*para]);
        let root = arena.alloc(MdNode::new_parent(
            NodeType::Root,
            Span::new(0, 11),
            root_children,
        ));

        let mut counter = NodeCounter::new();
        let result = walk_node(&mut counter, root);

        assert!(result.is_continue());
        assert_eq!(counter.root_count, 1);
        assert_eq!(counter.paragraph_count, 1);
        assert_eq!(counter.text_count, 2);
        assert_eq!(counter.total_count, 4);
    }

    /// A visitor that stops after finding the first Text node.
    struct FirstTextFinder<'a> {
        found: Option<&'a str>,
    }

    impl<'a> Visitor<'a> for FirstTextFinder<'a> {
        fn visit_text(&mut self, node: &MdNode<'a>) -> VisitResult {
            if let Some(text) = node.value {
                self.found = Some(text);
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn walk_node_supports_early_termination() {
        let arena = AstArena::new();
        let text1 = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(0, 5), "first"));
        let text2 = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(6, 12), "second"));
        let children = arena.alloc_slice_copy(&[*text1, *text2]);
        let para = arena.alloc(MdNode::new_parent(
            NodeType::Paragraph,
            Span::new(0, 12),
            children,
        ));

        let mut finder = FirstTextFinder { found: None };
        let result = walk_node(&mut finder, para);

        assert!(result.is_break());
        assert_eq!(finder.found, Some("first"));
    }

    #[test]
    fn walk_children_empty_children() {
        let arena = AstArena::new();
        let para = arena.alloc(MdNode::new_parent(NodeType::Paragraph, Span::new(0, 0), &[]));

        let mut counter = NodeCounter::new();
        let result = walk_children(&mut counter, para);

        assert!(result.is_continue());
        assert_eq!(counter.total_count, 0);
    }

    #[test]
    fn walk_node_calls_enter_and_exit_hooks() {
        struct HookTracker {
            events: Vec<String>,
        }

        impl<'a> Visitor<'a> for HookTracker {
            fn enter_node(&mut self, node: &MdNode<'a>) -> VisitResult {
                self.events.push(format!("enter:{}", node.node_type));
                ControlFlow::Continue(())
            }

            fn exit_node(&mut self, node: &MdNode<'a>) -> VisitResult {
                self.events.push(format!("exit:{}", node.node_type));
                ControlFlow::Continue(())
            }
        }

        let arena = AstArena::new();
        let text = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(0, 5), "hello"));
        let children = arena.alloc_slice_copy(&[*text]);
        let para = arena.alloc(MdNode::new_parent(
            NodeType::Paragraph,
            Span::new(0, 5),
            children,
        ));

        let mut tracker = HookTracker { events: Vec::new() };
        let _ = walk_node(&mut tracker, para);

        assert_eq!(
            tracker.events,
            vec![
                "enter:Paragraph",
                "enter:Text",
                "exit:Text",
                "exit:Paragraph"
            ]
        );
    }
}
