//! Visitor trait for traversing syntax tree nodes.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! allowing you to override only the node types you care about.

use std::ops::ControlFlow;

use crate::MdNode;

use super::walk::{walk_children, walk_node};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing syntax tree nodes without modification.
///
/// Container visitors default to walking children; leaf visitors default to
/// continuing. Return `ControlFlow::Break(())` to stop early; the `?`
/// operator propagates it.
pub trait Visitor<'a>: Sized {
    /// Called before visiting any node. Can be used to set up context.
    #[inline]
    fn enter_node(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a node and all its children.
    #[inline]
    fn exit_node(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits any node by dispatching to the type-specific method.
    #[inline]
    fn visit_node(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_node(self, node)
    }

    // === Block-level node visitors ===

    /// Visit the Root node.
    fn visit_root(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Paragraph node.
    fn visit_paragraph(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Heading node.
    fn visit_heading(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a BlockQuote node.
    fn visit_block_quote(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a List node.
    fn visit_list(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a ListItem node.
    fn visit_list_item(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a CodeBlock node.
    fn visit_code_block(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Text leaf
    }

    /// Visit a ThematicBreak node.
    fn visit_thematic_break(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Leaf node
    }

    // === Inline-level node visitors ===

    /// Visit a Text node.
    fn visit_text(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Text leaf
    }

    /// Visit an Emphasis node.
    fn visit_emphasis(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Strong node.
    fn visit_strong(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Link node.
    fn visit_link(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit an Image node. Children hold the alt text.
    fn visit_image(&mut self, node: &MdNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a CodeSpan node.
    fn visit_code_span(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Text leaf
    }

    /// Visit a LineBreak node.
    fn visit_line_break(&mut self, _node: &MdNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Leaf node
    }
}
