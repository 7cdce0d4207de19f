//! Visitor pattern for syntax tree traversal.
//!
//! - [`Visitor`] - read-only traversal trait
//! - [`walk_node`] - dispatch function for type-specific visitors
//! - [`walk_children`] - traverse all children of a node
//!
//! # Example
//!
//! ```rust
//! use mdsq_ast::{AstArena, MdNode, NodeType, Span};
//! use mdsq_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_text(&mut self, node: &MdNode<'a>) -> VisitResult {
//!         if let Some(text) = node.value {
//!             self.texts.push(text);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let text = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(0, 5), "hello"));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let root = MdNode::new_parent(NodeType::Root, Span::new(0, 5), children);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! walk_node(&mut collector, &root);
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};
