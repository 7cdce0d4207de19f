//! # mdsq_ast
//!
//! AST definitions for the mdsq Markdown core.
//!
//! This crate provides the syntax tree types shared by the parser, the row
//! materializer and the HTML renderer. Nodes carry byte-accurate source spans
//! and a typed per-node payload, so invariants like "a Link always has a URL"
//! hold by construction.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All AST nodes for one parse are allocated in a single arena
//! - Memory is freed all at once when the tree's consumer is done
//!
//! ## Example
//!
//! ```rust
//! use mdsq_ast::{AstArena, MdNode, NodeType, Span};
//!
//! let arena = AstArena::new();
//!
//! // Nodes are allocated in the arena using constructor methods
//! let node = arena.alloc(MdNode::new_parent(
//!     NodeType::Root,
//!     Span::new(0, 100),
//!     &[],
//! ));
//! ```

mod arena;
mod node;
mod node_type;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{LinkData, ListData, MdNode, NodeData};
pub use node_type::NodeType;
pub use span::{Location, Position, Span};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
