//! # mdsq_tree
//!
//! Flat, queryable trees for the mdsq core.
//!
//! The parser produces a nested, arena-allocated tree; this crate flattens
//! it into the relational shape the table-valued interface serves: one
//! [`Row`] per node, numbered level-order with parent back-references, each
//! carrying its full attribute set (type, value, details, span, positions,
//! raw source slice). The numbering is deterministic — it depends only on
//! the input text.
//!
//! ## Example
//!
//! ```rust
//! use mdsq_tree::Tree;
//!
//! let tree = Tree::parse("**bold**");
//! let root = tree.root();
//! assert_eq!(root.rowid, 0);
//! assert_eq!(root.parent, 0);
//! ```

mod builder;
mod rows;
mod tree;

pub use builder::TreeBuilder;
pub use rows::Rows;
pub use tree::{Row, Tree};
