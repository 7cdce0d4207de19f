//! # mdsq_render
//!
//! HTML rendering for mdsq syntax trees.
//!
//! [`HtmlRenderer`] walks a parsed tree and emits a single HTML string with
//! a fixed node-type-to-markup mapping and context-sensitive escaping. The
//! renderer is a pure function of the tree: identical trees yield
//! byte-identical output, and no state survives a call.
//!
//! ## Example
//!
//! ```rust
//! use mdsq_ast::AstArena;
//! use mdsq_parser::MarkdownParser;
//! use mdsq_render::HtmlRenderer;
//!
//! let arena = AstArena::new();
//! let root = MarkdownParser::new().parse(&arena, "**bold**");
//! let html = HtmlRenderer::new().render(&root);
//! assert_eq!(html, "<p><strong>bold</strong></p>");
//! ```

mod escape;
mod html;

pub use escape::{escape_attr, escape_text};
pub use html::HtmlRenderer;
