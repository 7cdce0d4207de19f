//! # mdsq_core
//!
//! The externally observed surface of the mdsq Markdown query core: a
//! version query, a two-line diagnostic query, Markdown-to-HTML conversion,
//! and the Markdown-to-AST row interface.
//!
//! Host-database registration and value marshalling live outside this
//! workspace; the `md_*` entry points take raw byte arguments and perform
//! the arity and encoding validation the boundary requires, while the typed
//! functions below serve in-process callers directly.
//!
//! Every invocation is independent: a fresh tree is built per call, nothing
//! is cached or shared, and all functions are reentrant.
//!
//! ## Example
//!
//! ```rust
//! assert_eq!(mdsq_core::to_html("**bold**"), "<p><strong>bold</strong></p>");
//! assert!(mdsq_core::version().starts_with('v'));
//! ```

mod api;
mod error;

pub use api::{md_ast, md_debug, md_to_html, md_version};
pub use error::InvokeError;

pub use mdsq_render::HtmlRenderer;
pub use mdsq_tree::{Row, Rows, Tree};

use mdsq_ast::AstArena;
use mdsq_parser::MarkdownParser;
use tracing::debug;

/// The library version string; always begins with `v`.
pub fn version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

/// Two lines of build information: the version and the source commit.
pub fn debug_info() -> String {
    format!(
        "Version: v{}\nSource: {}\n",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    )
}

/// Converts Markdown source text to an HTML string.
///
/// Pure and deterministic: equal inputs produce byte-identical output.
pub fn to_html(source: &str) -> String {
    debug!(bytes = source.len(), "rendering markdown to html");
    let arena = AstArena::new();
    let root = MarkdownParser::new().parse(&arena, source);
    HtmlRenderer::new().render(&root)
}

/// Parses Markdown source text into the flat queryable tree.
pub fn ast(source: &str) -> Tree {
    debug!(bytes = source.len(), "materializing markdown ast");
    Tree::parse(source)
}
