//! Tree-to-HTML conversion.

use std::ops::ControlFlow;

use mdsq_ast::visitor::{VisitResult, Visitor, walk_children};
use mdsq_ast::{MdNode, NodeData, NodeType};

use crate::escape::{escape_attr_into, escape_text_into};

/// Renders a syntax tree to an HTML string.
///
/// Block-level siblings are joined with a newline and the root adds no
/// wrapper of its own, so a single-paragraph document renders to exactly
/// `<p>…</p>`. The renderer holds no state and may be shared freely.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders the tree rooted at `root` (normally a `Root` node).
    pub fn render(&self, root: &MdNode<'_>) -> String {
        let mut out = String::new();
        match root.node_type {
            NodeType::Root => self.render_blocks(root.children, &mut out),
            _ => self.render_node(root, &mut out),
        }
        out
    }

    fn render_blocks(&self, blocks: &[MdNode<'_>], out: &mut String) {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_node(block, out);
        }
    }

    fn render_inlines(&self, inlines: &[MdNode<'_>], out: &mut String) {
        for inline in inlines {
            self.render_node(inline, out);
        }
    }

    fn render_node(&self, node: &MdNode<'_>, out: &mut String) {
        match node.node_type {
            NodeType::Root => self.render_blocks(node.children, out),

            NodeType::Paragraph => {
                out.push_str("<p>");
                self.render_inlines(node.children, out);
                out.push_str("</p>");
            }

            NodeType::Heading => {
                let level = match node.data {
                    NodeData::Heading(level) => level,
                    _ => 1,
                };
                out.push_str(&format!("<h{level}>"));
                self.render_inlines(node.children, out);
                out.push_str(&format!("</h{level}>"));
            }

            NodeType::BlockQuote => {
                out.push_str("<blockquote>");
                if !node.children.is_empty() {
                    out.push('\n');
                    self.render_blocks(node.children, out);
                }
                out.push_str("\n</blockquote>");
            }

            NodeType::List => {
                let (ordered, start) = match node.data {
                    NodeData::List(list) => (list.ordered, list.start),
                    _ => (false, None),
                };
                if ordered {
                    match start {
                        Some(n) if n != 1 => out.push_str(&format!("<ol start=\"{n}\">")),
                        _ => out.push_str("<ol>"),
                    }
                } else {
                    out.push_str("<ul>");
                }
                out.push('\n');
                for item in node.children {
                    self.render_node(item, out);
                    out.push('\n');
                }
                out.push_str(if ordered { "</ol>" } else { "</ul>" });
            }

            NodeType::ListItem => {
                out.push_str("<li>");
                match node.children {
                    [] => {}
                    // A lone paragraph renders tight, without its <p>.
                    [only] if only.node_type == NodeType::Paragraph => {
                        self.render_inlines(only.children, out);
                    }
                    blocks => {
                        out.push('\n');
                        self.render_blocks(blocks, out);
                        out.push('\n');
                    }
                }
                out.push_str("</li>");
            }

            NodeType::CodeBlock => {
                out.push_str("<pre><code");
                if let NodeData::CodeBlock(Some(language)) = node.data {
                    out.push_str(" class=\"language-");
                    escape_attr_into(language, out);
                    out.push('"');
                }
                out.push('>');
                if let Some(value) = node.value {
                    if !value.is_empty() {
                        escape_text_into(value, out);
                        out.push('\n');
                    }
                }
                out.push_str("</code></pre>");
            }

            NodeType::ThematicBreak => out.push_str("<hr>"),

            NodeType::Text => {
                if let Some(value) = node.value {
                    escape_text_into(value, out);
                }
            }

            NodeType::Emphasis => {
                out.push_str("<em>");
                self.render_inlines(node.children, out);
                out.push_str("</em>");
            }

            NodeType::Strong => {
                out.push_str("<strong>");
                self.render_inlines(node.children, out);
                out.push_str("</strong>");
            }

            NodeType::Link => {
                out.push_str("<a href=\"");
                if let NodeData::Link(link) = node.data {
                    escape_attr_into(link.url, out);
                    out.push('"');
                    if let Some(title) = link.title {
                        out.push_str(" title=\"");
                        escape_attr_into(title, out);
                        out.push('"');
                    }
                } else {
                    out.push('"');
                }
                out.push('>');
                self.render_inlines(node.children, out);
                out.push_str("</a>");
            }

            NodeType::Image => {
                out.push_str("<img src=\"");
                let mut title = None;
                if let NodeData::Link(link) = node.data {
                    escape_attr_into(link.url, out);
                    title = link.title;
                }
                out.push_str("\" alt=\"");
                escape_attr_into(&plain_text(node), out);
                out.push('"');
                if let Some(title) = title {
                    out.push_str(" title=\"");
                    escape_attr_into(title, out);
                    out.push('"');
                }
                out.push('>');
            }

            NodeType::CodeSpan => {
                out.push_str("<code>");
                if let Some(value) = node.value {
                    escape_text_into(value, out);
                }
                out.push_str("</code>");
            }

            NodeType::LineBreak => out.push_str("<br>\n"),
        }
    }
}

/// Collects the plain text of a subtree (image alt text).
struct TextCollector {
    out: String,
}

impl<'a> Visitor<'a> for TextCollector {
    fn visit_text(&mut self, node: &MdNode<'a>) -> VisitResult {
        if let Some(value) = node.value {
            self.out.push_str(value);
        }
        ControlFlow::Continue(())
    }

    fn visit_code_span(&mut self, node: &MdNode<'a>) -> VisitResult {
        if let Some(value) = node.value {
            self.out.push_str(value);
        }
        ControlFlow::Continue(())
    }
}

fn plain_text(node: &MdNode<'_>) -> String {
    let mut collector = TextCollector { out: String::new() };
    let _ = walk_children(&mut collector, node);
    collector.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdsq_ast::AstArena;
    use mdsq_parser::MarkdownParser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(source: &str) -> String {
        let arena = AstArena::new();
        let root = MarkdownParser::new().parse(&arena, source);
        HtmlRenderer::new().render(&root)
    }

    #[test]
    fn strong_paragraph() {
        assert_eq!(render("**bold**"), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn link_paragraph() {
        assert_eq!(
            render("[Documentation](#docs)"),
            "<p><a href=\"#docs\">Documentation</a></p>"
        );
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[rstest]
    #[case("# t", "<h1>t</h1>")]
    #[case("## t", "<h2>t</h2>")]
    #[case("###### t", "<h6>t</h6>")]
    fn headings(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(render(source), expected);
    }

    #[test]
    fn emphasis() {
        assert_eq!(render("*it*"), "<p><em>it</em></p>");
    }

    #[test]
    fn code_span() {
        assert_eq!(render("`x < y`"), "<p><code>x &lt; y</code></p>");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render("a & b < c"), "<p>a &amp; b &lt; c</p>");
    }

    #[test]
    fn link_title_and_attr_escaping() {
        assert_eq!(
            render("[x](u \"a \\\"b\\\"\")"),
            "<p><a href=\"u\" title=\"a &quot;b&quot;\">x</a></p>"
        );
    }

    #[test]
    fn image_with_alt_and_title() {
        assert_eq!(
            render("![Alt *text*](pic.png \"T\")"),
            "<p><img src=\"pic.png\" alt=\"Alt text\" title=\"T\"></p>"
        );
    }

    #[test]
    fn code_block_with_language() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn code_block_escapes_content() {
        assert_eq!(
            render("```\na < b\n```"),
            "<pre><code>a &lt; b\n</code></pre>"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(render("```\n```"), "<pre><code></code></pre>");
    }

    #[test]
    fn block_quote() {
        assert_eq!(
            render("> quoted"),
            "<blockquote>\n<p>quoted</p>\n</blockquote>"
        );
    }

    #[test]
    fn unordered_list_is_tight() {
        assert_eq!(
            render("- Item 1\n- Item 2"),
            "<ul>\n<li>Item 1</li>\n<li>Item 2</li>\n</ul>"
        );
    }

    #[test]
    fn ordered_list_with_start() {
        assert_eq!(
            render("3. c\n4. d"),
            "<ol start=\"3\">\n<li>c</li>\n<li>d</li>\n</ol>"
        );
    }

    #[test]
    fn ordered_list_starting_at_one_has_no_start_attr() {
        assert_eq!(render("1. a"), "<ol>\n<li>a</li>\n</ol>");
    }

    #[test]
    fn nested_list_item_keeps_block_structure() {
        assert_eq!(
            render("- a\n  - b"),
            "<ul>\n<li>\n<p>a</p>\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>"
        );
    }

    #[test]
    fn thematic_break() {
        assert_eq!(render("---"), "<hr>");
    }

    #[test]
    fn hard_break() {
        assert_eq!(render("a  \nb"), "<p>a<br>\nb</p>");
    }

    #[test]
    fn blocks_join_with_newline_without_trailing_newline() {
        assert_eq!(render("# h\n\npara"), "<h1>h</h1>\n<p>para</p>");
    }

    #[test]
    fn render_is_deterministic() {
        let source = "# h\n\n> q *em* [l](#l \"t\")\n\n- a\n- b";
        assert_eq!(render(source), render(source));
    }
}
