//! MdNode definition.
//!
//! The core AST node type shared by the parser, the row materializer and the
//! HTML renderer.

use crate::{NodeType, Span};

/// A node in the Markdown syntax tree.
///
/// Nodes are small `Copy` values designed to be allocated in an arena; child
/// lists are arena slices, so a whole tree is freed in one go with its arena.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
#[derive(Debug, Clone, Copy)]
pub struct MdNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the source text.
    pub span: Span,

    /// Child nodes (for container nodes).
    pub children: &'a [MdNode<'a>],

    /// Text value (for text-bearing nodes: Text, CodeSpan, CodeBlock).
    pub value: Option<&'a str>,

    /// Additional node-specific metadata.
    pub data: NodeData<'a>,
}

/// Typed per-node payload.
///
/// One case per metadata-bearing node type, carrying only its relevant
/// fields. The uniform nullable `details` column is projected from this at
/// the materialization boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeData<'a> {
    /// No extra metadata.
    #[default]
    None,
    /// Heading level (1-6).
    Heading(u8),
    /// List attributes.
    List(ListData),
    /// Code block info-string language, if any.
    CodeBlock(Option<&'a str>),
    /// Link or Image destination and title.
    Link(LinkData<'a>),
}

/// Destination and optional title of a Link or Image node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkData<'a> {
    /// Destination URL.
    pub url: &'a str,
    /// Optional title.
    pub title: Option<&'a str>,
}

/// Attributes of a List node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListData {
    /// True for ordered lists.
    pub ordered: bool,
    /// Start number of an ordered list.
    pub start: Option<u32>,
}

impl<'a> MdNode<'a> {
    /// Creates a new container node with children.
    #[inline]
    pub const fn new_parent(node_type: NodeType, span: Span, children: &'a [MdNode<'a>]) -> Self {
        Self {
            node_type,
            span,
            children,
            value: None,
            data: NodeData::None,
        }
    }

    /// Creates a new text-bearing node.
    #[inline]
    pub const fn new_text(node_type: NodeType, span: Span, value: &'a str) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: Some(value),
            data: NodeData::None,
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: None,
            data: NodeData::None,
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node carries a text value.
    #[inline]
    pub const fn is_text(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the link metadata for Link and Image nodes.
    #[inline]
    pub const fn link_data(&self) -> Option<&LinkData<'a>> {
        match &self.data {
            NodeData::Link(data) => Some(data),
            _ => None,
        }
    }
}

impl<'a> NodeData<'a> {
    /// Creates node data for a heading.
    #[inline]
    pub const fn heading(level: u8) -> Self {
        Self::Heading(level)
    }

    /// Creates node data for a link or image.
    #[inline]
    pub const fn link(url: &'a str, title: Option<&'a str>) -> Self {
        Self::Link(LinkData { url, title })
    }

    /// Creates node data for a code block.
    #[inline]
    pub const fn code_block(language: Option<&'a str>) -> Self {
        Self::CodeBlock(language)
    }

    /// Creates node data for a list.
    #[inline]
    pub const fn list(ordered: bool, start: Option<u32>) -> Self {
        Self::List(ListData { ordered, start })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AstArena;

    #[test]
    fn test_new_parent() {
        let arena = AstArena::new();
        let child = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(0, 5), "hello"));
        let children = arena.alloc_slice_copy(&[*child]);
        let node = MdNode::new_parent(NodeType::Paragraph, Span::new(0, 5), children);

        assert_eq!(node.node_type, NodeType::Paragraph);
        assert!(node.has_children());
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_new_text() {
        let node = MdNode::new_text(NodeType::Text, Span::new(0, 5), "hello");

        assert_eq!(node.node_type, NodeType::Text);
        assert!(node.is_text());
        assert_eq!(node.value, Some("hello"));
        assert!(!node.has_children());
    }

    #[test]
    fn test_new_leaf() {
        let node = MdNode::new_leaf(NodeType::ThematicBreak, Span::new(0, 3));

        assert_eq!(node.node_type, NodeType::ThematicBreak);
        assert!(!node.is_text());
        assert!(!node.has_children());
        assert!(node.value.is_none());
        assert_eq!(node.data, NodeData::None);
    }

    #[test]
    fn test_node_data_heading() {
        let data = NodeData::heading(2);
        assert!(matches!(data, NodeData::Heading(2)));
    }

    #[test]
    fn test_node_data_link() {
        let data = NodeData::link("https://example.com", Some("Example"));
        match data {
            NodeData::Link(link) => {
                assert_eq!(link.url, "https://example.com");
                assert_eq!(link.title, Some("Example"));
            }
            _ => panic!("Expected Link variant"),
        }
    }

    #[test]
    fn test_node_data_link_without_title() {
        let data = NodeData::link("#anchor", None);
        match data {
            NodeData::Link(link) => {
                assert_eq!(link.url, "#anchor");
                assert!(link.title.is_none());
            }
            _ => panic!("Expected Link variant"),
        }
    }

    #[test]
    fn test_node_data_code_block() {
        assert!(matches!(
            NodeData::code_block(Some("rust")),
            NodeData::CodeBlock(Some("rust"))
        ));
        assert!(matches!(
            NodeData::code_block(None),
            NodeData::CodeBlock(None)
        ));
    }

    #[test]
    fn test_node_data_list() {
        let data = NodeData::list(true, Some(3));
        match data {
            NodeData::List(list) => {
                assert!(list.ordered);
                assert_eq!(list.start, Some(3));
            }
            _ => panic!("Expected List variant"),
        }
    }

    #[test]
    fn test_link_data_accessor() {
        let mut node = MdNode::new_parent(NodeType::Link, Span::new(0, 10), &[]);
        node.data = NodeData::link("#yoyo", None);

        let link = node.link_data().expect("link data");
        assert_eq!(link.url, "#yoyo");
        assert!(node.value.is_none());
    }

    #[test]
    fn test_nested_container_nodes() {
        let arena = AstArena::new();

        let text = arena.alloc(MdNode::new_text(NodeType::Text, Span::new(1, 5), "text"));
        let text_children = arena.alloc_slice_copy(&[*text]);

        let emphasis = arena.alloc(MdNode::new_parent(
            NodeType::Emphasis,
            Span::new(0, 6),
            text_children,
        ));
        let emphasis_children = arena.alloc_slice_copy(&[*emphasis]);

        let paragraph = MdNode::new_parent(NodeType::Paragraph, Span::new(0, 6), emphasis_children);

        assert_eq!(paragraph.node_type, NodeType::Paragraph);
        assert_eq!(paragraph.children[0].node_type, NodeType::Emphasis);
        assert_eq!(paragraph.children[0].children[0].value, Some("text"));
    }

    #[test]
    fn test_node_data_default() {
        assert_eq!(NodeData::default(), NodeData::None);
    }
}
