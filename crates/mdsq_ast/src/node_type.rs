//! Node type definitions.
//!
//! The closed set of syntactic constructs the parser produces. The serialized
//! names double as the `node_type` column of the row interface.

use serde::{Deserialize, Serialize};

/// The discriminant identifying which construct a tree node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeType {
    // Document structure
    /// Root document node.
    Root,

    // Block elements
    /// Paragraph containing inline content.
    Paragraph,
    /// ATX heading (levels 1-6).
    Heading,
    /// Block quote.
    BlockQuote,
    /// Ordered or unordered list.
    List,
    /// Item in a list.
    ListItem,
    /// Fenced or indented code block.
    CodeBlock,
    /// Thematic break (horizontal rule).
    ThematicBreak,

    // Inline elements
    /// Plain text.
    Text,
    /// Emphasis (italic).
    Emphasis,
    /// Strong emphasis (bold).
    Strong,
    /// Hyperlink.
    Link,
    /// Image.
    Image,
    /// Backtick-delimited inline code.
    CodeSpan,
    /// Hard line break.
    LineBreak,
}

impl NodeType {
    /// Returns true if this node type is a block element.
    #[inline]
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            NodeType::Root
                | NodeType::Paragraph
                | NodeType::Heading
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::CodeBlock
                | NodeType::ThematicBreak
        )
    }

    /// Returns true if this node type is an inline element.
    #[inline]
    pub const fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeType::Text
                | NodeType::Emphasis
                | NodeType::Strong
                | NodeType::Link
                | NodeType::Image
                | NodeType::CodeSpan
                | NodeType::LineBreak
        )
    }

    /// Returns true if this node type can contain children.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Root
                | NodeType::Paragraph
                | NodeType::Heading
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::Emphasis
                | NodeType::Strong
                | NodeType::Link
                | NodeType::Image
        )
    }

    /// Returns true if this node type carries a text value.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            NodeType::Text | NodeType::CodeSpan | NodeType::CodeBlock
        )
    }

    /// Returns true if this node type carries structured metadata
    /// (the `details` column of the row interface).
    #[inline]
    pub const fn has_details(&self) -> bool {
        matches!(
            self,
            NodeType::Link
                | NodeType::Image
                | NodeType::Heading
                | NodeType::CodeBlock
                | NodeType::List
        )
    }

    /// The serialized name of this node type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "Root",
            NodeType::Paragraph => "Paragraph",
            NodeType::Heading => "Heading",
            NodeType::BlockQuote => "BlockQuote",
            NodeType::List => "List",
            NodeType::ListItem => "ListItem",
            NodeType::CodeBlock => "CodeBlock",
            NodeType::ThematicBreak => "ThematicBreak",
            NodeType::Text => "Text",
            NodeType::Emphasis => "Emphasis",
            NodeType::Strong => "Strong",
            NodeType::Link => "Link",
            NodeType::Image => "Image",
            NodeType::CodeSpan => "CodeSpan",
            NodeType::LineBreak => "LineBreak",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_block() {
        assert!(NodeType::Paragraph.is_block());
        assert!(NodeType::Heading.is_block());
        assert!(!NodeType::Text.is_block());
        assert!(!NodeType::Emphasis.is_block());
    }

    #[test]
    fn test_is_inline() {
        assert!(NodeType::Text.is_inline());
        assert!(NodeType::Emphasis.is_inline());
        assert!(!NodeType::Paragraph.is_inline());
        assert!(!NodeType::Root.is_inline());
    }

    #[test]
    fn test_is_container() {
        assert!(NodeType::Root.is_container());
        assert!(NodeType::Paragraph.is_container());
        assert!(NodeType::Image.is_container());
        assert!(!NodeType::Text.is_container());
        assert!(!NodeType::CodeSpan.is_container());
        assert!(!NodeType::ThematicBreak.is_container());
    }

    #[test]
    fn test_is_text() {
        assert!(NodeType::Text.is_text());
        assert!(NodeType::CodeSpan.is_text());
        assert!(NodeType::CodeBlock.is_text());
        assert!(!NodeType::Paragraph.is_text());
        assert!(!NodeType::Link.is_text());
    }

    #[test]
    fn test_has_details() {
        assert!(NodeType::Link.has_details());
        assert!(NodeType::Image.has_details());
        assert!(NodeType::Heading.has_details());
        assert!(NodeType::CodeBlock.has_details());
        assert!(NodeType::List.has_details());
        assert!(!NodeType::Text.has_details());
        assert!(!NodeType::Paragraph.has_details());
        assert!(!NodeType::Root.has_details());
    }

    #[test]
    fn test_display_all_types() {
        let types = vec![
            (NodeType::Root, "Root"),
            (NodeType::Paragraph, "Paragraph"),
            (NodeType::Heading, "Heading"),
            (NodeType::BlockQuote, "BlockQuote"),
            (NodeType::List, "List"),
            (NodeType::ListItem, "ListItem"),
            (NodeType::CodeBlock, "CodeBlock"),
            (NodeType::ThematicBreak, "ThematicBreak"),
            (NodeType::Text, "Text"),
            (NodeType::Emphasis, "Emphasis"),
            (NodeType::Strong, "Strong"),
            (NodeType::Link, "Link"),
            (NodeType::Image, "Image"),
            (NodeType::CodeSpan, "CodeSpan"),
            (NodeType::LineBreak, "LineBreak"),
        ];

        for (node_type, expected) in types {
            assert_eq!(node_type.to_string(), expected);
        }
    }

    #[test]
    fn test_node_type_serialization() {
        let json = serde_json::to_string(&NodeType::CodeSpan).unwrap();
        assert_eq!(json, "\"CodeSpan\"");
    }

    #[test]
    fn test_node_type_deserialization() {
        let node_type: NodeType = serde_json::from_str("\"ThematicBreak\"").unwrap();
        assert_eq!(node_type, NodeType::ThematicBreak);
    }

    #[test]
    fn test_link_is_both_inline_and_container() {
        assert!(NodeType::Link.is_inline());
        assert!(NodeType::Link.is_container());
    }

    #[test]
    fn test_text_bearing_and_metadata_subsets_are_disjoint_except_code_block() {
        // CodeBlock is the only type in both subsets (value + language tag).
        for node_type in [
            NodeType::Root,
            NodeType::Paragraph,
            NodeType::Heading,
            NodeType::BlockQuote,
            NodeType::List,
            NodeType::ListItem,
            NodeType::CodeBlock,
            NodeType::ThematicBreak,
            NodeType::Text,
            NodeType::Emphasis,
            NodeType::Strong,
            NodeType::Link,
            NodeType::Image,
            NodeType::CodeSpan,
            NodeType::LineBreak,
        ] {
            if node_type.is_text() && node_type.has_details() {
                assert_eq!(node_type, NodeType::CodeBlock);
            }
        }
    }
}
