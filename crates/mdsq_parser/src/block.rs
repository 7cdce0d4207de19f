//! Block parsing: structural constructs over a line table.
//!
//! The block pass works on a table of lines, each carrying the byte offset
//! of its first content byte. Container blocks (quotes, list items) strip
//! their markers and re-base the affected lines, then recurse — offsets keep
//! pointing into the original buffer throughout, so every node's span is
//! byte-accurate even deep inside containers.

use mdsq_ast::{AstArena, MdNode, NodeData, NodeType, Span};

use crate::inline::{Segment, parse_run};

/// One source line: content without the trailing newline, plus the byte
/// offset where that content starts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'s> {
    pub start: u32,
    pub text: &'s str,
}

/// Splits the source buffer into the line table. `\r\n` endings are
/// tolerated; the `\r` is excluded from line content.
pub(crate) fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0u32;
    for segment in source.split_inclusive('\n') {
        let mut text = segment.strip_suffix('\n').unwrap_or(segment);
        text = text.strip_suffix('\r').unwrap_or(text);
        lines.push(Line { start, text });
        start += segment.len() as u32;
    }
    lines
}

/// Recognizes block-level structure and delegates text runs to the inline
/// parser.
pub(crate) struct BlockParser<'a> {
    arena: &'a AstArena,
}

impl<'a> BlockParser<'a> {
    pub fn new(arena: &'a AstArena) -> Self {
        Self { arena }
    }

    /// Parses a sequence of lines into an ordered forest of block nodes.
    pub fn parse(&self, lines: &[Line<'_>]) -> Vec<MdNode<'a>> {
        let mut blocks = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            if is_blank(line.text) {
                i += 1;
                continue;
            }
            if let Some(fence) = fence_open(line.text) {
                let (node, next) = self.parse_fenced_code(lines, i, fence);
                blocks.push(node);
                i = next;
                continue;
            }
            if indent_width(line.text) >= 4 {
                let (node, next) = self.parse_indented_code(lines, i);
                blocks.push(node);
                i = next;
                continue;
            }
            if let Some((indent, _)) = blockquote_marker(line.text) {
                let (node, next) = self.parse_block_quote(lines, i, indent);
                blocks.push(node);
                i = next;
                continue;
            }
            if is_thematic_break(line.text) {
                let indent = indent_width(line.text) as u32;
                blocks.push(MdNode::new_leaf(
                    NodeType::ThematicBreak,
                    Span::new(
                        line.start + indent,
                        line.start + line.text.trim_end().len() as u32,
                    ),
                ));
                i += 1;
                continue;
            }
            if let Some(heading) = atx_heading(line.text) {
                blocks.push(self.parse_heading(line, heading));
                i += 1;
                continue;
            }
            if let Some(marker) = list_marker(line.text) {
                let (node, next) = self.parse_list(lines, i, marker);
                blocks.push(node);
                i = next;
                continue;
            }
            let (node, next) = self.parse_paragraph(lines, i);
            blocks.push(node);
            i = next;
        }
        blocks
    }

    fn parse_heading(&self, line: Line<'_>, heading: AtxHeading) -> MdNode<'a> {
        let (content_start, content_end) = heading.content;
        let children = if content_start < content_end {
            parse_run(
                self.arena,
                &[Segment {
                    start: line.start + content_start as u32,
                    text: &line.text[content_start..content_end],
                }],
            )
        } else {
            Vec::new()
        };
        let mut node = MdNode::new_parent(
            NodeType::Heading,
            Span::new(
                line.start + heading.span.0 as u32,
                line.start + heading.span.1 as u32,
            ),
            self.arena.alloc_slice_copy(&children),
        );
        node.data = NodeData::heading(heading.level);
        node
    }

    fn parse_fenced_code(
        &self,
        lines: &[Line<'_>],
        i: usize,
        fence: FenceOpen<'_>,
    ) -> (MdNode<'a>, usize) {
        let open = lines[i];
        let mut value = String::new();
        let mut j = i + 1;
        while j < lines.len() && !fence_close(lines[j].text, fence.ch, fence.len) {
            let text = lines[j].text;
            let strip = indent_width(text).min(fence.indent);
            if j > i + 1 {
                value.push('\n');
            }
            value.push_str(&text[strip..]);
            j += 1;
        }

        // An unclosed fence runs to end of input.
        let (end, next) = if j < lines.len() {
            (
                lines[j].start + lines[j].text.trim_end().len() as u32,
                j + 1,
            )
        } else {
            let last = lines[j - 1];
            (last.start + last.text.len() as u32, j)
        };

        let mut node = MdNode::new_text(
            NodeType::CodeBlock,
            Span::new(open.start + fence.indent as u32, end),
            self.arena.alloc_str(&value),
        );
        node.data =
            NodeData::code_block(fence.language.map(|lang| self.arena.alloc_str(lang)));
        (node, next)
    }

    fn parse_indented_code(&self, lines: &[Line<'_>], i: usize) -> (MdNode<'a>, usize) {
        let mut stripped: Vec<&str> = Vec::new();
        let mut j = i;
        let mut last = i;
        while j < lines.len() {
            let text = lines[j].text;
            if !is_blank(text) && indent_width(text) >= 4 {
                stripped.push(&text[4..]);
                last = j;
                j += 1;
            } else if is_blank(text) {
                // Interior blank lines belong to the block only when more
                // indented content follows.
                let mut k = j;
                while k < lines.len() && is_blank(lines[k].text) {
                    k += 1;
                }
                if k < lines.len() && indent_width(lines[k].text) >= 4 {
                    stripped.extend(std::iter::repeat_n("", k - j));
                    j = k;
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        let last_line = lines[last];
        let mut node = MdNode::new_text(
            NodeType::CodeBlock,
            Span::new(
                lines[i].start,
                last_line.start + last_line.text.len() as u32,
            ),
            self.arena.alloc_str(&stripped.join("\n")),
        );
        node.data = NodeData::code_block(None);
        (node, j)
    }

    fn parse_block_quote(
        &self,
        lines: &[Line<'_>],
        i: usize,
        indent: usize,
    ) -> (MdNode<'a>, usize) {
        let start = lines[i].start + indent as u32;
        let mut end = start;
        let mut sub: Vec<Line<'_>> = Vec::new();
        let mut j = i;
        while j < lines.len() {
            let line = lines[j];
            if let Some((_, rel)) = blockquote_marker(line.text) {
                sub.push(Line {
                    start: line.start + rel as u32,
                    text: &line.text[rel..],
                });
            } else if !is_blank(line.text)
                && !interrupts_paragraph(line.text)
                && sub.last().is_some_and(|l| !is_blank(l.text))
            {
                // Lazy paragraph continuation.
                sub.push(line);
            } else {
                break;
            }
            end = line.start + line.text.len() as u32;
            j += 1;
        }

        let children = self.parse(&sub);
        let node = MdNode::new_parent(
            NodeType::BlockQuote,
            Span::new(start, end),
            self.arena.alloc_slice_copy(&children),
        );
        (node, j)
    }

    fn parse_list(
        &self,
        lines: &[Line<'_>],
        i: usize,
        first_marker: ListMarker,
    ) -> (MdNode<'a>, usize) {
        let list_start = lines[i].start + first_marker.indent as u32;
        let mut items: Vec<MdNode<'a>> = Vec::new();
        let mut end = list_start;
        let mut marker = first_marker;
        let mut j = i;
        loop {
            let line = lines[j];
            let width = marker.content_rel;
            let item_start = line.start + marker.indent as u32;
            let mut item_end = line.start + line.text.len() as u32;
            let mut item_lines = vec![Line {
                start: line.start + width as u32,
                text: &line.text[width..],
            }];
            j += 1;

            while j < lines.len() {
                let l = lines[j];
                if is_blank(l.text) {
                    let mut k = j;
                    while k < lines.len() && is_blank(lines[k].text) {
                        k += 1;
                    }
                    if k < lines.len() && indent_width(lines[k].text) >= width {
                        for blank in &lines[j..k] {
                            item_lines.push(Line {
                                start: blank.start,
                                text: "",
                            });
                        }
                        j = k;
                    } else {
                        break;
                    }
                } else if indent_width(l.text) >= width {
                    item_lines.push(Line {
                        start: l.start + width as u32,
                        text: &l.text[width..],
                    });
                    item_end = l.start + l.text.len() as u32;
                    j += 1;
                } else if !interrupts_paragraph(l.text)
                    && item_lines.last().is_some_and(|il| !is_blank(il.text))
                {
                    // Lazy paragraph continuation.
                    item_lines.push(l);
                    item_end = l.start + l.text.len() as u32;
                    j += 1;
                } else {
                    break;
                }
            }

            let children = self.parse(&item_lines);
            items.push(MdNode::new_parent(
                NodeType::ListItem,
                Span::new(item_start, item_end),
                self.arena.alloc_slice_copy(&children),
            ));
            end = item_end;

            // Continue only on a compatible marker, skipping blank lines.
            let mut k = j;
            while k < lines.len() && is_blank(lines[k].text) {
                k += 1;
            }
            let next_marker = if k < lines.len() && !is_thematic_break(lines[k].text) {
                list_marker(lines[k].text)
            } else {
                None
            };
            match next_marker {
                Some(next)
                    if next.ordered == first_marker.ordered
                        && next.marker == first_marker.marker =>
                {
                    marker = next;
                    j = k;
                }
                _ => break,
            }
        }

        let mut node = MdNode::new_parent(
            NodeType::List,
            Span::new(list_start, end),
            self.arena.alloc_slice_copy(&items),
        );
        node.data = NodeData::list(
            first_marker.ordered,
            first_marker.ordered.then_some(first_marker.start),
        );
        (node, j)
    }

    fn parse_paragraph(&self, lines: &[Line<'_>], i: usize) -> (MdNode<'a>, usize) {
        let mut segments: Vec<Segment<'_>> = Vec::new();
        let mut j = i;
        while j < lines.len() {
            let line = lines[j];
            if is_blank(line.text) {
                break;
            }
            if j > i && interrupts_paragraph(line.text) {
                break;
            }
            let trimmed = line.text.trim_start();
            let lead = (line.text.len() - trimmed.len()) as u32;
            segments.push(Segment {
                start: line.start + lead,
                text: trimmed,
            });
            j += 1;
        }

        // Trailing whitespace on the final line is never significant.
        let last_index = segments.len() - 1;
        segments[last_index].text = segments[last_index].text.trim_end();

        let span = Span::new(segments[0].start, {
            let last = segments[last_index];
            last.start + last.text.len() as u32
        });
        let children = parse_run(self.arena, &segments);
        let node = MdNode::new_parent(
            NodeType::Paragraph,
            span,
            self.arena.alloc_slice_copy(&children),
        );
        (node, j)
    }
}

/// True when a line would start a block construct that interrupts a
/// paragraph. Indented code and ordered lists not starting at 1 do not.
fn interrupts_paragraph(text: &str) -> bool {
    is_thematic_break(text)
        || atx_heading(text).is_some()
        || fence_open(text).is_some()
        || blockquote_marker(text).is_some()
        || matches!(list_marker(text), Some(m) if !m.ordered || m.start == 1)
}

fn indent_width(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b' ').count()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn is_thematic_break(text: &str) -> bool {
    if indent_width(text) > 3 {
        return false;
    }
    let mut marker = None;
    let mut count = 0;
    for ch in text.chars() {
        match ch {
            ' ' | '\t' => {}
            '-' | '*' | '_' => {
                if marker.is_some() && marker != Some(ch) {
                    return false;
                }
                marker = Some(ch);
                count += 1;
            }
            _ => return false,
        }
    }
    count >= 3
}

#[derive(Debug, Clone, Copy)]
struct AtxHeading {
    level: u8,
    /// Construct span, relative to the line start.
    span: (usize, usize),
    /// Content span, relative to the line start.
    content: (usize, usize),
}

fn atx_heading(text: &str) -> Option<AtxHeading> {
    let indent = indent_width(text);
    if indent > 3 {
        return None;
    }
    let rest = &text[indent..];
    let level = rest.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let after = &rest[level..];
    if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
        return None;
    }

    let content_off = indent + level + (after.len() - after.trim_start().len());
    let mut content = text[content_off..].trim_end();

    // Optional closing hash run, only when detached from the content.
    let stripped = content.trim_end_matches('#');
    if stripped.len() != content.len() {
        if stripped.is_empty() {
            content = "";
        } else if stripped.ends_with(' ') || stripped.ends_with('\t') {
            content = stripped.trim_end();
        }
    }

    Some(AtxHeading {
        level: level as u8,
        span: (indent, text.trim_end().len()),
        content: (content_off, content_off + content.len()),
    })
}

#[derive(Debug, Clone, Copy)]
struct FenceOpen<'s> {
    ch: u8,
    len: usize,
    indent: usize,
    language: Option<&'s str>,
}

fn fence_open(text: &str) -> Option<FenceOpen<'_>> {
    let indent = indent_width(text);
    if indent > 3 {
        return None;
    }
    let rest = &text[indent..];
    let ch = *rest.as_bytes().first()?;
    if ch != b'`' && ch != b'~' {
        return None;
    }
    let len = rest.bytes().take_while(|&b| b == ch).count();
    if len < 3 {
        return None;
    }
    let info = rest[len..].trim();
    if ch == b'`' && info.contains('`') {
        return None;
    }
    Some(FenceOpen {
        ch,
        len,
        indent,
        language: info.split_whitespace().next(),
    })
}

fn fence_close(text: &str, ch: u8, min_len: usize) -> bool {
    if indent_width(text) > 3 {
        return false;
    }
    let rest = &text[indent_width(text)..];
    let len = rest.bytes().take_while(|&b| b == ch).count();
    len >= min_len && rest[len..].trim().is_empty()
}

/// Returns `(indent, content_rel)` for a `>` marker line.
fn blockquote_marker(text: &str) -> Option<(usize, usize)> {
    let indent = indent_width(text);
    if indent > 3 {
        return None;
    }
    let bytes = text.as_bytes();
    if bytes.get(indent) != Some(&b'>') {
        return None;
    }
    let mut rel = indent + 1;
    if bytes.get(rel) == Some(&b' ') {
        rel += 1;
    }
    Some((indent, rel))
}

#[derive(Debug, Clone, Copy)]
struct ListMarker {
    indent: usize,
    ordered: bool,
    start: u32,
    /// Bullet character, or the delimiter of an ordered marker.
    marker: u8,
    /// Offset of the item content, relative to the line start.
    content_rel: usize,
}

fn list_marker(text: &str) -> Option<ListMarker> {
    let indent = indent_width(text);
    if indent > 3 {
        return None;
    }
    let bytes = text.as_bytes();
    let rest = &bytes[indent..];
    let (ordered, start, marker, marker_len) = match rest.first()? {
        b @ (b'-' | b'+' | b'*') => (false, 0, *b, 1),
        b'0'..=b'9' => {
            let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > 9 {
                return None;
            }
            let delim = *rest.get(digits)?;
            if delim != b'.' && delim != b')' {
                return None;
            }
            let start: u32 = text[indent..indent + digits].parse().ok()?;
            (true, start, delim, digits + 1)
        }
        _ => return None,
    };

    let after = indent + marker_len;
    match bytes.get(after) {
        None => Some(ListMarker {
            indent,
            ordered,
            start,
            marker,
            content_rel: after,
        }),
        Some(b' ') => {
            let spaces = bytes[after..].iter().take_while(|&&b| b == b' ').count();
            Some(ListMarker {
                indent,
                ordered,
                start,
                marker,
                content_rel: (after + spaces).min(bytes.len()),
            })
        }
        _ => None,
    }
}
