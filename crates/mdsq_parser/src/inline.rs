//! Inline parsing: span-level constructs inside text runs.
//!
//! A run is the logical text of one block (container markers already
//! stripped), carried together with a byte-for-byte map back into the source
//! buffer so every produced node keeps an exact source span. The scanner
//! walks the run left to right and tries one structured production per
//! marker character; when a production does not match, the marker falls
//! through to literal text. That fallback is the normal path, not an error
//! path: the scanner cannot fail.

use mdsq_ast::{AstArena, MdNode, NodeData, NodeType, Span};

/// One contiguous piece of a text run: a source slice plus the byte offset
/// where it starts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<'s> {
    pub start: u32,
    pub text: &'s str,
}

/// Parses a text run given as one or more contiguous segments.
///
/// Segments are joined with `\n` (the source newline between them), so soft
/// line breaks stay inside text values while offsets keep pointing into the
/// original buffer even when container markers were stripped.
pub(crate) fn parse_run<'a>(arena: &'a AstArena, segments: &[Segment<'_>]) -> Vec<MdNode<'a>> {
    let mut text = String::new();
    let mut map: Vec<u32> = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            let prev = &segments[i - 1];
            text.push('\n');
            map.push(prev.start + prev.text.len() as u32);
        }
        text.push_str(segment.text);
        map.extend((0..segment.text.len() as u32).map(|k| segment.start + k));
    }

    Scanner {
        arena,
        text: &text,
        map: &map,
        in_link: false,
    }
    .run()
}

/// One inline scan over a logical run.
struct Scanner<'a, 't> {
    arena: &'a AstArena,
    text: &'t str,
    map: &'t [u32],
    /// Set while parsing link text: a link may not directly nest a link.
    in_link: bool,
}

impl<'a, 't> Scanner<'a, 't> {
    /// Source offset of the logical byte at `i`.
    fn src(&self, i: usize) -> u32 {
        self.map[i]
    }

    /// Exclusive source offset just past the logical byte range ending at `i`.
    fn src_end(&self, i: usize) -> u32 {
        self.map[i - 1] + 1
    }

    fn sub(&self, start: usize, end: usize) -> Scanner<'a, '_> {
        Scanner {
            arena: self.arena,
            text: &self.text[start..end],
            map: &self.map[start..end],
            in_link: self.in_link,
        }
    }

    fn run(&self) -> Vec<MdNode<'a>> {
        let bytes = self.text.as_bytes();
        let len = bytes.len();
        let mut nodes: Vec<MdNode<'a>> = Vec::new();

        // Pending literal text: resolved value plus the logical byte range
        // it covers (the range can be wider than the value, e.g. escapes).
        let mut buf = String::new();
        let mut buf_start = 0usize;

        let mut i = 0usize;
        while i < len {
            match bytes[i] {
                b'\\' if i + 1 < len && bytes[i + 1] == b'\n' => {
                    self.flush(&mut nodes, &mut buf, buf_start, i);
                    nodes.push(MdNode::new_leaf(
                        NodeType::LineBreak,
                        Span::new(self.src(i), self.src_end(i + 2)),
                    ));
                    i += 2;
                    buf_start = i;
                }
                b'\\' if i + 1 < len && bytes[i + 1].is_ascii_punctuation() => {
                    // Escape: value gets the bare character, the span keeps
                    // covering the backslash.
                    if buf.is_empty() {
                        buf_start = i;
                    }
                    buf.push(bytes[i + 1] as char);
                    i += 2;
                }
                b'\n' => {
                    let trailing = buf.len() - buf.trim_end_matches(' ').len();
                    if trailing >= 2 {
                        // Hard break: the spaces move out of the text node.
                        buf.truncate(buf.len() - trailing);
                        self.flush(&mut nodes, &mut buf, buf_start, i - trailing);
                        nodes.push(MdNode::new_leaf(
                            NodeType::LineBreak,
                            Span::new(self.src(i - trailing), self.src_end(i + 1)),
                        ));
                        i += 1;
                        buf_start = i;
                    } else {
                        // Soft break stays inside the text value.
                        if buf.is_empty() {
                            buf_start = i;
                        }
                        buf.push('\n');
                        i += 1;
                    }
                }
                b'`' => {
                    let open = count_run(bytes, i, b'`');
                    match find_backtick_close(bytes, i + open, open) {
                        Some(close) => {
                            self.flush(&mut nodes, &mut buf, buf_start, i);
                            let value = code_span_value(&self.text[i + open..close]);
                            nodes.push(MdNode::new_text(
                                NodeType::CodeSpan,
                                Span::new(self.src(i), self.src_end(close + open)),
                                self.arena.alloc_str(&value),
                            ));
                            i = close + open;
                            buf_start = i;
                        }
                        None => {
                            if buf.is_empty() {
                                buf_start = i;
                            }
                            buf.push_str(&self.text[i..i + open]);
                            i += open;
                        }
                    }
                }
                b'*' | b'_' => match self.try_emphasis(i) {
                    Some((node, consumed)) => {
                        self.flush(&mut nodes, &mut buf, buf_start, i);
                        nodes.push(node);
                        i += consumed;
                        buf_start = i;
                    }
                    None => {
                        if buf.is_empty() {
                            buf_start = i;
                        }
                        buf.push(bytes[i] as char);
                        i += 1;
                    }
                },
                b'[' if !self.in_link => match self.try_link(i, false) {
                    Some((node, consumed)) => {
                        self.flush(&mut nodes, &mut buf, buf_start, i);
                        nodes.push(node);
                        i += consumed;
                        buf_start = i;
                    }
                    None => {
                        if buf.is_empty() {
                            buf_start = i;
                        }
                        buf.push('[');
                        i += 1;
                    }
                },
                b'!' if i + 1 < len && bytes[i + 1] == b'[' => match self.try_link(i, true) {
                    Some((node, consumed)) => {
                        self.flush(&mut nodes, &mut buf, buf_start, i);
                        nodes.push(node);
                        i += consumed;
                        buf_start = i;
                    }
                    None => {
                        if buf.is_empty() {
                            buf_start = i;
                        }
                        buf.push('!');
                        i += 1;
                    }
                },
                _ => {
                    if buf.is_empty() {
                        buf_start = i;
                    }
                    let mut end = i + 1;
                    while end < len && !self.text.is_char_boundary(end) {
                        end += 1;
                    }
                    buf.push_str(&self.text[i..end]);
                    i = end;
                }
            }
        }
        self.flush(&mut nodes, &mut buf, buf_start, len);

        nodes
    }

    /// Emits the pending literal text, if any, as a Text node covering the
    /// logical byte range `[buf_start, end)`.
    fn flush(&self, nodes: &mut Vec<MdNode<'a>>, buf: &mut String, buf_start: usize, end: usize) {
        if buf.is_empty() {
            return;
        }
        nodes.push(MdNode::new_text(
            NodeType::Text,
            Span::new(self.src(buf_start), self.src_end(end)),
            self.arena.alloc_str(buf),
        ));
        buf.clear();
    }

    /// Tries emphasis or strong emphasis opening at `i`.
    fn try_emphasis(&self, i: usize) -> Option<(MdNode<'a>, usize)> {
        let bytes = self.text.as_bytes();
        let marker = bytes[i];
        let strong = bytes.get(i + 1) == Some(&marker);

        if strong {
            if let Some(close) = self.find_emphasis_close(i + 2, marker, 2) {
                let children = self.sub(i + 2, close).run();
                let node = MdNode::new_parent(
                    NodeType::Strong,
                    Span::new(self.src(i), self.src_end(close + 2)),
                    self.arena.alloc_slice_copy(&children),
                );
                return Some((node, close + 2 - i));
            }
        }
        let close = self.find_emphasis_close(i + 1, marker, 1)?;
        let children = self.sub(i + 1, close).run();
        let node = MdNode::new_parent(
            NodeType::Emphasis,
            Span::new(self.src(i), self.src_end(close + 1)),
            self.arena.alloc_slice_copy(&children),
        );
        Some((node, close + 1 - i))
    }

    /// Finds the closing delimiter run for emphasis content starting at
    /// `from`. Returns the logical index of the closing run, or None when no
    /// well-formed closer exists (the opener then stays literal).
    fn find_emphasis_close(&self, from: usize, marker: u8, width: usize) -> Option<usize> {
        let bytes = self.text.as_bytes();
        let opener = from - width;

        // Underscore emphasis is not recognized inside words.
        if marker == b'_' && opener > 0 {
            let before = self.text[..opener].chars().next_back()?;
            if before.is_alphanumeric() {
                return None;
            }
        }

        let mut j = from;
        while j + width <= bytes.len() {
            if bytes[j] != marker {
                j += 1;
                continue;
            }
            if width == 2 && bytes[j + 1] != marker {
                j += 1;
                continue;
            }
            let inner = &self.text[from..j];
            if inner.is_empty() {
                j += 1;
                continue;
            }
            if inner.starts_with(char::is_whitespace) {
                // The opener is not left-flanking; no closer can fix that.
                return None;
            }
            if inner.ends_with(char::is_whitespace) {
                j += 1;
                continue;
            }
            if marker == b'_' {
                if let Some(after) = self.text[j + width..].chars().next() {
                    if after.is_alphanumeric() {
                        j += 1;
                        continue;
                    }
                }
            }
            return Some(j);
        }
        None
    }

    /// Tries a link (`[text](url "title")`) or image (`![alt](url "title")`)
    /// opening at `i`.
    fn try_link(&self, i: usize, image: bool) -> Option<(MdNode<'a>, usize)> {
        let bytes = self.text.as_bytes();
        let label_start = if image { i + 2 } else { i + 1 };

        // Matching close bracket, tracking nesting and skipping escapes.
        let mut depth = 0usize;
        let mut k = label_start;
        let label_end = loop {
            if k >= bytes.len() {
                return None;
            }
            match bytes[k] {
                b'\\' if k + 1 < bytes.len() => k += 2,
                b'[' => {
                    depth += 1;
                    k += 1;
                }
                b']' => {
                    if depth == 0 {
                        break k;
                    }
                    depth -= 1;
                    k += 1;
                }
                _ => k += 1,
            }
        };

        if bytes.get(label_end + 1) != Some(&b'(') {
            return None;
        }

        let (url, title, consumed_to) = self.parse_destination(label_end + 2)?;

        let mut body = self.sub(label_start, label_end);
        if !image {
            body.in_link = true;
        }
        let children = body.run();

        let node_type = if image { NodeType::Image } else { NodeType::Link };
        let mut node = MdNode::new_parent(
            node_type,
            Span::new(self.src(i), self.src_end(consumed_to)),
            self.arena.alloc_slice_copy(&children),
        );
        node.data = NodeData::link(
            self.arena.alloc_str(&url),
            title.as_deref().map(|t| self.arena.alloc_str(t)),
        );
        Some((node, consumed_to - i))
    }

    /// Parses `url "title"?)` starting just after the opening parenthesis.
    /// Returns the destination, the optional title, and the logical index
    /// just past the closing parenthesis. Backslash escapes are resolved in
    /// both the destination and the title.
    fn parse_destination(&self, from: usize) -> Option<(String, Option<String>, usize)> {
        let bytes = self.text.as_bytes();
        let mut k = skip_spaces(self.text, from);

        let url: String;
        if bytes.get(k) == Some(&b'<') {
            let start = k + 1;
            let close = self.text[start..].find('>')? + start;
            if self.text[start..close].contains('\n') {
                return None;
            }
            url = unescape(&self.text[start..close]);
            k = close + 1;
        } else {
            let start = k;
            let mut parens = 0usize;
            while k < bytes.len() {
                match bytes[k] {
                    b'\\' if k + 1 < bytes.len() => k += 2,
                    b'(' => {
                        parens += 1;
                        k += 1;
                    }
                    b')' => {
                        if parens == 0 {
                            break;
                        }
                        parens -= 1;
                        k += 1;
                    }
                    b if b.is_ascii_whitespace() => break,
                    _ => k += 1,
                }
            }
            url = unescape(&self.text[start..k]);
        }

        k = skip_spaces(self.text, k);

        let mut title = None;
        if let Some(&quote) = bytes.get(k) {
            if quote == b'"' || quote == b'\'' {
                let start = k + 1;
                let mut close = start;
                loop {
                    match bytes.get(close) {
                        None => return None,
                        Some(b'\\') if close + 1 < bytes.len() => close += 2,
                        Some(&b) if b == quote => break,
                        Some(_) => close += 1,
                    }
                }
                title = Some(unescape(&self.text[start..close]));
                k = skip_spaces(self.text, close + 1);
            }
        }

        if bytes.get(k) != Some(&b')') {
            return None;
        }
        Some((url, title, k + 1))
    }
}

/// Length of the run of `marker` starting at `i`.
fn count_run(bytes: &[u8], i: usize, marker: u8) -> usize {
    bytes[i..].iter().take_while(|&&b| b == marker).count()
}

/// Finds the start of the next backtick run of exactly `n` backticks.
fn find_backtick_close(bytes: &[u8], from: usize, n: usize) -> Option<usize> {
    let mut k = from;
    while k < bytes.len() {
        if bytes[k] == b'`' {
            let start = k;
            let run = count_run(bytes, k, b'`');
            if run == n {
                return Some(start);
            }
            k += run;
        } else {
            k += 1;
        }
    }
    None
}

/// Applies the code span content rules: line endings become spaces, and one
/// space is stripped from both ends when both are present and the content is
/// not all spaces.
fn code_span_value(raw: &str) -> String {
    let content = raw.replace('\n', " ");
    if content.len() >= 2
        && content.starts_with(' ')
        && content.ends_with(' ')
        && content.chars().any(|c| c != ' ')
    {
        content[1..content.len() - 1].to_string()
    } else {
        content
    }
}

/// Resolves backslash escapes of ASCII punctuation.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_punctuation() {
            i += 1;
        }
        let mut end = i + 1;
        while end < raw.len() && !raw.is_char_boundary(end) {
            end += 1;
        }
        out.push_str(&raw[i..end]);
        i = end;
    }
    out
}

/// Skips spaces and newlines inside a link destination clause.
fn skip_spaces(text: &str, from: usize) -> usize {
    from + text[from..]
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\n' || *b == b'\t')
        .count()
}
