//! Byte offset to line/column conversion.

use mdsq_ast::Position;

/// Converts byte offsets into 1-indexed (line, column) pairs.
///
/// Built once per parse from the source buffer: a table of line-start byte
/// offsets. A lookup is a binary search over the table plus a character scan
/// within a single line, so resolving every offset of a whole tree stays
/// linear in the input size overall. Columns are counted in characters while
/// offsets stay byte-based, so multi-byte input is handled correctly.
#[derive(Debug)]
pub struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<u32>,
}

impl<'s> LineIndex<'s> {
    /// Builds the line table for the given source buffer.
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Returns the position of the given byte offset.
    ///
    /// Offsets past the end of the buffer are clamped to the end; an offset
    /// equal to the buffer length yields the position one past the last
    /// character.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.source.len() as u32);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line] as usize;
        let column = self.source[line_start..offset as usize].chars().count() as u32 + 1;
        Position::new(line as u32 + 1, column)
    }
}
