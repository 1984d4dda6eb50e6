//! Byte offset to line/column conversion.
//!
//! Evaluators report locations as byte offsets (or as sub-slices) of the
//! source they were given. The overlay stores work in line/column
//! coordinates with UTF-16 columns, so every location crosses this index
//! before it reaches a diagnostic or a mark.

use text_size::{TextRange, TextSize};

use super::position::{Position, Range};

/// Line start table over one source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a position.
    ///
    /// Offsets past the end clamp to the end of the text; offsets inside a
    /// multi-byte character snap back to its first byte.
    pub fn position(&self, offset: TextSize) -> Position {
        let mut offset = usize::from(offset).min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset].encode_utf16().count();

        Position::new(line, column)
    }

    /// Convert a byte range into a line/column range.
    pub fn range(&self, range: TextRange) -> Range {
        Range::new(self.position(range.start()), self.position(range.end()))
    }

    /// Locate a sub-slice of the indexed text.
    ///
    /// Returns `None` when `span` does not point into the indexed text.
    pub fn subslice_range(&self, span: &str) -> Option<Range> {
        let base = self.text.as_ptr() as usize;
        let start = (span.as_ptr() as usize).checked_sub(base)?;
        let end = start + span.len();
        if end > self.text.len() {
            return None;
        }

        let start = TextSize::try_from(start).ok()?;
        let end = TextSize::try_from(end).ok()?;
        Some(self.range(TextRange::new(start, end)))
    }
}
