/// Position tracking for tokens, diagnostics and marks
///
/// Coordinates are zero-based. Columns count UTF-16 code units so they line
/// up with the host text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A half-open range `[from, to)` in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Range {
    /// Create a range, swapping the endpoints if they were given out of order.
    pub fn new(from: Position, to: Position) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Create a range from line/column coordinates
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        )
    }

    /// Check if a position falls within this range (end exclusive)
    pub fn contains(&self, position: Position) -> bool {
        self.from <= position && position < self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}
