use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based location in a document.
///
/// `column` is a byte offset into the line. Ordering is lexicographic by
/// `(row, column)`, which the field order below provides through `derive`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Same row, `n` columns to the left. Saturates at column 0.
    pub fn shifted_left(self, n: usize) -> Self {
        Self {
            row: self.row,
            column: self.column.saturating_sub(n),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Half-open span `[start, end)` between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Creates a range. The bounds must be ordered.
    ///
    /// Debug builds assert `start <= end`; release builds swap reversed
    /// bounds rather than produce an invalid range.
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {start} is after end {end}");
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The empty range located at `at`.
    pub const fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Slices the covered text out of `text`.
    ///
    /// Returns `None` when either bound falls outside the text or inside a
    /// multi-byte character.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        let index = crate::LineIndex::new(text);
        let start = index.offset(self.start)?;
        let end = index.offset(self.end)?;
        text.get(start..end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
