//! Edit descriptors forwarded to cached syntax trees.
//!
//! Tree-sitter needs both byte offsets and row/column points for an edit.
//! Editors usually only report positions, so [`TextEdit::insert`] and
//! [`TextEdit::replace`] derive the byte offsets from the pre-edit text.

use serde::{Deserialize, Serialize};

use crate::{Position, Range};

/// A single edit: `[start, old_end)` was replaced by text ending at `new_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub start_byte: usize,
    pub old_end_byte: usize,
    pub new_end_byte: usize,
    pub start: Position,
    pub old_end: Position,
    pub new_end: Position,
}

impl TextEdit {
    /// Edit inserting `inserted` at `at` in `text`.
    ///
    /// Returns `None` if `at` is not a valid position in `text`.
    pub fn insert(text: &str, at: Position, inserted: &str) -> Option<Self> {
        Self::replace(text, Range::empty(at), inserted)
    }

    /// Edit replacing `range` of `text` with `replacement`.
    ///
    /// Returns `None` if the range does not lie within `text`.
    pub fn replace(text: &str, range: Range, replacement: &str) -> Option<Self> {
        let index = LineIndex::new(text);
        let start_byte = index.offset(range.start)?;
        let old_end_byte = index.offset(range.end)?;
        Some(Self {
            start_byte,
            old_end_byte,
            new_end_byte: start_byte + replacement.len(),
            start: range.start,
            old_end: range.end,
            new_end: advance(range.start, replacement),
        })
    }
}

/// Position reached after writing `text` starting at `from`.
fn advance(from: Position, text: &str) -> Position {
    match text.rfind('\n') {
        Some(last_newline) => Position::new(
            from.row + text.matches('\n').count(),
            text.len() - last_newline - 1,
        ),
        None => Position::new(from.row, from.column + text.len()),
    }
}

/// Byte offsets of line starts, for position ↔ offset conversion.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            line_starts,
            len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of `pos`, or `None` if the position is past the end of
    /// its line or the row does not exist.
    pub fn offset(&self, pos: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(pos.row)?;
        let line_end = match self.line_starts.get(pos.row + 1) {
            Some(next) => next - 1,
            None => self.len,
        };
        let offset = line_start + pos.column;
        (offset <= line_end).then_some(offset)
    }

    /// Position of byte `offset`, clamped to the end of the text.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let row = match self.line_starts.binary_search(&offset) {
            Ok(row) => row,
            Err(next) => next - 1,
        };
        Position::new(row, offset - self.line_starts[row])
    }
}
