//! Re-export shortcut: the name an `as` clause being typed should repeat.
//!
//! In `from .models import User a|` the completion offers `as User`, which
//! marks `User` as an explicit re-export.

use charming_core::{Position, Range};

use crate::scan::lines;

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Byte span of the word run touching `column`.
fn word_at(line: &str, column: usize) -> (usize, usize) {
    let before = lines::prefix(line, column);
    let start = before
        .char_indices()
        .rev()
        .take_while(|&(_, ch)| is_word_char(ch))
        .last()
        .map_or(before.len(), |(at, _)| at);
    let rest = &line[before.len()..];
    let end = before.len() + rest.find(|ch| !is_word_char(ch)).unwrap_or(rest.len());
    (start, end)
}

/// Range of the identifier an `as` clause at `position` would alias.
///
/// The word at the cursor must start with `a`. The identifier is the one
/// right before that word, on the same line or on the nearest non-blank
/// line above it.
pub fn alias_target<L: AsRef<str>>(lines: &[L], position: Position) -> Option<Range> {
    let line = lines.get(position.row)?.as_ref();
    if line.len() < 3 {
        return None;
    }

    let (start, end) = word_at(line, position.column);
    if !line[start..end].starts_with('a') {
        return None;
    }

    let (row, text) = match line[..start].trim_end() {
        "" => (0..position.row)
            .rev()
            .map(|row| (row, lines[row].as_ref().trim_end()))
            .find(|(_, text)| !text.is_empty())?,
        text => (position.row, text),
    };

    let (name_start, name_end) = word_at(text, text.len());
    if name_start == name_end {
        tracing::trace!(row, "no identifier before alias");
        return None;
    }
    tracing::trace!(name = &text[name_start..name_end], "alias target");
    Some(Range::new(
        Position::new(row, name_start),
        Position::new(row, name_end),
    ))
}
