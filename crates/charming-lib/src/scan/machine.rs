//! Backward bracket matching as a character-level state machine.
//!
//! Characters are fed right to left. Brackets inside string literals are
//! ignored. Single-quoted string state never crosses a line boundary;
//! triple-quoted strings may span lines.

use charming_core::Position;

use super::lines::ReverseLines;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    Normal,
    /// Inside a string delimited by the quote.
    InString(char),
    /// Consuming the backslashes that escaped a quote inside a string.
    AfterEscape { quote: char, remaining: usize },
    /// Inside a `'''` or `"""` string.
    InTripleString(char),
}

/// Result of feeding one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The bracket stack just became empty on this opener.
    Balanced,
    /// An opener arrived with no closer pending.
    Unbalanced,
}

/// Number of consecutive backslashes ending right before byte `at`.
pub fn escape_run(line: &str, at: usize) -> usize {
    line.as_bytes()[..at]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count()
}

/// Whether the quote at byte `at` is the last of an unescaped triple quote.
fn ends_triple(line: &str, at: usize, quote: char) -> bool {
    let bytes = line.as_bytes();
    let q = quote as u8;
    at >= 2 && bytes[at - 2] == q && bytes[at - 1] == q && escape_run(line, at - 2) % 2 == 0
}

fn opener_of(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct BracketMatcher {
    mode: ScanMode,
    /// Closers waiting for their opener, innermost last.
    stack: Vec<char>,
    mismatches: u32,
    /// Characters of a triple quote still to be consumed.
    skip: usize,
}

impl Default for BracketMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BracketMatcher {
    pub fn new() -> Self {
        Self {
            mode: ScanMode::Normal,
            stack: Vec::new(),
            mismatches: 0,
            skip: 0,
        }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Openers that did not match the kind of the pending closer.
    pub fn mismatches(&self) -> u32 {
        self.mismatches
    }

    /// Feeds the character `ch` found at byte `at` of `line`.
    pub fn feed(&mut self, line: &str, at: usize, ch: char) -> Step {
        if self.skip > 0 {
            self.skip -= 1;
            return Step::Continue;
        }
        match self.mode {
            ScanMode::Normal => return self.feed_normal(line, at, ch),
            ScanMode::InTripleString(quote) if ch == quote && ends_triple(line, at, quote) => {
                self.mode = ScanMode::Normal;
                self.skip = 2;
            }
            ScanMode::InTripleString(_) => {}
            ScanMode::InString(quote) if ch == quote => {
                let run = escape_run(line, at);
                self.mode = if run % 2 == 1 {
                    ScanMode::AfterEscape {
                        quote,
                        remaining: run,
                    }
                } else {
                    ScanMode::Normal
                };
            }
            ScanMode::InString(_) => {}
            ScanMode::AfterEscape { quote, remaining } => {
                self.mode = match remaining.saturating_sub(1) {
                    0 => ScanMode::InString(quote),
                    remaining => ScanMode::AfterEscape { quote, remaining },
                };
            }
        }
        Step::Continue
    }

    fn feed_normal(&mut self, line: &str, at: usize, ch: char) -> Step {
        match ch {
            ')' | ']' | '}' => self.stack.push(ch),
            '(' | '[' | '{' => {
                let Some(closer) = self.stack.pop() else {
                    return Step::Unbalanced;
                };
                if opener_of(closer) != Some(ch) {
                    self.mismatches += 1;
                    tracing::warn!(opener = %ch, closer = %closer, "mismatched bracket kinds");
                }
                if self.stack.is_empty() {
                    return Step::Balanced;
                }
            }
            '\'' | '"' if ends_triple(line, at, ch) => {
                self.mode = ScanMode::InTripleString(ch);
                self.skip = 2;
            }
            '\'' | '"' => self.mode = ScanMode::InString(ch),
            _ => {}
        }
        Step::Continue
    }

    /// Called when a line is exhausted. An open single-quoted string does
    /// not continue onto the previous line.
    pub fn end_line(&mut self) {
        self.skip = 0;
        if !matches!(self.mode, ScanMode::Normal | ScanMode::InTripleString(_)) {
            tracing::trace!(mode = ?self.mode, "string left open at line start");
            self.mode = ScanMode::Normal;
        }
    }
}

/// Outcome of a multi-line backward match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketMatch {
    /// Position of the balancing opener, if one was reached.
    pub opener: Option<Position>,
    pub mismatches: u32,
}

/// Scans backward from `from` (just past a closing bracket) for the opener
/// that balances it.
pub fn find_opener<L: AsRef<str>>(lines: &[L], from: Position) -> BracketMatch {
    let mut matcher = BracketMatcher::new();

    for (row, line) in ReverseLines::new(lines, from.row, from.column) {
        for (at, ch) in line.char_indices().rev() {
            if matcher.feed(line, at, ch) == Step::Balanced {
                return BracketMatch {
                    opener: Some(Position::new(row, at)),
                    mismatches: matcher.mismatches(),
                };
            }
        }
        matcher.end_line();
    }

    tracing::debug!(depth = matcher.depth(), "no balancing opener before {}", from);
    BracketMatch {
        opener: None,
        mismatches: matcher.mismatches(),
    }
}

/// The unmatched opener enclosing `from`, if any. Balanced groups on the
/// way are skipped.
pub fn enclosing_opener<L: AsRef<str>>(lines: &[L], from: Position) -> Option<Position> {
    let mut matcher = BracketMatcher::new();

    for (row, line) in ReverseLines::new(lines, from.row, from.column) {
        for (at, ch) in line.char_indices().rev() {
            if matcher.feed(line, at, ch) == Step::Unbalanced {
                return Some(Position::new(row, at));
            }
        }
        matcher.end_line();
    }

    None
}
