//! Lexical strategy: find where an expression starts without parsing.
//!
//! Starting right before the trigger, the scanner repeatedly moves the start
//! left over whatever directly precedes it: a bracketed group (matched
//! backward across lines by [`machine`]) or a terminal atom ([`atom`]). A
//! `.name` atom also pulls in its receiver, which may sit on an earlier line
//! of a bracketed method chain. It stops when nothing applies.

pub mod atom;
pub mod lines;
pub mod machine;

#[cfg(test)]
mod atom_tests;
#[cfg(test)]
mod machine_tests;

use charming_core::{Position, Range};
use serde::Serialize;

use crate::config::ScanLimits;

/// A scanned range with the work it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub range: Range,
    /// Fixpoint steps taken, including the final step that moved nothing.
    pub iterations: u32,
    /// Bracket pairs of different kinds accepted along the way.
    pub mismatches: u32,
    /// `false` when the iteration cap cut the scan short.
    pub converged: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalScanner {
    limits: ScanLimits,
}

impl LexicalScanner {
    pub fn new(limits: ScanLimits) -> Self {
        Self { limits }
    }

    /// Range of the expression ending right before the trigger at
    /// `position`. `lines` holds the document up to at least the cursor
    /// line. Collapses to the empty range at the trigger when nothing
    /// precedes it.
    pub fn compute_expression_range<L: AsRef<str>>(&self, lines: &[L], position: Position) -> Range {
        self.scan(lines, position).range
    }

    pub fn scan<L: AsRef<str>>(&self, lines: &[L], position: Position) -> ScanOutcome {
        let end = clamp(lines, position.shifted_left(1));
        let max_iterations = self.limits.get_max_iterations();

        let mut start = end;
        let mut iterations = 0;
        let mut mismatches = 0;
        let mut converged = false;

        while iterations < max_iterations {
            iterations += 1;
            let next = step(lines, start, &mut mismatches);
            if next == start {
                converged = true;
                break;
            }
            debug_assert!(next < start, "scan moved right: {start} -> {next}");
            start = next;
        }

        if !converged {
            tracing::warn!(max_iterations, "lexical scan hit the iteration cap at {}", start);
        }
        tracing::debug!(iterations, "lexical range {}-{}", start, end);

        ScanOutcome {
            range: Range::new(start, end),
            iterations,
            mismatches,
            converged,
        }
    }
}

/// Pulls `pos` back inside its line and onto a char boundary.
fn clamp<L: AsRef<str>>(lines: &[L], pos: Position) -> Position {
    match lines.get(pos.row) {
        Some(line) => Position::new(pos.row, lines::prefix(line.as_ref(), pos.column).len()),
        None => pos,
    }
}

/// One fixpoint step: the new start, or `at` when nothing more precedes it.
fn step<L: AsRef<str>>(lines: &[L], at: Position, mismatches: &mut u32) -> Position {
    let Some(line) = lines.get(at.row) else {
        return at;
    };
    let before = lines::prefix(line.as_ref(), at.column);

    match before.chars().next_back() {
        Some(')' | ']' | '}') => {
            let found = machine::find_opener(lines, at);
            *mismatches += found.mismatches;
            found.opener.unwrap_or(at)
        }
        Some(_) => match atom::atom_start(before) {
            Some(column) if is_member_access(&before[column..]) => {
                member_receiver(lines, Position::new(at.row, column)).unwrap_or(at)
            }
            Some(column) => Position::new(at.row, column),
            None => at,
        },
        None => at,
    }
}

/// `.name`, as opposed to a number like `.5`.
fn is_member_access(atom: &str) -> bool {
    atom.strip_prefix('.')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|ch| ch == '_' || ch.is_alphabetic())
}

/// Where the scan continues for a `.name` atom starting at `dot`: right
/// before the dot when a closer precedes it, otherwise at the end of the
/// receiver, skipping whitespace. Line breaks are only skipped inside an
/// open bracket or after a `\` continuation. `None` when nothing that can
/// hold a member precedes the dot.
fn member_receiver<L: AsRef<str>>(lines: &[L], dot: Position) -> Option<Position> {
    let mut upward = lines::ReverseLines::new(lines, dot.row, dot.column);
    let (_, line) = upward.next()?;
    if line.ends_with([')', ']', '}']) {
        return Some(dot);
    }

    let mut receiver = line.trim_end();
    let mut row = dot.row;
    if receiver.is_empty() {
        let bracketed = machine::enclosing_opener(lines, dot).is_some();
        let (prev_row, prev) = upward.find(|(_, l)| !l.trim().is_empty())?;
        receiver = match prev.trim_end().strip_suffix('\\') {
            Some(continued) => continued.trim_end(),
            None if bracketed => prev.trim_end(),
            None => return None,
        };
        row = prev_row;
    }

    let ends_operand = match receiver.chars().next_back()? {
        ')' | ']' | '}' | '\'' | '"' => true,
        _ => atom::atom_start(receiver).is_some(),
    };
    ends_operand.then(|| Position::new(row, receiver.len()))
}
