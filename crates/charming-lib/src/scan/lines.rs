//! Backward line iteration with comment truncation.

/// Longest prefix of `line` that ends at or before byte `column` on a char
/// boundary.
pub fn prefix(line: &str, column: usize) -> &str {
    let mut end = column.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

fn triple(quote: char) -> &'static str {
    if quote == '"' { "\"\"\"" } else { "'''" }
}

/// Truncates `line` at the first `#` outside a string literal.
///
/// String state is tracked for this line only; an unterminated string runs
/// to the end of the line.
pub fn strip_comment(line: &str) -> &str {
    // (quote, triple-quoted)
    let mut quote: Option<(char, bool)> = None;
    let mut escaped = false;
    let mut skip = 0;

    for (i, ch) in line.char_indices() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        match quote {
            Some((q, is_triple)) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == q && !is_triple {
                    quote = None;
                } else if ch == q && line[i..].starts_with(triple(q)) {
                    quote = None;
                    skip = 2;
                }
            }
            None => match ch {
                '#' => return &line[..i],
                '\'' | '"' => {
                    let is_triple = line[i..].starts_with(triple(ch));
                    quote = Some((ch, is_triple));
                    if is_triple {
                        skip = 2;
                    }
                }
                _ => {}
            },
        }
    }

    line
}

/// Lazily yields `(row, text)` from a starting position upward.
///
/// The first line is cut at the starting column; every line is
/// comment-stripped. Cloning restarts nothing: a clone continues from where
/// the original currently is.
#[derive(Clone, Debug)]
pub struct ReverseLines<'a, L> {
    lines: &'a [L],
    next_row: Option<usize>,
    first_column: Option<usize>,
}

impl<'a, L: AsRef<str>> ReverseLines<'a, L> {
    /// Iteration starting on `row`, cut at `column`.
    pub fn new(lines: &'a [L], row: usize, column: usize) -> Self {
        let next_row = (row < lines.len()).then_some(row);
        Self {
            lines,
            next_row,
            first_column: Some(column),
        }
    }
}

impl<'a, L: AsRef<str>> Iterator for ReverseLines<'a, L> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.next_row?;
        self.next_row = row.checked_sub(1);

        let line = self.lines[row].as_ref();
        let line = match self.first_column.take() {
            Some(column) => prefix(line, column),
            None => line,
        };
        Some((row, strip_comment(line)))
    }
}
