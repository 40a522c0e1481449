use charming_core::Position;
use indoc::indoc;

use super::machine::{
    BracketMatcher, ScanMode, Step, enclosing_opener, escape_run, find_opener,
};

/// Feeds `line` right to left and returns the mode after every character.
fn modes(line: &str) -> Vec<ScanMode> {
    let mut matcher = BracketMatcher::new();
    line.char_indices()
        .rev()
        .map(|(at, ch)| {
            matcher.feed(line, at, ch);
            matcher.mode()
        })
        .collect()
}

fn opener(source: &str, row: usize, column: usize) -> Option<Position> {
    let lines: Vec<&str> = source.split('\n').collect();
    find_opener(&lines, Position::new(row, column)).opener
}

#[test]
fn escape_runs() {
    assert_eq!(escape_run(r#"a\"#, 2), 1);
    assert_eq!(escape_run(r#"a\\\"#, 4), 3);
    assert_eq!(escape_run("abc", 3), 0);
    assert_eq!(escape_run("", 0), 0);
}

#[test]
fn escaped_quote_stays_in_string() {
    // scanned right to left: `"`, `b`, `"`, `\`, `a`, `"`
    let line = r#""a\"b""#;
    assert_eq!(
        modes(line),
        vec![
            ScanMode::InString('"'),
            ScanMode::InString('"'),
            ScanMode::AfterEscape {
                quote: '"',
                remaining: 1
            },
            ScanMode::InString('"'),
            ScanMode::InString('"'),
            ScanMode::Normal,
        ]
    );
}

#[test]
fn even_escape_run_closes_string() {
    // the middle quote follows `\\`, a literal backslash
    let line = r#"\\"x""#;
    assert_eq!(
        modes(line),
        vec![
            ScanMode::InString('"'),
            ScanMode::InString('"'),
            ScanMode::Normal,
            ScanMode::Normal,
            ScanMode::Normal,
        ]
    );
}

#[test]
fn other_quote_kind_is_content() {
    let line = r#""it's""#;
    assert!(
        modes(line)[..line.len() - 1]
            .iter()
            .all(|m| *m == ScanMode::InString('"'))
    );
}

#[test]
fn balanced_on_outermost_opener() {
    let mut matcher = BracketMatcher::new();
    let line = "(a[b])";
    let steps: Vec<Step> = line
        .char_indices()
        .rev()
        .map(|(at, ch)| matcher.feed(line, at, ch))
        .collect();

    assert_eq!(steps.last(), Some(&Step::Balanced));
    assert!(steps[..steps.len() - 1].iter().all(|s| *s == Step::Continue));
    assert_eq!(matcher.depth(), 0);
    assert_eq!(matcher.mismatches(), 0);
}

#[test]
fn single_line_match() {
    assert_eq!(opener("foo(bar, baz)", 0, 13), Some(Position::new(0, 3)));
    assert_eq!(opener("x = [1, [2], 3]", 0, 15), Some(Position::new(0, 4)));
}

#[test]
fn brackets_inside_strings_are_ignored() {
    assert_eq!(opener(r#"print("a\")b")"#, 0, 14), Some(Position::new(0, 5)));
    assert_eq!(opener("f(')', \"]\")", 0, 11), Some(Position::new(0, 1)));
}

#[test]
fn multi_line_match_skips_comments() {
    let source = indoc! {"
        foo(a,  # note (
            b)"};
    assert_eq!(opener(source, 1, 6), Some(Position::new(0, 3)));
}

#[test]
fn hash_inside_string_is_not_a_comment() {
    let source = indoc! {"
        foo('#(',
            x)"};
    assert_eq!(opener(source, 1, 6), Some(Position::new(0, 3)));
}

#[test]
fn string_state_resets_per_line() {
    // the stray quote on the second line must not swallow the first line
    let source = indoc! {r#"
        call(a,
            "b)"#};
    assert_eq!(opener(source, 1, 7), Some(Position::new(0, 4)));
}

#[test]
fn mismatch_is_counted_and_tolerated() {
    let lines = ["foo(a]"];
    let found = find_opener(&lines, Position::new(0, 6));
    assert_eq!(found.opener, Some(Position::new(0, 3)));
    assert_eq!(found.mismatches, 1);
}

#[test]
fn unmatched_closer() {
    assert_eq!(opener("a)]", 0, 3), None);
    assert_eq!(opener("x)", 0, 2), None);
}

#[test]
fn triple_quotes_hide_inner_quotes_and_brackets() {
    assert_eq!(opener("foo('''it's''')", 0, 15), Some(Position::new(0, 3)));
    assert_eq!(opener(r#"f(""")""")"#, 0, 10), Some(Position::new(0, 1)));
    assert_eq!(modes("'''a'''").last(), Some(&ScanMode::Normal));
}

#[test]
fn triple_quoted_string_spans_lines() {
    let source = indoc! {"
        call('''
        )''',
            x)"};
    assert_eq!(opener(source, 2, 6), Some(Position::new(0, 4)));
}

#[test]
fn enclosing_opener_skips_balanced_groups() {
    let lines = ["x = (a(1), [b]", "    .c"];
    assert_eq!(
        enclosing_opener(&lines, Position::new(1, 4)),
        Some(Position::new(0, 4))
    );

    let lines = ["a(1) b"];
    assert_eq!(enclosing_opener(&lines, Position::new(0, 6)), None);
}
