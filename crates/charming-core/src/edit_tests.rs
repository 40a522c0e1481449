use crate::{LineIndex, Position, Range, TextEdit};

#[test]
fn line_index_round_trips_line_starts() {
    let index = LineIndex::new("ab\ncde\n\nf");
    assert_eq!(index.line_count(), 4);
    assert_eq!(index.offset(Position::new(1, 0)), Some(3));
    assert_eq!(index.offset(Position::new(1, 3)), Some(6));
    assert_eq!(index.offset(Position::new(2, 0)), Some(7));
    assert_eq!(index.position(4), Position::new(1, 1));
    assert_eq!(index.position(8), Position::new(3, 0));
}

#[test]
fn line_index_rejects_columns_past_line_end() {
    let index = LineIndex::new("ab\ncde");
    assert_eq!(index.offset(Position::new(0, 3)), None);
    assert_eq!(index.offset(Position::new(5, 0)), None);
}

#[test]
fn line_index_clamps_offsets() {
    let index = LineIndex::new("ab");
    assert_eq!(index.position(99), Position::new(0, 2));
}

#[test]
fn insert_on_one_line() {
    let edit = TextEdit::insert("x = 1\ny = 2", Position::new(1, 4), "42 + ").unwrap();
    assert_eq!(edit.start_byte, 10);
    assert_eq!(edit.old_end_byte, 10);
    assert_eq!(edit.new_end_byte, 15);
    assert_eq!(edit.start, Position::new(1, 4));
    assert_eq!(edit.old_end, Position::new(1, 4));
    assert_eq!(edit.new_end, Position::new(1, 9));
}

#[test]
fn insert_with_newlines() {
    let edit = TextEdit::insert("foo(", Position::new(0, 4), "a,\n    bb").unwrap();
    assert_eq!(edit.new_end, Position::new(1, 6));
    assert_eq!(edit.new_end_byte, 4 + 9);
}

#[test]
fn replace_range() {
    let text = "value = compute()";
    let range = Range::new(Position::new(0, 8), Position::new(0, 15));
    let edit = TextEdit::replace(text, range, "run").unwrap();
    assert_eq!(edit.start_byte, 8);
    assert_eq!(edit.old_end_byte, 15);
    assert_eq!(edit.new_end_byte, 11);
    assert_eq!(edit.new_end, Position::new(0, 11));
}

#[test]
fn insert_outside_text() {
    assert!(TextEdit::insert("abc", Position::new(3, 0), "x").is_none());
}
