use super::atom::{atom_start, is_keyword};

fn atom(text: &str) -> Option<&str> {
    atom_start(text).map(|start| &text[start..])
}

#[test]
fn identifiers_and_chains() {
    assert_eq!(atom("x = foo"), Some("foo"));
    assert_eq!(atom("x = foo.bar.baz"), Some("foo.bar.baz"));
    assert_eq!(atom("print(_private"), Some("_private"));
    assert_eq!(atom("café"), Some("café"));
}

#[test]
fn leading_dot_continues_a_group() {
    assert_eq!(atom("foo(bar, baz).attr"), Some(".attr"));
    assert_eq!(atom("items[0].name.upper"), Some(".name.upper"));
}

#[test]
fn string_literals() {
    assert_eq!(atom(r#"x = "a\"b""#), Some(r#""a\"b""#));
    assert_eq!(atom("x = 'plain'"), Some("'plain'"));
    assert_eq!(atom(r#"x = rb"\d+""#), Some(r#"rb"\d+""#));
    assert_eq!(atom(r#"x = f'{y}'"#), Some("f'{y}'"));
}

#[test]
fn adjacent_strings_concatenate() {
    assert_eq!(atom(r#"x = "a" 'b'  "c""#), Some(r#""a" 'b'  "c""#));
}

#[test]
fn separate_strings_do_not_merge() {
    assert_eq!(atom(r#"x = "a" + "b""#), Some(r#""b""#));
}

#[test]
fn numbers() {
    assert_eq!(atom("x = 1_000"), Some("1_000"));
    assert_eq!(atom("x = 3.14"), Some("3.14"));
    assert_eq!(atom("x = 1e-10"), Some("1e-10"));
    assert_eq!(atom("x = 2.5j"), Some("2.5j"));
    assert_eq!(atom("x = 0xFF_FF"), Some("0xFF_FF"));
    assert_eq!(atom("x = 0o17"), Some("0o17"));
    assert_eq!(atom("x = 0b1010"), Some("0b1010"));
    assert_eq!(atom("x = .5"), Some(".5"));
}

#[test]
fn keywords_are_not_atoms() {
    assert!(is_keyword("return"));
    assert!(!is_keyword("None"));
    assert_eq!(atom("return"), None);
    assert_eq!(atom("x = not"), None);
    assert_eq!(atom("return value"), Some("value"));
    assert_eq!(atom("x = None"), Some("None"));
}

#[test]
fn nothing_before_boundary() {
    assert_eq!(atom(""), None);
    assert_eq!(atom("foo("), None);
    assert_eq!(atom("a + "), None);
    assert_eq!(atom("foo)"), None);
}
