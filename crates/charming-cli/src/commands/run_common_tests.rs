use std::io::Write;
use std::path::Path;

use super::run_common::{CliError, document_id, load_source, resolve_lang};

#[test]
fn inline_source_wins() {
    let source = load_source(Some("x = 1"), None).unwrap();
    assert_eq!(source, "x = 1");
}

#[test]
fn source_from_file() {
    let mut file = tempfile::Builder::new().suffix(".py").tempfile().unwrap();
    writeln!(file, "value = 42").unwrap();

    let source = load_source(None, Some(file.path())).unwrap();
    assert_eq!(source, "value = 42\n");
}

#[test]
fn missing_source() {
    assert!(matches!(load_source(None, None), Err(CliError::MissingSource)));
}

#[test]
fn unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.py");

    let err = load_source(None, Some(&path)).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn language_resolution() {
    assert_eq!(resolve_lang(Some("py"), None).unwrap().name(), "python");
    assert_eq!(
        resolve_lang(None, Some(Path::new("app.pyi"))).unwrap().name(),
        "python"
    );
    assert_eq!(resolve_lang(None, None).unwrap().name(), "python");
    assert_eq!(resolve_lang(None, Some(Path::new("-"))).unwrap().name(), "python");
}

#[test]
fn language_errors() {
    let err = resolve_lang(Some("cobol"), None).err().expect("unknown name");
    insta::assert_snapshot!(err, @"unknown language: cobol");

    let err = resolve_lang(None, Some(Path::new("main.rs")))
        .err()
        .expect("unknown extension");
    insta::assert_snapshot!(err, @"cannot infer language from extension '.rs', use -l/--lang");
}

#[test]
fn document_ids() {
    assert_eq!(document_id(Some(Path::new("src/app.py"))), "src/app.py");
    assert_eq!(document_id(Some(Path::new("-"))), "<source>");
    assert_eq!(document_id(None), "<source>");
}
