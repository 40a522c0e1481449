//! Tests for CLI dispatch logic: argument validation and params extraction.

use std::path::PathBuf;

use charming_core::Position;
use charming_lib::Strategy;

use super::*;
use crate::cli::args::parse_position;
use crate::cli::commands::{alias_command, boundary_command, langs_command, tree_command};

#[test]
fn boundary_defaults() {
    let m = boundary_command()
        .try_get_matches_from(["boundary", "app.py", "--at", "3:14"])
        .unwrap();
    let params = BoundaryParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("app.py")));
    assert_eq!(params.source_text, None);
    assert_eq!(params.at, Position::new(3, 14));
    assert_eq!(params.strategy, Strategy::Auto);
    assert!(!params.exhaustive);
    assert_eq!(params.max_iterations, None);
    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn boundary_all_flags() {
    let m = boundary_command()
        .try_get_matches_from([
            "boundary",
            "-s",
            "x = foo.",
            "--at",
            "0:8",
            "--strategy",
            "lexical",
            "--exhaustive",
            "--max-iterations",
            "16",
            "--json",
            "--color",
            "never",
        ])
        .unwrap();
    let params = BoundaryParams::from_matches(&m);

    assert_eq!(params.source_text.as_deref(), Some("x = foo."));
    assert_eq!(params.strategy, Strategy::Lexical);
    assert!(params.exhaustive);
    assert_eq!(params.max_iterations, Some(16));
    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn boundary_requires_position() {
    let result = boundary_command().try_get_matches_from(["boundary", "app.py"]);
    assert!(result.is_err());
}

#[test]
fn boundary_rejects_unknown_strategy() {
    let result = boundary_command().try_get_matches_from([
        "boundary",
        "app.py",
        "--at",
        "0:0",
        "--strategy",
        "guess",
    ]);
    assert!(result.is_err());
}

#[test]
fn boundary_rejects_zero_iterations() {
    let result = boundary_command().try_get_matches_from([
        "boundary",
        "app.py",
        "--at",
        "0:0",
        "--max-iterations",
        "0",
    ]);
    assert!(result.is_err());
}

#[test]
fn source_text_conflicts_with_path() {
    let result =
        alias_command().try_get_matches_from(["alias", "app.py", "-s", "x", "--at", "0:0"]);
    assert!(result.is_err());
}

#[test]
fn alias_params() {
    let m = alias_command()
        .try_get_matches_from(["alias", "-s", "import numpy as", "--at", "0:15"])
        .unwrap();
    let params = AliasParams::from_matches(&m);
    assert_eq!(params.source_text.as_deref(), Some("import numpy as"));
    assert_eq!(params.at, Position::new(0, 15));
}

#[test]
fn tree_params() {
    let m = tree_command()
        .try_get_matches_from(["tree", "app.py", "--spans"])
        .unwrap();
    let params = TreeParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("app.py")));
    assert!(params.spans);
    assert_eq!(params.lang, None);
}

#[test]
fn positions() {
    assert_eq!(parse_position("3:14"), Ok(Position::new(3, 14)));
    assert_eq!(parse_position(" 0 : 5 "), Ok(Position::new(0, 5)));
    assert!(parse_position("3").is_err());
    assert!(parse_position("a:1").is_err());
    assert!(parse_position("1:-2").is_err());
}

#[test]
fn cli_builds() {
    build_cli().debug_assert();
}

#[test]
fn langs_kinds_flag() {
    let m = langs_command().try_get_matches_from(["langs"]).unwrap();
    assert!(!LangsParams::from_matches(&m).kinds);

    let m = langs_command()
        .try_get_matches_from(["langs", "--kinds"])
        .unwrap();
    assert!(LangsParams::from_matches(&m).kinds);
}
