//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use charming_core::Position;
use clap::{Arg, ArgAction, value_parser};

/// Source file to read (positional). `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to read ('-' for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Language flag (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .help("Language (inferred from extension, python otherwise)")
}

/// Cursor position (--at).
pub fn at_arg() -> Arg {
    Arg::new("at")
        .long("at")
        .value_name("ROW:COL")
        .required(true)
        .value_parser(parse_position)
        .help("Cursor position, zero-based; COL is a byte offset")
}

/// Resolution strategy (--strategy).
pub fn strategy_arg() -> Arg {
    Arg::new("strategy")
        .long("strategy")
        .value_name("STRATEGY")
        .default_value("auto")
        .value_parser(["auto", "syntax", "lexical"])
        .help("Syntax tree, lexical scan, or tree with scan fallback")
}

/// Disable subtree pruning (--exhaustive).
pub fn exhaustive_arg() -> Arg {
    Arg::new("exhaustive")
        .long("exhaustive")
        .action(ArgAction::SetTrue)
        .help("Visit every node instead of pruning by position")
}

/// Lexical scan iteration cap (--max-iterations).
pub fn max_iterations_arg() -> Arg {
    Arg::new("max_iterations")
        .long("max-iterations")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Cap on lexical scan steps (default: 512)")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON instead of an annotated snippet")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Color output control (--color).
pub fn kinds_arg() -> Arg {
    Arg::new("kinds")
        .long("kinds")
        .action(ArgAction::SetTrue)
        .help("List named node kinds, marking kinds a completion can wrap with '*'")
}

pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Parses `ROW:COL`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", row))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", column))?;
    Ok(Position::new(row, column))
}
