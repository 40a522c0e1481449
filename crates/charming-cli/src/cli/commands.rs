//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("charming")
        .about("Resolve the expression a dot completion wraps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(boundary_command())
        .subcommand(alias_command())
        .subcommand(tree_command())
        .subcommand(langs_command())
}

/// Resolve the completion target before a `.` trigger.
pub fn boundary_command() -> Command {
    Command::new("boundary")
        .about("Show the expression a completion at the cursor wraps")
        .override_usage(
            "\
  charming boundary <SOURCE> --at <ROW:COL>
  charming boundary -s <TEXT> --at <ROW:COL>",
        )
        .after_help(
            r#"EXAMPLES:
  charming boundary app.py --at 3:14                 # tree, scan as fallback
  charming boundary app.py --at 3:14 --json          # machine-readable
  charming boundary -s 'x = [1, 2].' --at 0:11       # inline source
  charming boundary app.py --at 3:14 --strategy lexical"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(at_arg())
        .arg(strategy_arg())
        .arg(exhaustive_arg())
        .arg(max_iterations_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Name an `as` clause at the cursor should re-export.
pub fn alias_command() -> Command {
    Command::new("alias")
        .about("Show the name an 'as' clause at the cursor would re-export")
        .after_help(
            r#"EXAMPLES:
  charming alias -s 'from .models import User a' --at 0:26"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(at_arg())
}

/// Dump the syntax tree with accepted kinds marked.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Show the syntax tree, marking kinds a completion can wrap with '*'")
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(spans_arg())
}

/// List supported languages.
pub fn langs_command() -> Command {
    Command::new("langs")
        .about("List supported languages")
        .arg(kinds_arg())
}
