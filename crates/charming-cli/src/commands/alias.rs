use std::path::PathBuf;

use charming_core::Position;
use charming_lib::reexport::alias_target;

use super::run_common::{CliError, finish, load_source};

pub struct AliasArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub at: Position,
}

pub fn run(args: AliasArgs) {
    finish(render(&args));
}

pub fn render(args: &AliasArgs) -> Result<String, CliError> {
    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref())?;
    let lines: Vec<&str> = source.split('\n').collect();

    let name = alias_target(&lines, args.at).and_then(|range| range.slice(&source));
    Ok(match name {
        Some(name) => format!("as {}\n", name),
        None => format!("no alias target at {}\n", args.at),
    })
}
