//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use charming_core::Position;
use charming_lib::Strategy;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::alias::AliasArgs;
use crate::commands::boundary::BoundaryArgs;
use crate::commands::langs::LangsArgs;
use crate::commands::tree::TreeArgs;

pub struct BoundaryParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub at: Position,
    pub strategy: Strategy,
    pub exhaustive: bool,
    pub max_iterations: Option<u32>,
    pub json: bool,
    pub color: ColorChoice,
}

impl BoundaryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
            at: parse_at(m),
            strategy: parse_strategy(m),
            exhaustive: m.get_flag("exhaustive"),
            max_iterations: m.get_one::<u32>("max_iterations").copied(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<BoundaryParams> for BoundaryArgs {
    fn from(p: BoundaryParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            lang: p.lang,
            at: p.at,
            strategy: p.strategy,
            exhaustive: p.exhaustive,
            max_iterations: p.max_iterations,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AliasParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub at: Position,
}

impl AliasParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            at: parse_at(m),
        }
    }
}

impl From<AliasParams> for AliasArgs {
    fn from(p: AliasParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            at: p.at,
        }
    }
}

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub spans: bool,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            lang: p.lang,
            spans: p.spans,
        }
    }
}

pub struct LangsParams {
    pub kinds: bool,
}

impl LangsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kinds: m.get_flag("kinds"),
        }
    }
}

impl From<LangsParams> for LangsArgs {
    fn from(p: LangsParams) -> Self {
        Self { kinds: p.kinds }
    }
}

/// `--at` is required, so clap guarantees a value.
fn parse_at(m: &ArgMatches) -> Position {
    m.get_one::<Position>("at").copied().unwrap_or_default()
}

/// Parse --strategy flag into Strategy.
fn parse_strategy(m: &ArgMatches) -> Strategy {
    match m.get_one::<String>("strategy").map(|s| s.as_str()) {
        Some("syntax") => Strategy::Syntax,
        Some("lexical") => Strategy::Lexical,
        _ => Strategy::Auto,
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
