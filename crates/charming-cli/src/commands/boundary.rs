use std::path::PathBuf;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use charming_core::{LineIndex, Position};
use charming_lib::{Boundary, BoundaryResolver, Pruning, ResolverConfig, Strategy};
use serde::Serialize;

use super::run_common::{CliError, document_id, finish, load_source, resolve_lang};

pub struct BoundaryArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub at: Position,
    pub strategy: Strategy,
    pub exhaustive: bool,
    pub max_iterations: Option<u32>,
    pub json: bool,
    pub color: bool,
}

impl BoundaryArgs {
    fn config(&self) -> ResolverConfig {
        let pruning = if self.exhaustive {
            Pruning::Exhaustive
        } else {
            Pruning::Heuristic
        };
        let mut config = ResolverConfig::new()
            .strategy(self.strategy)
            .pruning(pruning);
        if let Some(limit) = self.max_iterations {
            config = config.max_iterations(limit);
        }
        config
    }
}

#[derive(Serialize)]
struct BoundaryReport<'s> {
    at: Position,
    target: Option<&'s str>,
    boundary: Option<Boundary>,
}

pub fn run(args: BoundaryArgs) {
    finish(render(&args));
}

pub fn render(args: &BoundaryArgs) -> Result<String, CliError> {
    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref())?;
    let config = args.config();

    let mut resolver = BoundaryResolver::with_config(config);
    if config.get_strategy() != Strategy::Lexical {
        let lang = resolve_lang(args.lang.as_deref(), args.source_path.as_deref())?;
        resolver.init(&lang)?;
    }

    let id = document_id(args.source_path.as_deref());
    let boundary = resolver.resolve(&id, &source, args.at)?;
    tracing::debug!(found = boundary.is_some(), "resolved {}", args.at);

    if args.json {
        let report = BoundaryReport {
            at: args.at,
            target: boundary.as_ref().and_then(|b| b.range.slice(&source)),
            boundary,
        };
        return Ok(serde_json::to_string_pretty(&report)? + "\n");
    }

    let Some(boundary) = boundary else {
        return Ok(format!("no completion target at {}\n", args.at));
    };
    let path = args.source_path.as_ref().map(|_| id.as_str());
    Ok(annotate(&source, path, &boundary, args.color))
}

/// Renders the source with the boundary underlined.
fn annotate(source: &str, path: Option<&str>, boundary: &Boundary, colored: bool) -> String {
    let index = LineIndex::new(source);
    let (Some(start), Some(end)) = (
        index.offset(boundary.range.start),
        index.offset(boundary.range.end),
    ) else {
        return format!("{}\n", boundary.range);
    };

    let label = match &boundary.node {
        Some(node) => node.kind.to_owned(),
        None => "lexical scan".to_owned(),
    };
    let title = format!("completion target {}", boundary.range);

    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(start..end).label(&label));
    if let Some(p) = path {
        snippet = snippet.path(p);
    }

    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };
    let report = [Level::INFO.primary_title(&title).element(snippet)];
    format!("{}\n", renderer.render(&report))
}
