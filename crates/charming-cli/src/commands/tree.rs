use std::path::PathBuf;

use arborium_tree_sitter::Node;
use charming_core::GrammarKind;

use super::run_common::{CliError, finish, load_source, resolve_lang};

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub spans: bool,
}

pub fn run(args: TreeArgs) {
    finish(render(&args));
}

pub fn render(args: &TreeArgs) -> Result<String, CliError> {
    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref())?;
    let lang = resolve_lang(args.lang.as_deref(), args.source_path.as_deref())?;
    let tree = lang.parse(&source).ok_or(CliError::Parse)?;
    Ok(format_node(tree.root_node(), None, &source, 0, args.spans) + "\n")
}

/// Named nodes only. Kinds a completion can wrap carry a `*`.
fn format_node(
    node: Node<'_>,
    field_name: Option<&str>,
    source: &str,
    depth: usize,
    show_spans: bool,
) -> String {
    let indent = "  ".repeat(depth);
    let kind = node.kind();
    let marker = if GrammarKind::from_kind(kind).is_some() {
        "*"
    } else {
        ""
    };
    let field_prefix = field_name.map(|f| format!("{}: ", f)).unwrap_or_default();
    let span_suffix = if show_spans {
        let start = node.start_position();
        let end = node.end_position();
        format!(" [{}:{}-{}:{}]", start.row, start.column, end.row, end.column)
    } else {
        String::new()
    };

    let children: Vec<_> = {
        let mut cursor = node.walk();
        let mut result = Vec::new();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named() {
                    result.push((child, cursor.field_name()));
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        result
    };

    let head = format!("{}{}({}{}", indent, field_prefix, kind, marker);
    if children.is_empty() {
        let text = node
            .utf8_text(source.as_bytes())
            .unwrap_or("<invalid utf8>");
        return format!("{} {:?}){}", head, text, span_suffix);
    }

    let mut out = head + &span_suffix;
    for (child, child_field) in children {
        out.push('\n');
        out.push_str(&format_node(
            child,
            child_field,
            source,
            depth + 1,
            show_spans,
        ));
    }
    out.push(')');
    out
}
