//! The resolution façade: trigger detection plus strategy dispatch.

use charming_core::{LineIndex, Position, Range, TextEdit};
use charming_langs::Lang;
use serde::Serialize;

use crate::Result;
use crate::cache::TreeCache;
use crate::config::{ResolverConfig, Strategy};
use crate::locate::{BoundaryNode, NodeLocator, node_range};
use crate::scan::{LexicalScanner, lines};

/// The expression a completion at a trigger wraps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundary {
    pub range: Range,
    /// Present when the syntax tree produced the range.
    pub node: Option<BoundaryNode>,
    /// The strategy that produced the range: `Syntax` or `Lexical`.
    pub strategy: Strategy,
}

/// A completion trigger on the cursor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigger {
    /// Position of the `.` itself.
    pub dot: Position,
    /// The partially typed completion word after the dot. May be empty.
    pub word: Range,
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Finds the trigger for a cursor on `line`: the last `.` at or before the
/// cursor, with only identifier characters between it and the cursor. The
/// word extends through identifier characters right of the cursor.
pub fn find_trigger(line: &str, cursor: Position) -> Option<Trigger> {
    let before = lines::prefix(line, cursor.column);
    let dot = before.rfind('.')?;
    if !before[dot + 1..].chars().all(is_word_char) {
        return None;
    }

    let rest = &line[before.len()..];
    let tail = rest.find(|ch| !is_word_char(ch)).unwrap_or(rest.len());
    let row = cursor.row;
    Some(Trigger {
        dot: Position::new(row, dot),
        word: Range::new(
            Position::new(row, dot + 1),
            Position::new(row, before.len() + tail),
        ),
    })
}

/// `text` with the trigger dot and the typed word removed.
fn without_trigger(text: &str, trigger: &Trigger) -> Option<String> {
    let index = LineIndex::new(text);
    let start = index.offset(trigger.dot)?;
    let end = index.offset(trigger.word.end)?;

    let mut stripped = String::with_capacity(text.len() - (end - start));
    stripped.push_str(&text[..start]);
    stripped.push_str(&text[end..]);
    Some(stripped)
}

/// Owns a [`TreeCache`] and a [`LexicalScanner`] and picks between them.
#[derive(Default)]
pub struct BoundaryResolver {
    config: ResolverConfig,
    cache: TreeCache,
    locator: NodeLocator,
    scanner: LexicalScanner,
}

impl BoundaryResolver {
    /// A resolver with the default configuration and no grammar loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            cache: TreeCache::new(),
            locator: NodeLocator::new(config.get_pruning()),
            scanner: LexicalScanner::new(config.get_limits()),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Loads the grammar into the tree cache.
    pub fn init(&mut self, lang: &Lang) -> Result<()> {
        self.cache.init(lang)
    }

    pub fn shutdown(&mut self) {
        self.cache.shutdown();
    }

    pub fn cache(&self) -> &TreeCache {
        &self.cache
    }

    /// Resolves the expression wrapped by a completion at `cursor`.
    ///
    /// `text` is the full document snapshot. With a syntax strategy the
    /// document is re-parsed without the trigger and cached under `id`.
    /// Returns `Ok(None)` when the cursor is not on a trigger or nothing
    /// precedes it.
    pub fn resolve(&mut self, id: &str, text: &str, cursor: Position) -> Result<Option<Boundary>> {
        let lines: Vec<&str> = text.split('\n').collect();
        let Some(trigger) = lines
            .get(cursor.row)
            .and_then(|line| find_trigger(line, cursor))
        else {
            tracing::debug!(id, "no trigger at {}", cursor);
            return Ok(None);
        };

        let boundary = match self.config.get_strategy() {
            Strategy::Syntax => self.resolve_syntax(id, text, &trigger)?,
            Strategy::Lexical => self.resolve_lexical(&lines, &trigger),
            Strategy::Auto => match self.resolve_syntax(id, text, &trigger)? {
                Some(boundary) => Some(boundary),
                None => {
                    tracing::debug!(id, "no node at trigger, scanning text");
                    self.resolve_lexical(&lines, &trigger)
                }
            },
        };

        Ok(boundary.filter(|b| !b.range.is_empty()))
    }

    fn resolve_syntax(&mut self, id: &str, text: &str, trigger: &Trigger) -> Result<Option<Boundary>> {
        let Some(stripped) = without_trigger(text, trigger) else {
            return Ok(None);
        };
        self.cache.parse(id, &stripped)?;

        let Some(tree) = self.cache.get(id) else {
            return Ok(None);
        };
        let boundary = self.locator.find(tree, trigger.dot).map(|node| {
            tracing::debug!(id, kind = node.kind(), "syntax boundary");
            Boundary {
                range: node_range(&node),
                node: Some(BoundaryNode::from_node(&node)),
                strategy: Strategy::Syntax,
            }
        });
        Ok(boundary)
    }

    fn resolve_lexical(&self, lines: &[&str], trigger: &Trigger) -> Option<Boundary> {
        let after_dot = Position::new(trigger.dot.row, trigger.dot.column + 1);
        let range = self.scanner.compute_expression_range(lines, after_dot);
        Some(Boundary {
            range,
            node: None,
            strategy: Strategy::Lexical,
        })
    }

    /// Forwards an edit to the cached tree of `id`.
    pub fn apply_edit(&mut self, id: &str, edit: &TextEdit) -> bool {
        self.cache.apply_edit(id, edit)
    }

    /// Drops the cached tree of `id`.
    pub fn forget(&mut self, id: &str) -> bool {
        self.cache.remove(id)
    }
}
