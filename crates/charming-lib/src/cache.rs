//! Per-document syntax tree cache.
//!
//! The cache owns the parser and one tree per document. It starts
//! uninitialized: [`TreeCache::init`] loads the grammar, and parsing before
//! that is an error rather than a silent no-op. Trees are replaced wholesale
//! on [`TreeCache::parse`] and only mutated in place through
//! [`TreeCache::apply_edit`].

use std::collections::HashMap;

use arborium_tree_sitter::{InputEdit, Parser, Point, Tree};
use charming_core::{Position, TextEdit};
use charming_langs::Lang;

use crate::{Error, Result};

/// Opaque document key (usually a path or URI).
pub type DocumentId = String;

/// Loaded grammar plus the parser configured for it.
struct Engine {
    lang_name: String,
    parser: Parser,
}

#[derive(Default)]
pub struct TreeCache {
    engine: Option<Engine>,
    trees: HashMap<DocumentId, Tree>,
}

impl TreeCache {
    /// An uninitialized cache. Call [`TreeCache::init`] before parsing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache initialized for `lang`.
    pub fn with_lang(lang: &Lang) -> Result<Self> {
        let mut cache = Self::new();
        cache.init(lang)?;
        Ok(cache)
    }

    /// Loads the grammar. Switching to another language drops every cached
    /// tree; re-initializing the same language keeps them.
    pub fn init(&mut self, lang: &Lang) -> Result<()> {
        let parser = lang.parser().map_err(|e| Error::EngineSetup {
            lang: lang.name().to_owned(),
            message: e.to_string(),
        })?;

        if let Some(previous) = &self.engine
            && previous.lang_name != lang.name()
        {
            self.trees.clear();
        }

        tracing::debug!(lang = lang.name(), "tree cache initialized");
        self.engine = Some(Engine {
            lang_name: lang.name().to_owned(),
            parser,
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// Name of the loaded grammar, if any.
    pub fn lang_name(&self) -> Option<&str> {
        self.engine.as_ref().map(|e| e.lang_name.as_str())
    }

    /// Drops the parser and every cached tree.
    pub fn shutdown(&mut self) {
        self.engine = None;
        self.trees.clear();
    }

    /// Parses `text` and stores the tree under `id`, replacing any previous
    /// tree for that document.
    pub fn parse(&mut self, id: &str, text: &str) -> Result<()> {
        let engine = self.engine.as_mut().ok_or(Error::EngineUninitialized)?;

        match engine.parser.parse(text, None) {
            Some(tree) => {
                tracing::trace!(id, bytes = text.len(), "parsed document");
                self.trees.insert(id.to_owned(), tree);
            }
            None => {
                // Only happens on cancellation; keep whatever we had.
                tracing::warn!(id, "parser produced no tree");
            }
        }
        Ok(())
    }

    /// Applies `edit` to the cached tree of `id`.
    ///
    /// Returns `false` without touching anything when `id` has no tree.
    pub fn apply_edit(&mut self, id: &str, edit: &TextEdit) -> bool {
        let Some(tree) = self.trees.get_mut(id) else {
            return false;
        };
        tree.edit(&input_edit(edit));
        true
    }

    pub fn get(&self, id: &str) -> Option<&Tree> {
        self.trees.get(id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.trees.contains_key(id)
    }

    /// Forgets the tree of `id`. Returns whether one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.trees.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

pub(crate) fn point(pos: Position) -> Point {
    Point {
        row: pos.row,
        column: pos.column,
    }
}

pub(crate) fn position(point: Point) -> Position {
    Position::new(point.row, point.column)
}

fn input_edit(edit: &TextEdit) -> InputEdit {
    InputEdit {
        start_byte: edit.start_byte,
        old_end_byte: edit.old_end_byte,
        new_end_byte: edit.new_end_byte,
        start_position: point(edit.start),
        old_end_position: point(edit.old_end),
        new_end_position: point(edit.new_end),
    }
}
