use std::sync::Arc;

use arborium_tree_sitter::{Language, LanguageError, Parser, Tree};

pub mod builtin;

pub use builtin::*;

/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Unified facade over a tree-sitter `Language`.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    /// A fresh parser configured for this language.
    fn parser(&self) -> Result<Parser, LanguageError>;

    /// One-shot parse of `source`.
    ///
    /// Returns `None` when the parser could not be configured or gave up.
    /// Long-lived callers should keep their own parser from [`LangImpl::parser`].
    fn parse(&self, source: &str) -> Option<Tree>;

    fn resolve_named_node(&self, kind: &str) -> Option<u16>;

    /// Every named node kind, as listed by `charming langs --kinds`.
    fn all_named_node_kinds(&self) -> Vec<&'static str>;
}

#[derive(Debug)]
pub struct LangInner {
    name: String,
    ts_lang: Language,
}

impl LangInner {
    pub fn new(name: &str, ts_lang: Language) -> Self {
        Self {
            name: name.to_owned(),
            ts_lang,
        }
    }
}

impl LangImpl for LangInner {
    fn name(&self) -> &str {
        &self.name
    }

    fn parser(&self) -> Result<Parser, LanguageError> {
        let mut parser = Parser::new();
        parser.set_language(&self.ts_lang)?;
        Ok(parser)
    }

    fn parse(&self, source: &str) -> Option<Tree> {
        self.parser().ok()?.parse(source, None)
    }

    fn resolve_named_node(&self, kind: &str) -> Option<u16> {
        let id = self.ts_lang.id_for_node_kind(kind, true);
        // For named nodes, 0 always means "not found"
        (id != 0).then_some(id)
    }

    fn all_named_node_kinds(&self) -> Vec<&'static str> {
        let count = self.ts_lang.node_kind_count();
        (0..count as u16)
            .filter(|&id| self.ts_lang.node_kind_is_named(id))
            .filter_map(|id| self.ts_lang.node_kind_for_id(id))
            .collect()
    }
}
