//! Charming: find the expression a dot-triggered completion wraps.
//!
//! Typing `target.` in an editor can offer `print(target)`, `len(target)`
//! and friends. The hard part is deciding where `target` starts. Two
//! strategies answer that:
//!
//! - [`locate`]: walk a tree-sitter tree cached per document
//!   ([`TreeCache`]) for the node ending exactly at the trigger
//! - [`scan`]: scan the raw text backward, balancing brackets across lines,
//!   without parsing
//!
//! [`BoundaryResolver`] combines both.
//!
//! # Example
//!
//! ```
//! use charming_lib::{BoundaryResolver, Position};
//!
//! let mut resolver = BoundaryResolver::new();
//! resolver.init(&charming_langs::python()).expect("grammar loads");
//!
//! let text = "x = [1, 2, 3].";
//! let boundary = resolver
//!     .resolve("doc.py", text, Position::new(0, 14))
//!     .expect("engine initialized")
//!     .expect("target found");
//! assert_eq!(boundary.range.slice(text), Some("[1, 2, 3]"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod config;
pub mod locate;
pub mod reexport;
pub mod resolve;
pub mod scan;


pub use cache::{DocumentId, TreeCache};
pub use charming_core::{GrammarKind, LineIndex, Position, Range, TextEdit};
pub use config::{Pruning, ResolverConfig, ScanLimits, Strategy};
pub use locate::{BoundaryNode, find_boundary_node};
pub use resolve::{Boundary, BoundaryResolver, Trigger, find_trigger};
pub use scan::{LexicalScanner, ScanOutcome};

/// Errors escalated to the caller.
///
/// Everything else (unknown document, no candidate node, unbalanced
/// brackets) degrades to an absent or empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `parse` was called before the grammar was loaded.
    #[error("parsing engine is not initialized")]
    EngineUninitialized,

    /// The grammar could not be loaded into the parser.
    #[error("failed to load the {lang} grammar: {message}")]
    EngineSetup { lang: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
