#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the Charming crates.
//!
//! Three groups:
//! - **Coordinates**: [`Position`] and [`Range`], zero-based `(row, column)`
//!   pairs with byte columns, matching what tree-sitter reports
//! - **Edits**: [`TextEdit`] descriptors and the [`LineIndex`] that derives
//!   their byte offsets from text
//! - **Grammar kinds**: the closed [`GrammarKind`] set of node kinds that may
//!   be returned as a completion target

mod edit;
mod kind;
mod position;

pub use edit::{LineIndex, TextEdit};
pub use kind::GrammarKind;
pub use position::{Position, Range};

#[cfg(test)]
mod edit_tests;
