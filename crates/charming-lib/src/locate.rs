//! Syntax-tree strategy: find the node ending exactly at a position.
//!
//! The search is an explicit-stack pre-order walk. Named children are pushed
//! in document order, so siblings pop right to left: the rightmost subtree is
//! fully explored before its left neighbour is visited. Ancestors are always
//! checked before their descendants, which is what makes the unwrap rules in
//! [`extract`] necessary: an `assignment` ends where its right-hand side
//! ends and is found first.

use arborium_tree_sitter::{Node, Point, Tree};
use charming_core::{GrammarKind, Position, Range};
use serde::Serialize;

use crate::cache::{point, position};
use crate::config::Pruning;

/// Detached snapshot of a located node, safe to hold after the tree changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryNode {
    /// Tree-sitter kind name.
    pub kind: &'static str,
    /// `None` when the unwrapped node is outside the accepted set
    /// (e.g. the first child of an `expression_statement` holding `await x`).
    pub grammar_kind: Option<GrammarKind>,
    pub range: Range,
    pub parent_kind: Option<&'static str>,
}

impl BoundaryNode {
    pub fn from_node(node: &Node<'_>) -> Self {
        Self {
            kind: node.kind(),
            grammar_kind: GrammarKind::from_kind(node.kind()),
            range: node_range(node),
            parent_kind: node.parent().map(|p| p.kind()),
        }
    }
}

pub(crate) fn node_range(node: &Node<'_>) -> Range {
    Range::new(position(node.start_position()), position(node.end_position()))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NodeLocator {
    pruning: Pruning,
}

impl NodeLocator {
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    /// Deepest node of interest ending exactly at `end`, unwrapped to the
    /// expression a completion should wrap.
    pub fn find<'t>(&self, tree: &'t Tree, end: Position) -> Option<Node<'t>> {
        let target = point(end);
        let mut cursor = tree.walk();
        let mut stack = vec![tree.root_node()];

        while let Some(node) = stack.pop() {
            if self.prunes(&node, target) {
                continue;
            }

            if node.end_position() == target
                && let Some(kind) = GrammarKind::from_kind(node.kind())
            {
                tracing::trace!(kind = node.kind(), "candidate at {}", end);
                return extract(node, kind);
            }

            stack.extend(node.named_children(&mut cursor));
        }

        None
    }

    fn prunes(&self, node: &Node<'_>, target: Point) -> bool {
        match self.pruning {
            Pruning::Exhaustive => false,
            // Necessary, not sufficient: multi-line nodes starting right of
            // the target column are dropped even when they end at the target.
            Pruning::Heuristic => {
                node.end_position().row < target.row
                    || node.start_position().column > target.column
            }
        }
    }
}

/// [`NodeLocator::find`] with heuristic pruning.
pub fn find_boundary_node(tree: &Tree, end: Position) -> Option<Node<'_>> {
    NodeLocator::default().find(tree, end)
}

/// Unwraps a candidate to the sub-expression the user means.
fn extract(node: Node<'_>, kind: GrammarKind) -> Option<Node<'_>> {
    match kind {
        // Grammars that wrap statements: unwrap to the statement's expression.
        GrammarKind::ExpressionStatement => {
            let mut cursor = node.walk();
            let inner = node.named_children(&mut cursor).next();
            match inner {
                Some(inner) => match GrammarKind::from_kind(inner.kind()) {
                    Some(GrammarKind::Assignment) => extract(inner, GrammarKind::Assignment),
                    _ => Some(inner),
                },
                None => {
                    let first = node.children(&mut cursor).next();
                    first
                }
            }
        }
        // `x = value`: the right-hand side, through chained `a = b = value`
        GrammarKind::Assignment => {
            let right = field_or_last(node, "right")?;
            match GrammarKind::from_kind(right.kind()) {
                Some(GrammarKind::Assignment) => extract(right, GrammarKind::Assignment),
                _ => Some(right),
            }
        }
        // `name=value`: the value, not the `name=` prefix
        GrammarKind::KeywordArgument => field_or_last(node, "value"),
        GrammarKind::Identifier
        | GrammarKind::String
        | GrammarKind::ConcatenatedString
        | GrammarKind::Integer
        | GrammarKind::Float
        | GrammarKind::True
        | GrammarKind::False
        | GrammarKind::None
        | GrammarKind::Call
        | GrammarKind::Attribute
        | GrammarKind::List
        | GrammarKind::Set
        | GrammarKind::Dictionary
        | GrammarKind::Tuple
        | GrammarKind::ParenthesizedExpression
        | GrammarKind::Subscript
        | GrammarKind::BinaryOperator
        | GrammarKind::UnaryOperator
        | GrammarKind::ListComprehension
        | GrammarKind::DictionaryComprehension
        | GrammarKind::SetComprehension
        | GrammarKind::GeneratorExpression => Some(node),
    }
}

fn field_or_last<'t>(node: Node<'t>, field: &str) -> Option<Node<'t>> {
    if let Some(child) = node.child_by_field_name(field) {
        return Some(child);
    }
    let mut cursor = node.walk();
    let last = node.children(&mut cursor).last();
    last
}
