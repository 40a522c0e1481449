use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! grammar_kinds {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Node kinds of the Python grammar that can be a completion target.
        ///
        /// Everything outside this set is "uninteresting": the locator walks
        /// through such nodes but never returns one.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum GrammarKind {
            $($variant,)*
        }

        impl GrammarKind {
            pub const ALL: &'static [GrammarKind] = &[$(GrammarKind::$variant,)*];

            /// Maps a tree-sitter node kind to an accepted grammar kind.
            pub fn from_kind(kind: &str) -> Option<Self> {
                match kind {
                    $($name => Some(GrammarKind::$variant),)*
                    _ => None,
                }
            }

            /// The tree-sitter node kind name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(GrammarKind::$variant => $name,)*
                }
            }
        }
    };
}

grammar_kinds! {
    ExpressionStatement => "expression_statement",
    KeywordArgument => "keyword_argument",
    Assignment => "assignment",
    Identifier => "identifier",
    String => "string",
    ConcatenatedString => "concatenated_string",
    Integer => "integer",
    Float => "float",
    True => "true",
    False => "false",
    None => "none",
    Call => "call",
    Attribute => "attribute",
    List => "list",
    Set => "set",
    Dictionary => "dictionary",
    Tuple => "tuple",
    ParenthesizedExpression => "parenthesized_expression",
    Subscript => "subscript",
    BinaryOperator => "binary_operator",
    UnaryOperator => "unary_operator",
    ListComprehension => "list_comprehension",
    DictionaryComprehension => "dictionary_comprehension",
    SetComprehension => "set_comprehension",
    GeneratorExpression => "generator_expression",
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
