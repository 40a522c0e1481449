//! Terminal atoms: the literal or dotted name directly before a boundary.

use std::sync::LazyLock;

use regex_automata::meta::Regex;

const IDENTIFIER: &str = r"[_\p{L}]\w*";

/// One string literal with an optional prefix. Escapes are opaque.
const STRING: &str = concat!(
    r#"(?:[rRbBuUfF]{1,2})?"#,
    r#"(?:'''(?:[^'\\]|\\.|'{1,2}(?:[^'\\]|\\.))*'''"#,
    r#"|"""(?:[^"\\]|\\.|"{1,2}(?:[^"\\]|\\.))*""""#,
    r#"|'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*")"#,
);

const NUMBER: &str = concat!(
    r"(?:0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+",
    r"|(?:[0-9][0-9_]*(?:\.[0-9_]*)?|\.[0-9][0-9_]*)(?:[eE][+-]?[0-9][0-9_]*)?[jJ]?)",
);

/// Adjacent string literals, a number, a name or a leading `.name`, then any
/// `.name` chain, ending at the end of the haystack. The leftmost match is
/// the maximal one.
static ATOM: LazyLock<Regex> = LazyLock::new(|| {
    let strings = format!(r"{STRING}(?:\s*{STRING})*");
    let pattern =
        format!(r"(?:{strings}|{NUMBER}|{IDENTIFIER}|\.{IDENTIFIER})(?:\.{IDENTIFIER})*\z");
    Regex::new(&pattern).expect("atom pattern is a valid regex")
});

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Byte offset where the maximal atom ending at the end of `text` starts.
///
/// `None` when no atom ends there, or when the atom is a bare keyword.
pub fn atom_start(text: &str) -> Option<usize> {
    let found = ATOM.find(text)?;
    let atom = &text[found.range()];
    if is_keyword(atom) {
        tracing::trace!(atom, "keyword is not an atom");
        return None;
    }
    Some(found.start())
}
