//! Ordered pattern table used by the tokenizer

use super::{Dialect, TokenCategory};
use regex::Regex;
use std::sync::OnceLock;

pub(super) const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "const", "continue", "def",
    "del", "elif", "else", "except", "finally", "fn", "for", "from", "function", "global",
    "if", "import", "in", "is", "lambda", "let", "nonlocal", "not", "or", "pass", "raise",
    "return", "struct", "try", "var", "void", "while", "with", "yield",
];

pub(super) const BUILTINS: &[&str] = &[
    "abs", "all", "any", "append", "appendleft", "bool", "deque", "dict", "enumerate",
    "filter", "float", "heapify", "heappop", "heappush", "int", "isinstance", "len",
    "list", "map", "max", "min", "pop", "popleft", "print", "range", "reversed", "self",
    "set", "sorted", "str", "sum", "super", "tuple", "zip",
];

pub(super) const BOOLEANS: &[&str] = &["True", "False", "None", "true", "false", "null"];

/// One entry of the priority list
pub(super) struct Pattern {
    pub category: TokenCategory,
    pub regex: Regex,
}

fn word_set(words: &[&str]) -> String {
    format!(r"^(?:{})\b", words.join("|"))
}

fn compile(source: &str) -> Regex {
    Regex::new(source).expect("built-in token pattern must compile")
}

/// Comment-to-end-of-line pattern of a dialect; always tried first
pub(super) fn comment_pattern(dialect: Dialect) -> &'static Regex {
    static COMMENTS: OnceLock<[Regex; 3]> = OnceLock::new();
    let [hash, slash, generic] = COMMENTS.get_or_init(|| {
        [
            compile(r"^#.*"),
            compile(r"^//.*"),
            compile(r"^(?:#|//).*"),
        ]
    });
    match dialect {
        Dialect::Hash => hash,
        Dialect::Slash => slash,
        Dialect::Generic => generic,
    }
}

/// The patterns after the comment, in priority order, compiled once
pub(super) fn patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let sources = [
            (
                TokenCategory::String,
                r#"^(?:"""[\s\S]*?"""|'''[\s\S]*?'''|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#
                    .to_string(),
            ),
            (TokenCategory::Keyword, word_set(KEYWORDS)),
            (TokenCategory::Builtin, word_set(BUILTINS)),
            (TokenCategory::Boolean, word_set(BOOLEANS)),
            (TokenCategory::Number, r"^[0-9]+(?:\.[0-9]+)?\b".to_string()),
            (TokenCategory::Operator, r"^[+\-*/%=<>!&|^~:]+".to_string()),
        ];

        sources
            .into_iter()
            .map(|(category, source)| Pattern {
                category,
                regex: compile(&source),
            })
            .collect()
    })
}

/// Byte length of the identifier at the start of `text`, 0 if there is none
pub(super) fn identifier_len(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_alphabetic() || c == '_' => {}
        _ => return 0,
    }
    chars
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(text.len(), |(i, _)| i)
}

/// Byte length of a run of word characters that starts with a digit, 0 if
/// `text` does not start with a digit
pub(super) fn digit_run_len(text: &str) -> usize {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return 0;
    }
    text.char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(text.len(), |(i, _)| i)
}
