//! Line-oriented syntax classification for source highlighting
//!
//! [`tokenize`] splits one line of code into [`Token`]s tagged with a
//! [`TokenCategory`]. It is not a lexer for any particular language: it runs a
//! fixed list of anchored patterns at the current position and takes the first
//! one that matches, so the order of the list is the priority.
//!
//! ```text
//! comment → string → keyword → builtin → boolean → number → operator → function call
//! ```
//!
//! Whitespace is always its own `Default` token, anything unmatched falls back
//! to an identifier run or a single character. Concatenating the token texts
//! gives back the input line exactly.
//!
//! Lines are independent: a string or comment opened on one line is not
//! continued on the next.
//!
//! The comment marker depends on the [`Dialect`]: `#` for Python-like
//! languages, `//` for C-like ones, and both when the language is unknown.

mod patterns;

use patterns::{comment_pattern, digit_run_len, identifier_len, patterns};

/// Which line-comment marker a source uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `#` comments; `//` is an operator (Python floor division)
    Hash,
    /// `//` comments; `#` is punctuation
    Slash,
    /// Both markers start a comment
    #[default]
    Generic,
}

impl Dialect {
    /// Dialect for a trace file's `language` field
    pub fn from_language(language: Option<&str>) -> Self {
        let Some(language) = language else {
            return Dialect::Generic;
        };
        match language.trim().to_ascii_lowercase().as_str() {
            "python" | "py" | "python3" | "ruby" | "rb" | "shell" | "sh" | "bash" => Dialect::Hash,
            "c" | "cpp" | "c++" | "java" | "javascript" | "js" | "typescript" | "ts" | "rust"
            | "rs" | "go" | "kotlin" | "swift" | "csharp" | "c#" => Dialect::Slash,
            _ => Dialect::Generic,
        }
    }
}

/// Highlight category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Builtin,
    String,
    Number,
    Comment,
    Boolean,
    Operator,
    Function,
    /// Identifiers, punctuation and whitespace
    Default,
}

/// A classified slice of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub category: TokenCategory,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    fn new(category: TokenCategory, text: &'a str) -> Self {
        Token { category, text }
    }
}

/// Classify one line of source code.
///
/// An empty line yields no tokens.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    tokenize_with(line, Dialect::Generic)
}

/// Classify one line with the comment syntax of `dialect`
pub fn tokenize_with(line: &str, dialect: Dialect) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let len = next_token(rest, dialect, &mut tokens);
        rest = &rest[len..];
    }

    tokens
}

/// Tokenize every line of `source` independently
pub fn tokenize_source(source: &str) -> Vec<Vec<Token<'_>>> {
    source.lines().map(tokenize).collect()
}

/// Push the token at the start of `rest` and return its byte length
fn next_token<'a>(rest: &'a str, dialect: Dialect, tokens: &mut Vec<Token<'a>>) -> usize {
    let whitespace = rest
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i);
    if whitespace > 0 {
        tokens.push(Token::new(TokenCategory::Default, &rest[..whitespace]));
        return whitespace;
    }

    if let Some(m) = comment_pattern(dialect).find(rest) {
        tokens.push(Token::new(TokenCategory::Comment, m.as_str()));
        return m.end();
    }

    for pattern in patterns() {
        if let Some(m) = pattern.regex.find(rest) {
            if m.end() > 0 {
                tokens.push(Token::new(pattern.category, &rest[..m.end()]));
                return m.end();
            }
        }
    }

    // An identifier is a function only when `(` follows immediately
    let ident = identifier_len(rest);
    if ident > 0 {
        let category = if rest[ident..].starts_with('(') {
            TokenCategory::Function
        } else {
            TokenCategory::Default
        };
        tokens.push(Token::new(category, &rest[..ident]));
        return ident;
    }

    // `1if` is one word, not a number followed by a keyword
    let run = digit_run_len(rest);
    if run > 0 {
        tokens.push(Token::new(TokenCategory::Default, &rest[..run]));
        return run;
    }

    let single = rest.chars().next().map_or(rest.len(), char::len_utf8);
    tokens.push(Token::new(TokenCategory::Default, &rest[..single]));
    single
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenCategory::*;

    fn categories(line: &str) -> Vec<(TokenCategory, &str)> {
        tokenize(line).into_iter().map(|t| (t.category, t.text)).collect()
    }

    #[test]
    fn test_function_definition() {
        assert_eq!(
            categories("def foo():"),
            vec![
                (Keyword, "def"),
                (Default, " "),
                (Function, "foo"),
                (Default, "("),
                (Default, ")"),
                (Operator, ":"),
            ]
        );
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        assert_eq!(categories("define"), vec![(Default, "define")]);
        assert_eq!(categories("is_valid"), vec![(Default, "is_valid")]);
        assert_eq!(categories("format"), vec![(Default, "format")]);
    }

    #[test]
    fn test_function_needs_adjacent_paren() {
        assert_eq!(
            categories("foo (x)"),
            vec![
                (Default, "foo"),
                (Default, " "),
                (Default, "("),
                (Default, "x"),
                (Default, ")"),
            ]
        );
    }

    #[test]
    fn test_comment_takes_rest_of_line() {
        assert_eq!(
            categories("x = 1  # if else"),
            vec![
                (Default, "x"),
                (Default, " "),
                (Operator, "="),
                (Default, " "),
                (Number, "1"),
                (Default, "  "),
                (Comment, "# if else"),
            ]
        );
        assert_eq!(categories("// note"), vec![(Comment, "// note")]);
    }

    #[test]
    fn test_strings_with_escapes() {
        assert_eq!(
            categories(r#"s = "a\"b" + 'c'"#),
            vec![
                (Default, "s"),
                (Default, " "),
                (Operator, "="),
                (Default, " "),
                (String, r#""a\"b""#),
                (Default, " "),
                (Operator, "+"),
                (Default, " "),
                (String, "'c'"),
            ]
        );
        assert_eq!(categories(r#""""doc""""#), vec![(String, r#""""doc""""#)]);
    }

    #[test]
    fn test_unterminated_string_falls_through() {
        assert_eq!(
            categories(r#""abc"#),
            vec![(Default, "\""), (Default, "abc")]
        );
    }

    #[test]
    fn test_builtins_booleans_numbers() {
        assert_eq!(
            categories("len(a) == 3.5 or True"),
            vec![
                (Builtin, "len"),
                (Default, "("),
                (Default, "a"),
                (Default, ")"),
                (Default, " "),
                (Operator, "=="),
                (Default, " "),
                (Number, "3.5"),
                (Default, " "),
                (Keyword, "or"),
                (Default, " "),
                (Boolean, "True"),
            ]
        );
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_non_ascii_falls_back_to_single_chars() {
        let tokens = tokenize("x → y");
        let text: std::string::String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(text, "x → y");
        assert!(tokens.iter().any(|t| t.text == "→" && t.category == Default));
    }

    #[test]
    fn test_tokenize_source_is_per_line() {
        let lines = tokenize_source("s = \"\"\"open\nclose\"\"\"");
        // The second line is not known to be inside a string
        assert_eq!(lines[1][0], Token::new(Default, "close"));
    }
}
