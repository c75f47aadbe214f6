// Integration tests for the line tokenizer

use rstest::rstest;
use tracescrub::syntax::{tokenize, tokenize_with, Dialect, TokenCategory};

fn reconstruct(line: &str) -> String {
    tokenize(line).iter().map(|t| t.text).collect()
}

#[rstest]
#[case("def foo():")]
#[case("    while lo <= hi:")]
#[case("        mid = (lo + hi) // 2  # floor")]
#[case(r#"print(f"{x}\n", 'it\'s')"#)]
#[case("if nums[mid] == target and not found:")]
#[case("for (int i = 0; i < n; i++) {")]
#[case("x = \"unterminated")]
#[case("\t\tresult.append(3.14159)")]
#[case("λ = α → β")]
#[case("@@@ ``` $$$")]
fn test_tokens_cover_line(#[case] line: &str) {
    assert_eq!(reconstruct(line), line);
    assert!(tokenize(line).iter().all(|t| !t.text.is_empty()));
}

#[test]
fn test_def_foo_categories() {
    let categories: Vec<TokenCategory> = tokenize("def foo():").iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::Keyword,
            TokenCategory::Default,
            TokenCategory::Function,
            TokenCategory::Default,
            TokenCategory::Default,
            TokenCategory::Operator,
        ]
    );
}

#[test]
fn test_floor_division_is_comment_without_language() {
    let tokens = tokenize("mid = (lo + hi) // 2");
    let last = tokens.last().expect("tokens");
    assert_eq!(last.category, TokenCategory::Comment);
    assert_eq!(last.text, "// 2");
}

#[test]
fn test_python_floor_division_is_operator() {
    let tokens = tokenize_with("mid = (lo + hi) // 2  # halve", Dialect::Hash);
    let categories: Vec<(TokenCategory, &str)> = tokens
        .iter()
        .skip(12)
        .map(|t| (t.category, t.text))
        .collect();
    assert_eq!(
        categories,
        vec![
            (TokenCategory::Operator, "//"),
            (TokenCategory::Default, " "),
            (TokenCategory::Number, "2"),
            (TokenCategory::Default, "  "),
            (TokenCategory::Comment, "# halve"),
        ]
    );
}

#[test]
fn test_slash_dialect_ignores_hash() {
    let tokens = tokenize_with("#include <stdio.h> // io", Dialect::Slash);
    assert_eq!(tokens[0].category, TokenCategory::Default);
    assert_eq!(tokens[0].text, "#");
    let last = tokens.last().expect("tokens");
    assert_eq!((last.category, last.text), (TokenCategory::Comment, "// io"));
}

#[rstest]
#[case(Some("python"), Dialect::Hash)]
#[case(Some("Python "), Dialect::Hash)]
#[case(Some("javascript"), Dialect::Slash)]
#[case(Some("cpp"), Dialect::Slash)]
#[case(Some("pseudocode"), Dialect::Generic)]
#[case(None, Dialect::Generic)]
fn test_dialect_from_language(#[case] language: Option<&str>, #[case] expected: Dialect) {
    assert_eq!(Dialect::from_language(language), expected);
}

#[test]
fn test_digit_led_word_is_one_token() {
    let tokens = tokenize("1if x");
    assert_eq!(tokens[0].text, "1if");
    assert_eq!(tokens[0].category, TokenCategory::Default);
    assert!(tokens.iter().all(|t| t.category != TokenCategory::Keyword));

    let tokens = tokenize("3.5 + 2");
    assert_eq!(tokens[0].category, TokenCategory::Number);
    assert_eq!(tokens[0].text, "3.5");
}

#[test]
fn test_method_call_is_function() {
    let tokens = tokenize("stack.push(x)");
    let push = tokens.iter().find(|t| t.text == "push").expect("push token");
    assert_eq!(push.category, TokenCategory::Function);
    let dot = tokens.iter().find(|t| t.text == ".").expect("dot token");
    assert_eq!(dot.category, TokenCategory::Default);
}

#[test]
fn test_builtin_before_function() {
    let tokens = tokenize("range(n)");
    assert_eq!(tokens[0].category, TokenCategory::Builtin);
}

#[test]
fn test_keyword_prefix_identifiers() {
    for word in ["iffy", "format", "classes", "returned", "Trueish", "nonetheless"] {
        let tokens = tokenize(word);
        assert_eq!(tokens.len(), 1, "{} should be one token", word);
        assert_eq!(tokens[0].category, TokenCategory::Default, "{}", word);
    }
}

#[test]
fn test_whitespace_is_its_own_token() {
    let tokens = tokenize("  return  x");
    assert_eq!(tokens[0].text, "  ");
    assert_eq!(tokens[0].category, TokenCategory::Default);
    assert_eq!(tokens[1].category, TokenCategory::Keyword);
    assert_eq!(tokens[2].text, "  ");
}

#[test]
fn test_number_inside_identifier_is_not_a_number() {
    let tokens = tokenize("x1 = 2");
    assert_eq!(tokens[0].text, "x1");
    assert_eq!(tokens[0].category, TokenCategory::Default);
    assert_eq!(tokens[4].category, TokenCategory::Number);
}
