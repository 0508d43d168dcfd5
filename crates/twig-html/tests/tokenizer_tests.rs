//! Integration tests for the twig tokenizer.

use twig_dom::Attribute;
use twig_html::{Token, TokenizeError, Tokenizer, tokenize};

/// Helper to tokenize input that is expected to be valid
fn tokens(input: &str) -> Vec<Token> {
    tokenize(input).unwrap()
}

#[test]
fn test_empty_input() {
    assert!(tokens("").is_empty());
}

#[test]
fn test_plain_text_only() {
    assert_eq!(tokens("Hello, world"), vec![Token::plain_text("Hello, world")]);
}

#[test]
fn test_link_with_attributes() {
    let tokens = tokens("<a href=https://apple.com width=100>Apple Inc.</a>");
    assert_eq!(
        tokens,
        vec![
            Token::begin_tag(
                "a",
                vec![
                    Attribute::new("href", "https://apple.com"),
                    Attribute::new("width", "100"),
                ]
            ),
            Token::plain_text("Apple Inc."),
            Token::end_tag("a"),
        ]
    );
}

#[test]
fn test_whitespace_after_tags_is_dropped() {
    let tokens = tokens("<div>\r\n  <p>Hi </p>\n</div>");
    assert_eq!(
        tokens,
        vec![
            Token::begin_tag("div", vec![]),
            Token::begin_tag("p", vec![]),
            Token::plain_text("Hi "),
            Token::end_tag("p"),
            Token::end_tag("div"),
        ]
    );
}

#[test]
fn test_leading_whitespace_is_skipped() {
    assert_eq!(tokens("  \r\n<p>"), vec![Token::begin_tag("p", vec![])]);
    assert_eq!(tokens(" \tHi"), vec![Token::plain_text("Hi")]);
    assert!(tokens("   ").is_empty());
}

#[test]
fn test_attributes_separated_by_mixed_whitespace() {
    let tokens = tokens("<img src=a.png\n\talt=logo>");
    assert_eq!(
        tokens,
        vec![Token::begin_tag(
            "img",
            vec![Attribute::new("src", "a.png"), Attribute::new("alt", "logo")]
        )]
    );
}

#[test]
fn test_quotes_are_literal() {
    let tokens = tokens(r#"<a title="x">"#);
    assert_eq!(
        tokens,
        vec![Token::begin_tag("a", vec![Attribute::new("title", "\"x\"")])]
    );
}

#[test]
fn test_stray_close_bracket_stalls() {
    let err = tokenize("a > b").unwrap_err();
    let TokenizeError::Stalled {
        offset,
        position,
        remainder,
    } = err;
    assert_eq!(offset, 2);
    assert_eq!((position.line, position.column), (1, 3));
    assert_eq!(remainder, "> b");
}

#[test]
fn test_unterminated_tag_stalls() {
    let err = tokenize("<p>ok</p>\n<div").unwrap_err();
    assert_eq!(err.offset(), 10);
    assert!(err.to_string().contains("2:1"));
}

#[test]
fn test_attribute_without_value_stalls() {
    assert!(tokenize("<input disabled>").is_err());
}

#[test]
fn test_tokenizer_keeps_tokens_before_stall() {
    let mut tokenizer = Tokenizer::new("<b>bold</b>>");
    assert!(tokenizer.run().is_err());
    assert_eq!(tokenizer.tokens().len(), 3);
    assert_eq!(tokenizer.offsets(), &[0, 3, 7]);
}

#[test]
fn test_token_display_round_trip() {
    let input = "<a href=x>t</a>";
    let text: String = tokens(input).iter().map(ToString::to_string).collect();
    assert_eq!(text, r#"<a href="x">t</a>"#);
}
