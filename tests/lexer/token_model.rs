use shwords::lexer::{ByteOffset, Lexer, LexerOptions, Span, Token};

fn scan(input: &str) -> Vec<Token> {
    Lexer::with_options(input, LexerOptions::shell_words())
        .tokenize()
        .expect("scan should succeed")
}

fn span(start: u32, end: u32) -> Span {
    Span::new(ByteOffset::new(start), ByteOffset::new(end))
}

#[test]
fn spans_cover_quotes_and_escapes() {
    let input = "echo 'a b'c \\x";
    let tokens = scan(input);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].span, span(0, 4));
    assert_eq!(tokens[1].text, "a bc");
    assert_eq!(tokens[1].span, span(5, 11));
    assert_eq!(tokens[1].span.slice(input), Some("'a b'c"));
    assert_eq!(tokens[2].text, "x");
    assert_eq!(tokens[2].span, span(12, 14));
}

#[test]
fn quoted_flag_tracks_any_quoting() {
    let tokens = scan("plain 'q' mi\"x\"ed \"\"");
    let flags: Vec<(&str, bool)> = tokens
        .iter()
        .map(|token| (token.text.as_str(), token.quoted))
        .collect();
    assert_eq!(
        flags,
        vec![("plain", false), ("q", true), ("mixed", true), ("", true)]
    );
}

#[test]
fn empty_quoted_token_spans_both_quotes() {
    let tokens = scan("''");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].text.is_empty());
    assert_eq!(tokens[0].span, span(0, 2));
}

#[test]
fn tokens_record_their_line() {
    let tokens = scan("a\nb 'c\nd'");
    let lines: Vec<(&str, u32)> = tokens
        .iter()
        .map(|token| (token.text.as_str(), token.line))
        .collect();
    assert_eq!(lines, vec![("a", 1), ("b", 2), ("c\nd", 3)]);
}

#[test]
fn multibyte_offsets_are_bytes() {
    let tokens = scan("é 'ü'");
    assert_eq!(tokens[0].span, span(0, 2));
    assert_eq!(tokens[1].span, span(3, 7));
}

#[test]
fn span_contracts_hold_ordering() {
    let high = ByteOffset::new(10);
    let low = ByteOffset::new(2);
    let span = Span::new(high, low);

    assert_eq!(span.start, low);
    assert_eq!(span.end, high);
    assert_eq!(span.len(), 8);
    assert!(!span.is_empty());
    assert!(Span::empty(low).is_empty());
    assert_eq!(ByteOffset::from_usize(usize::MAX).value(), u32::MAX);
}
