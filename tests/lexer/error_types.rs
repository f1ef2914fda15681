use shwords::lexer::{
    ByteOffset, DiagnosticCode, LexError, LexStep, Lexer, LexerOptions, Span, split,
};

#[test]
fn unterminated_single_quote_reports_quote_to_end_span() {
    match split("echo 'unterminated") {
        Err(LexError::UnterminatedQuote(diagnostic)) => {
            assert_eq!(diagnostic.code, DiagnosticCode::UnterminatedQuote);
            assert_eq!(diagnostic.message, "no closing quotation for `'`");
            assert_eq!(
                diagnostic.span,
                Span::new(ByteOffset::new(5), ByteOffset::new(18))
            );
            assert_eq!(diagnostic.line, 1);
            assert_eq!(
                diagnostic.suggestion.as_deref(),
                Some("close the quoted text with `'`.")
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unterminated_double_quote_after_word_text() {
    match split("a \"b\nc") {
        Err(LexError::UnterminatedQuote(diagnostic)) => {
            assert_eq!(diagnostic.message, "no closing quotation for `\"`");
            assert_eq!(
                diagnostic.span,
                Span::new(ByteOffset::new(2), ByteOffset::new(6))
            );
            assert_eq!(diagnostic.line, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn dangling_escape_reports_escape_span() {
    match split("echo \\") {
        Err(LexError::DanglingEscape(diagnostic)) => {
            assert_eq!(diagnostic.code, DiagnosticCode::DanglingEscape);
            assert_eq!(
                diagnostic.span,
                Span::new(ByteOffset::new(5), ByteOffset::new(6))
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn error_display_includes_message_and_location() {
    let error = split("x 'y").expect_err("split should fail");
    assert_eq!(
        error.to_string(),
        "unterminated quotation: no closing quotation for `'` at line 1 (bytes 2..4)"
    );
    assert_eq!(error.code(), DiagnosticCode::UnterminatedQuote);

    let error = split("x\\").expect_err("split should fail");
    assert_eq!(
        error.to_string(),
        "dangling escape: no character after escape `\\` at line 1 (bytes 1..2)"
    );
}

#[test]
fn error_discards_tokens_already_scanned() {
    assert!(split("a b c 'd").is_err());
}

#[test]
fn lexer_stops_after_error() {
    let mut lexer = Lexer::with_options("a 'b", LexerOptions::shell_words());

    match lexer.next_token().expect("first word should scan") {
        LexStep::Token(token) => assert_eq!(token.text, "a"),
        LexStep::EndOfInput => panic!("expected token"),
    }
    assert!(lexer.next_token().is_err());
    assert_eq!(
        lexer.next_token().expect("lexer should be drained"),
        LexStep::EndOfInput
    );
}
