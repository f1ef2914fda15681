use shwords::lexer::{LexerOptions, split, split_with};

fn words(input: &str) -> Vec<String> {
    split(input).expect("split should succeed")
}

#[test]
fn single_quotes_preserve_whitespace() {
    assert_eq!(words("echo 'a b' c"), vec!["echo", "a b", "c"]);
}

#[test]
fn double_quotes_preserve_whitespace() {
    assert_eq!(words("echo \"a  b\"\tc"), vec!["echo", "a  b", "c"]);
}

#[test]
fn escaped_quote_inside_double_quotes_is_literal() {
    assert_eq!(words("echo \"a\\\"b\""), vec!["echo", "a\"b"]);
}

#[test]
fn explicit_empty_quotes_produce_empty_word() {
    assert_eq!(words("echo ''"), vec!["echo", ""]);
    assert_eq!(words("\"\" x"), vec!["", "x"]);
    assert_eq!(words("'' \"\""), vec!["", ""]);
}

#[test]
fn adjacent_quoted_and_unquoted_segments_concatenate() {
    assert_eq!(words("echo a''b"), vec!["echo", "ab"]);
    assert_eq!(words("pre'mid dle'\"post\"fix"), vec!["premid dlepostfix"]);
}

#[test]
fn quote_characters_nest_literally_inside_the_other_quote() {
    assert_eq!(words("\"it's\" 'say \"hi\"'"), vec!["it's", "say \"hi\""]);
}

#[test]
fn quoted_newline_is_kept() {
    assert_eq!(words("'a\nb'"), vec!["a\nb"]);
}

#[test]
fn single_quotes_keep_backslashes() {
    assert_eq!(words("'a\\b' 'c\\'"), vec!["a\\b", "c\\"]);
}

#[test]
fn legacy_mode_keeps_quote_characters() {
    let tokens = split_with("a 'b c' \"d\"", LexerOptions::legacy()).expect("split should succeed");
    assert_eq!(tokens, vec!["a", "'b c'", "\"d\""]);
}

#[test]
fn legacy_mode_treats_quote_inside_word_as_word_character() {
    let options = LexerOptions::legacy().with_whitespace_split(true);
    let tokens = split_with("ab'c d'", options).expect("split should succeed");
    assert_eq!(tokens, vec!["ab'c", "d'"]);
}
