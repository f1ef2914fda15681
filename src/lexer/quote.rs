//! Quoting helpers that invert word splitting.
//!
//! `split(&join(words))` reproduces `words` for any word list.

use std::borrow::Cow;

/// ASCII punctuation that never needs quoting.
const SAFE_PUNCTUATION: &str = "_@%+=:,./-";

fn is_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(ch)
}

/// Quotes `word` so it lexes back as exactly one word.
///
/// Words made only of ASCII alphanumerics and `_@%+=:,./-` are returned
/// unchanged. Everything else is single-quoted, with each embedded `'`
/// written as `'"'"'`.
pub fn quote(word: &str) -> Cow<'_, str> {
    if word.is_empty() {
        return Cow::Borrowed("''");
    }
    if word.chars().all(is_safe) {
        return Cow::Borrowed(word);
    }

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for ch in word.chars() {
        if ch == '\'' {
            quoted.push_str("'\"'\"'");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Quotes each word and joins them with single spaces.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, word) in words.into_iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.push_str(&quote(word.as_ref()));
    }
    line
}
