//! Character-classification tables.

/// ASCII letters, digits, and `_`.
pub const ASCII_WORD_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Latin-1 letters accepted as word characters in posix mode.
pub const POSIX_EXTRA_WORD_CHARS: &str =
    "ßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞ";

/// Word characters added when punctuation tokenization is enabled.
pub const PUNCTUATION_MODE_WORD_CHARS: &str = "~-./*?=";

/// Default whitespace characters.
pub const DEFAULT_WHITESPACE_CHARS: &str = " \t\r\n";

/// Default comment starters.
pub const DEFAULT_COMMENT_CHARS: &str = "#";

/// Default quote characters.
pub const DEFAULT_QUOTE_CHARS: &str = "'\"";

/// Default escape characters.
pub const DEFAULT_ESCAPE_CHARS: &str = "\\";

/// Quote characters inside which escapes are still honored.
pub const DEFAULT_ESCAPED_QUOTE_CHARS: &str = "\"";

/// Shell control characters used by [`crate::lexer::LexerOptions::with_punctuation_chars`]
/// callers that want operator-style tokens.
pub const DEFAULT_PUNCTUATION_CHARS: &str = "();<>|&";

/// Small set of characters.
///
/// ASCII members live in a bitmask; anything wider is kept in a sorted vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet {
    ascii: u128,
    extended: Vec<char>,
}

impl CharSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            ascii: 0,
            extended: Vec::new(),
        }
    }

    /// Creates a set holding every character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        let mut set = Self::new();
        set.extend(chars);
        set
    }

    /// Returns `true` when `ch` is a member.
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1u128 << (ch as u32)) != 0
        } else {
            self.extended.binary_search(&ch).is_ok()
        }
    }

    /// Adds `ch` to the set.
    pub fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii |= 1u128 << (ch as u32);
        } else if let Err(index) = self.extended.binary_search(&ch) {
            self.extended.insert(index, ch);
        }
    }

    /// Removes `ch` from the set.
    pub fn remove(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii &= !(1u128 << (ch as u32));
        } else if let Ok(index) = self.extended.binary_search(&ch) {
            self.extended.remove(index);
        }
    }

    /// Adds every character of `chars`.
    pub fn extend(&mut self, chars: &str) {
        for ch in chars.chars() {
            self.insert(ch);
        }
    }

    /// Removes every member of `other` from this set.
    pub fn subtract(&mut self, other: &CharSet) {
        self.ascii &= !other.ascii;
        self.extended.retain(|ch| !other.extended.contains(ch));
    }

    /// Returns `true` when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.extended.is_empty()
    }

    /// Iterates members, ASCII first, each group in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(|byte| self.ascii & (1u128 << byte) != 0)
            .map(char::from)
            .chain(self.extended.iter().copied())
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self::from_chars(chars)
    }
}
