//! Lexer configuration.

use crate::lexer::charset::{
    ASCII_WORD_CHARS, CharSet, DEFAULT_COMMENT_CHARS, DEFAULT_ESCAPE_CHARS,
    DEFAULT_ESCAPED_QUOTE_CHARS, DEFAULT_QUOTE_CHARS, DEFAULT_WHITESPACE_CHARS,
    POSIX_EXTRA_WORD_CHARS, PUNCTUATION_MODE_WORD_CHARS,
};

/// Character tables and switches fixed for the lifetime of one lexer.
///
/// Prefer the presets and `with_*` modifiers over editing fields directly:
/// `word_chars` is derived from `posix` and `punctuation_chars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Enables backslash escapes, quote removal, Latin-1 word characters, and
    /// dropping of empty unquoted tokens.
    pub posix: bool,
    /// Characters that start a comment.
    pub comment_chars: CharSet,
    /// Characters that start or continue an ordinary word.
    pub word_chars: CharSet,
    /// Characters separating tokens.
    pub whitespace_chars: CharSet,
    /// Accept any non-whitespace, non-special character into a word.
    pub whitespace_split: bool,
    /// Characters opening a quoted region.
    pub quote_chars: CharSet,
    /// Escape characters; only honored in posix mode.
    pub escape_chars: CharSet,
    /// Quote characters inside which escapes are still processed.
    pub escaped_quote_chars: CharSet,
    /// Characters that group into self-delimiting punctuation tokens.
    pub punctuation_chars: CharSet,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self::with_posix(true)
    }
}

impl LexerOptions {
    fn with_posix(posix: bool) -> Self {
        let mut word_chars = CharSet::from_chars(ASCII_WORD_CHARS);
        if posix {
            word_chars.extend(POSIX_EXTRA_WORD_CHARS);
        }
        Self {
            posix,
            comment_chars: CharSet::from_chars(DEFAULT_COMMENT_CHARS),
            word_chars,
            whitespace_chars: CharSet::from_chars(DEFAULT_WHITESPACE_CHARS),
            whitespace_split: false,
            quote_chars: CharSet::from_chars(DEFAULT_QUOTE_CHARS),
            escape_chars: CharSet::from_chars(DEFAULT_ESCAPE_CHARS),
            escaped_quote_chars: CharSet::from_chars(DEFAULT_ESCAPED_QUOTE_CHARS),
            punctuation_chars: CharSet::new(),
        }
    }

    /// Non-posix tables: quotes are kept verbatim and escapes are literal.
    pub fn legacy() -> Self {
        Self::with_posix(false)
    }

    /// Shell command-line preset: posix, no comments, whitespace splitting.
    pub fn shell_words() -> Self {
        Self::default()
            .with_comments(false)
            .with_whitespace_split(true)
    }

    /// Enables the default comment starter, or disables comments entirely.
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.comment_chars = if enabled {
            CharSet::from_chars(DEFAULT_COMMENT_CHARS)
        } else {
            CharSet::new()
        };
        self
    }

    /// Sets whitespace-split mode.
    pub fn with_whitespace_split(mut self, enabled: bool) -> Self {
        self.whitespace_split = enabled;
        self
    }

    /// Enables punctuation tokenization for `chars`.
    ///
    /// Word characters are widened with `~-./*?=` and then every punctuation
    /// character is removed from them. An empty `chars` leaves the options
    /// unchanged.
    pub fn with_punctuation_chars(mut self, chars: &str) -> Self {
        if chars.is_empty() {
            return self;
        }
        self.punctuation_chars = CharSet::from_chars(chars);
        self.word_chars.extend(PUNCTUATION_MODE_WORD_CHARS);
        self.word_chars.subtract(&self.punctuation_chars);
        self
    }

    /// Returns `true` when punctuation tokenization is active.
    pub fn punctuation_enabled(&self) -> bool {
        !self.punctuation_chars.is_empty()
    }
}
