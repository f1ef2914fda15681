//! Command-line view over split words.

use crate::lexer::LexError;

/// A non-empty split command line.
///
/// Word 0 is the command name; the rest are its arguments, already free of
/// quoting and escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandWords {
    words: Vec<String>,
}

impl CommandWords {
    /// Splits `line` with [`crate::lexer::LexerOptions::shell_words`].
    ///
    /// Returns `Ok(None)` for a line holding no words.
    pub fn parse(line: &str) -> Result<Option<Self>, LexError> {
        let words = crate::lexer::split(line)?;
        Ok(Self::from_words(words))
    }

    /// Wraps already-split words; `None` when `words` is empty.
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Returns the command name.
    pub fn name(&self) -> &str {
        &self.words[0]
    }

    /// Returns the arguments following the command name.
    pub fn args(&self) -> &[String] {
        &self.words[1..]
    }

    /// Returns every word, command name first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consumes the view and returns the words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}
