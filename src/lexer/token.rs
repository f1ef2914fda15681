//! Token and step contracts for the lexer.

use crate::lexer::span::Span;

/// One shell word with its source metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Word text after quote and escape removal (posix mode).
    pub text: String,
    /// Input bytes the word was scanned from.
    ///
    /// Pushed-back tokens carry an empty span at the pushback position.
    pub span: Span,
    /// Line holding the last character of the word.
    pub line: u32,
    /// `true` when any part of the word was quoted.
    pub quoted: bool,
}

impl Token {
    /// Creates a token value.
    pub fn new(text: String, span: Span, line: u32, quoted: bool) -> Self {
        Self {
            text,
            span,
            line,
            quoted,
        }
    }
}

/// One step produced by [`crate::lexer::Lexer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep {
    /// A concrete token was produced.
    Token(Token),
    /// End of input was reached.
    EndOfInput,
}
