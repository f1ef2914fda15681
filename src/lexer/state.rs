//! Scan-state machine tags.

/// State the lexer resumes after consuming an escaped character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeReturn {
    /// Back to an unquoted word.
    Word,
    /// Back inside the quoted region opened by the given character.
    Quoted(char),
}

/// Lexer scan state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Between tokens.
    Whitespace,
    /// Inside an unquoted (or partially quoted) word.
    Word,
    /// Inside a run of punctuation characters.
    Punctuation,
    /// Inside a quoted region opened by the given character.
    Quoted(char),
    /// Immediately after the escape character `escape`.
    Escaped { escape: char, resume: EscapeReturn },
    /// Input exhausted.
    Done,
}

impl EscapeReturn {
    pub(crate) fn state(self) -> ScanState {
        match self {
            Self::Word => ScanState::Word,
            Self::Quoted(quote) => ScanState::Quoted(quote),
        }
    }
}
