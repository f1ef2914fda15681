//! Character cursor over lexer input.

use crate::lexer::span::ByteOffset;

/// Character-position cursor tracking byte offsets and line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: ByteOffset,
    line: u32,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`, line `1`.
    pub(crate) fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
            line: 1,
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns the current line number.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Advances the line counter without consuming input.
    pub(crate) fn bump_line(&mut self) {
        self.line = self.line.saturating_add(1);
    }

    /// Consumes and returns the next character.
    ///
    /// Every consumed `\n` advances the line counter.
    pub(crate) fn advance_char(&mut self, input: &str) -> Option<char> {
        let ch = input.get(self.offset.as_usize()..)?.chars().next()?;
        self.offset = ByteOffset::from_usize(self.offset.as_usize() + ch.len_utf8());
        if ch == '\n' {
            self.bump_line();
        }
        Some(ch)
    }
}
