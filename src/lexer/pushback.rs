//! Pushback queues consulted before fresh input.

use std::collections::VecDeque;

use crate::lexer::span::ByteOffset;
use crate::lexer::token::Token;

/// Completed tokens returned ahead of any further scanning.
#[derive(Debug, Default, Clone)]
pub(crate) struct TokenPushback {
    queue: VecDeque<Token>,
}

impl TokenPushback {
    /// Queues `token` so it is returned before everything already queued.
    pub(crate) fn push_front(&mut self, token: Token) {
        self.queue.push_front(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.queue.pop_front()
    }
}

/// Raw characters re-scanned before reading fresh input.
///
/// Only populated in punctuation mode, where a run of punctuation ends on the
/// first foreign character and that character must be classified again.
#[derive(Debug, Default, Clone)]
pub(crate) struct CharPushback {
    queue: VecDeque<(char, ByteOffset)>,
}

impl CharPushback {
    pub(crate) fn push(&mut self, ch: char, offset: ByteOffset) {
        self.queue.push_back((ch, offset));
    }

    pub(crate) fn pop(&mut self) -> Option<(char, ByteOffset)> {
        self.queue.pop_front()
    }
}
