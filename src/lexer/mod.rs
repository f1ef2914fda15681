//! POSIX-style shell word lexer.
//!
//! The lexer turns one line of text into shell words, honoring single and
//! double quotes, backslash escapes, comments, and optional punctuation
//! tokens. It is a pull-based state machine: [`Lexer::next_token`] scans just
//! far enough to complete one token.

pub mod charset;
pub mod command;
pub mod diagnostics;
pub mod options;
pub mod quote;
pub mod span;
pub mod token;

mod cursor;
mod pushback;
mod state;

use tracing::{debug, trace};

use crate::lexer::cursor::Cursor;
use crate::lexer::diagnostics::{dangling_escape_error, unterminated_quote_error};
use crate::lexer::pushback::{CharPushback, TokenPushback};
use crate::lexer::state::{EscapeReturn, ScanState};

pub use charset::{CharSet, DEFAULT_PUNCTUATION_CHARS};
pub use command::CommandWords;
pub use diagnostics::{DiagnosticCode, LexDiagnostic, LexError};
pub use options::LexerOptions;
pub use quote::{join, quote};
pub use span::{ByteOffset, Span};
pub use token::{LexStep, Token};

/// Splits `text` into shell words.
///
/// Uses [`LexerOptions::shell_words`]: posix rules, no comments, whitespace
/// splitting. Any lexical error discards the whole line.
pub fn split(text: &str) -> Result<Vec<String>, LexError> {
    split_with(text, LexerOptions::shell_words())
}

/// Splits `text` into words using caller-provided options.
pub fn split_with(text: &str, options: LexerOptions) -> Result<Vec<String>, LexError> {
    let tokens = Lexer::with_options(text, options).tokenize()?;
    Ok(tokens.into_iter().map(|token| token.text).collect())
}

/// One character read from pushback or input, with its byte range.
#[derive(Debug, Clone, Copy)]
struct ScannedChar {
    ch: char,
    start: ByteOffset,
    end: ByteOffset,
}

/// A shell word lexer over a single input string.
///
/// A lexer is built per input line and discarded once drained; nothing is
/// shared between instances.
pub struct Lexer<'a> {
    input: &'a str,
    options: LexerOptions,
    cursor: Cursor,
    state: ScanState,
    buffer: String,
    quoted: bool,
    token_start: Option<ByteOffset>,
    token_end: ByteOffset,
    token_line: u32,
    quote_start: ByteOffset,
    escape_start: ByteOffset,
    pending_tokens: TokenPushback,
    pending_chars: CharPushback,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with [`LexerOptions::default`].
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    /// Creates a lexer with explicit options.
    pub fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self {
            input,
            options,
            cursor: Cursor::new(),
            state: ScanState::Whitespace,
            buffer: String::new(),
            quoted: false,
            token_start: None,
            token_end: ByteOffset::new(0),
            token_line: 1,
            quote_start: ByteOffset::new(0),
            escape_start: ByteOffset::new(0),
            pending_tokens: TokenPushback::default(),
            pending_chars: CharPushback::default(),
        }
    }

    /// Returns the options this lexer was built with.
    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Returns the current line number, starting at `1`.
    pub fn line_number(&self) -> u32 {
        self.cursor.line()
    }

    /// Pushes `text` back so the next [`Lexer::next_token`] returns it first.
    pub fn push_token(&mut self, text: impl Into<String>) {
        let offset = self.cursor.offset();
        self.pending_tokens.push_front(Token::new(
            text.into(),
            Span::empty(offset),
            self.cursor.line(),
            false,
        ));
    }

    /// Scans and returns the next token.
    ///
    /// Pushed-back tokens are returned before any input is read. Once the
    /// input is exhausted, every further call returns [`LexStep::EndOfInput`]
    /// until another token is pushed back. After an error the remaining input
    /// is abandoned.
    pub fn next_token(&mut self) -> Result<LexStep, LexError> {
        if let Some(token) = self.pending_tokens.pop() {
            return Ok(LexStep::Token(token));
        }

        match self.read_token() {
            Ok(Some(token)) => {
                trace!(text = %token.text, line = token.line, "emitted token");
                Ok(LexStep::Token(token))
            }
            Ok(None) => match self.pending_tokens.pop() {
                Some(token) => Ok(LexStep::Token(token)),
                None => Ok(LexStep::EndOfInput),
            },
            Err(error) => {
                debug!(line = error.diagnostic().line, %error, "lexical error aborted scan");
                self.state = ScanState::Done;
                self.buffer.clear();
                self.token_start = None;
                Err(error)
            }
        }
    }

    /// Drains the lexer into an ordered token list.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                LexStep::Token(token) => tokens.push(token),
                LexStep::EndOfInput => return Ok(tokens),
            }
        }
    }

    fn read_token(&mut self) -> Result<Option<Token>, LexError> {
        self.quoted = false;
        loop {
            if self.state == ScanState::Done {
                break;
            }
            let next = self.next_char();
            match self.state {
                ScanState::Done => break,
                ScanState::Whitespace => {
                    let Some(scanned) = next else {
                        self.state = ScanState::Done;
                        break;
                    };
                    if self.scan_whitespace_state(scanned) {
                        break;
                    }
                }
                ScanState::Word | ScanState::Punctuation => {
                    let Some(scanned) = next else {
                        self.state = ScanState::Done;
                        break;
                    };
                    if self.scan_word_state(scanned) {
                        break;
                    }
                }
                ScanState::Quoted(quote) => {
                    let Some(scanned) = next else {
                        let span = Span::new(self.quote_start, self.cursor.offset());
                        return Err(unterminated_quote_error(quote, span, self.cursor.line()));
                    };
                    if self.scan_quoted_state(quote, scanned) {
                        break;
                    }
                }
                ScanState::Escaped { escape, resume } => {
                    let Some(scanned) = next else {
                        let span = Span::new(self.escape_start, self.cursor.offset());
                        return Err(dangling_escape_error(escape, span, self.cursor.line()));
                    };
                    self.scan_escaped_state(escape, resume, scanned);
                }
            }
        }

        Ok(self.take_token())
    }

    /// Handles one character between tokens. Returns `true` to emit.
    fn scan_whitespace_state(&mut self, scanned: ScannedChar) -> bool {
        let ch = scanned.ch;
        let options = &self.options;

        if options.whitespace_chars.contains(ch) {
            return self.has_token();
        }
        if options.comment_chars.contains(ch) {
            self.skip_comment();
        } else if options.posix && options.escape_chars.contains(ch) {
            self.mark(scanned);
            self.escape_start = scanned.start;
            self.state = ScanState::Escaped {
                escape: ch,
                resume: EscapeReturn::Word,
            };
        } else if options.word_chars.contains(ch) {
            self.append(scanned);
            self.state = ScanState::Word;
        } else if options.punctuation_chars.contains(ch) {
            self.append(scanned);
            self.state = ScanState::Punctuation;
        } else if options.quote_chars.contains(ch) {
            if options.posix {
                self.mark(scanned);
            } else {
                self.append(scanned);
            }
            self.open_quote(ch, scanned.start);
        } else if options.whitespace_split {
            self.append(scanned);
            self.state = ScanState::Word;
        } else {
            // Single-character token; the state stays `Whitespace`.
            self.append(scanned);
            return true;
        }
        false
    }

    /// Handles one character inside a word or punctuation run. Returns `true`
    /// to emit.
    fn scan_word_state(&mut self, scanned: ScannedChar) -> bool {
        let ch = scanned.ch;
        let options = &self.options;

        if options.whitespace_chars.contains(ch) {
            self.state = ScanState::Whitespace;
            return self.has_token();
        }
        if options.posix && options.comment_chars.contains(ch) {
            self.skip_comment();
            self.state = ScanState::Whitespace;
            return self.has_token();
        }
        if self.state == ScanState::Punctuation {
            if options.punctuation_chars.contains(ch) {
                self.append(scanned);
                return false;
            }
            self.pending_chars.push(ch, scanned.start);
            self.state = ScanState::Whitespace;
            return true;
        }
        if options.posix && options.quote_chars.contains(ch) {
            self.mark(scanned);
            self.open_quote(ch, scanned.start);
        } else if options.posix && options.escape_chars.contains(ch) {
            self.mark(scanned);
            self.escape_start = scanned.start;
            self.state = ScanState::Escaped {
                escape: ch,
                resume: EscapeReturn::Word,
            };
        } else if options.word_chars.contains(ch)
            || options.quote_chars.contains(ch)
            || options.comment_chars.contains(ch)
            || (options.whitespace_split && !options.punctuation_chars.contains(ch))
        {
            self.append(scanned);
        } else {
            if options.punctuation_enabled() {
                self.pending_chars.push(ch, scanned.start);
            } else {
                let token = Token::new(
                    ch.to_string(),
                    Span::new(scanned.start, scanned.end),
                    self.cursor.line(),
                    false,
                );
                self.pending_tokens.push_front(token);
            }
            self.state = ScanState::Whitespace;
            return self.has_token();
        }
        false
    }

    /// Handles one character inside a quoted region. Returns `true` to emit.
    fn scan_quoted_state(&mut self, quote: char, scanned: ScannedChar) -> bool {
        let ch = scanned.ch;
        let options = &self.options;

        if ch == quote {
            if options.posix {
                self.mark(scanned);
                self.state = ScanState::Word;
                return false;
            }
            self.append(scanned);
            self.state = ScanState::Whitespace;
            return true;
        }
        if options.posix
            && options.escape_chars.contains(ch)
            && options.escaped_quote_chars.contains(quote)
        {
            self.mark(scanned);
            self.escape_start = scanned.start;
            self.state = ScanState::Escaped {
                escape: ch,
                resume: EscapeReturn::Quoted(quote),
            };
            return false;
        }
        self.append(scanned);
        false
    }

    fn scan_escaped_state(&mut self, escape: char, resume: EscapeReturn, scanned: ScannedChar) {
        // Inside escape-honoring quotes only the quote itself and the escape
        // character are escapable; anything else keeps its backslash.
        if let EscapeReturn::Quoted(quote) = resume
            && scanned.ch != escape
            && scanned.ch != quote
        {
            self.buffer.push(escape);
        }
        self.append(scanned);
        self.state = resume.state();
    }

    fn open_quote(&mut self, quote: char, start: ByteOffset) {
        self.quoted = true;
        self.quote_start = start;
        self.state = ScanState::Quoted(quote);
    }

    /// Discards the character after a comment starter.
    ///
    /// Only one character is skipped, not the rest of the line.
    fn skip_comment(&mut self) {
        let skipped = self.cursor.advance_char(self.input);
        if skipped != Some('\n') {
            self.cursor.bump_line();
        }
        debug!(line = self.cursor.line(), ?skipped, "skipped comment");
    }

    fn next_char(&mut self) -> Option<ScannedChar> {
        if self.options.punctuation_enabled()
            && let Some((ch, start)) = self.pending_chars.pop()
        {
            let end = ByteOffset::from_usize(start.as_usize() + ch.len_utf8());
            return Some(ScannedChar { ch, start, end });
        }

        let start = self.cursor.offset();
        let ch = self.cursor.advance_char(self.input)?;
        Some(ScannedChar {
            ch,
            start,
            end: self.cursor.offset(),
        })
    }

    fn has_token(&self) -> bool {
        !self.buffer.is_empty() || (self.options.posix && self.quoted)
    }

    fn append(&mut self, scanned: ScannedChar) {
        self.buffer.push(scanned.ch);
        self.mark(scanned);
    }

    /// Extends the current token's span over `scanned`.
    fn mark(&mut self, scanned: ScannedChar) {
        self.token_start.get_or_insert(scanned.start);
        self.token_end = scanned.end;
        self.token_line = self.cursor.line();
    }

    fn take_token(&mut self) -> Option<Token> {
        let text = std::mem::take(&mut self.buffer);
        let start = self.token_start.take();
        if text.is_empty() && !(self.options.posix && self.quoted) {
            return None;
        }
        let (span, line) = match start {
            Some(start) => (Span::new(start, self.token_end), self.token_line),
            None => (Span::empty(self.cursor.offset()), self.cursor.line()),
        };
        Some(Token::new(text, span, line, self.quoted))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(LexStep::Token(token)) => Some(Ok(token)),
            Ok(LexStep::EndOfInput) => None,
            Err(error) => Some(Err(error)),
        }
    }
}
