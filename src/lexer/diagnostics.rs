//! Diagnostic and error contracts for the lexer.

use std::fmt;

use thiserror::Error;

use crate::lexer::span::Span;

/// Stable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Input ended inside a quoted region.
    UnterminatedQuote,
    /// Input ended right after an escape character.
    DanglingEscape,
}

/// User-facing diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexDiagnostic {
    /// Machine-readable diagnostic code.
    pub code: DiagnosticCode,
    /// Human-readable message text.
    pub message: String,
    /// From the opening quote or escape character to end of input.
    pub span: Span,
    /// Line number at end of input.
    pub line: u32,
    /// Optional remediation hint.
    pub suggestion: Option<String>,
}

impl LexDiagnostic {
    /// Creates a diagnostic value without a suggestion.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span, line: u32) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            line,
            suggestion: None,
        }
    }

    /// Attaches a remediation hint.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {} (bytes {}..{})",
            self.message,
            self.line,
            self.span.start.value(),
            self.span.end.value()
        )
    }
}

/// Lexical error. Either variant aborts the whole scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input ended while a quoted region was open.
    #[error("unterminated quotation: {0}")]
    UnterminatedQuote(LexDiagnostic),
    /// Input ended with nothing after an escape character.
    #[error("dangling escape: {0}")]
    DanglingEscape(LexDiagnostic),
}

impl LexError {
    /// Returns the attached diagnostic.
    pub fn diagnostic(&self) -> &LexDiagnostic {
        match self {
            Self::UnterminatedQuote(diagnostic) | Self::DanglingEscape(diagnostic) => diagnostic,
        }
    }

    /// Returns the stable diagnostic code.
    pub fn code(&self) -> DiagnosticCode {
        self.diagnostic().code
    }
}

pub(crate) fn unterminated_quote_error(quote: char, span: Span, line: u32) -> LexError {
    LexError::UnterminatedQuote(
        LexDiagnostic::new(
            DiagnosticCode::UnterminatedQuote,
            format!("no closing quotation for `{quote}`"),
            span,
            line,
        )
        .with_suggestion(format!("close the quoted text with `{quote}`.")),
    )
}

pub(crate) fn dangling_escape_error(escape: char, span: Span, line: u32) -> LexError {
    LexError::DanglingEscape(
        LexDiagnostic::new(
            DiagnosticCode::DanglingEscape,
            format!("no character after escape `{escape}`"),
            span,
            line,
        )
        .with_suggestion(format!(
            "remove the trailing `{escape}` or write `{escape}{escape}` for a literal one."
        )),
    )
}
