//! Error Module - Lexing failures
//!
//! Every failure is fatal to the current `lex` call; there is no
//! skip-and-continue recovery. Each variant carries the [`Span`] it refers
//! to and maps to a [`DiagnosticCode`] so hosts can render it with the
//! shared diagnostic model.

use crate::config::ConfigError;
use qlex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet, Span};
use thiserror::Error;

/// Result alias for lexing operations.
pub type LexResult<T> = Result<T, LexError>;

/// Error type for all lexing operations
///
/// # Examples
///
/// ```
/// use qlex_lex::{lex, LexError};
///
/// match lex("SELECT @") {
///     Err(LexError::UnexpectedChar { ch, span }) => {
///         assert_eq!(ch, '@');
///         assert_eq!(span.column, 8);
///     }
///     other => panic!("expected an error, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character matched none of the known classes.
    #[error("unexpected character {ch:?} at line {}, column {}", span.line, span.column)]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Location of the character.
        span: Span,
    },

    /// A quoted value had no closing quote on the same line.
    ///
    /// The span covers the opening quote and everything scanned after it.
    #[error("unterminated {quote}-quoted identifier starting at line {}, column {}", span.line, span.column)]
    UnterminatedString {
        /// The opening quote character.
        quote: char,
        /// Location from the opening quote to where scanning stopped.
        span: Span,
    },

    /// The source is longer than `LexerConfig::max_source_len`.
    #[error("source is {len} bytes, limit is {max}")]
    SourceTooLarge {
        /// Source length in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Lexing would produce more than `LexerConfig::max_tokens` tokens.
    #[error("token limit of {max} exceeded at line {}, column {}", span.line, span.column)]
    TooManyTokens {
        /// Configured limit.
        max: usize,
        /// Location of the first token past the limit.
        span: Span,
    },

    /// The `LexerConfig` failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LexError {
    /// Location the error refers to.
    ///
    /// `SourceTooLarge` is raised before scanning and has no location.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span, .. }
            | LexError::TooManyTokens { span, .. } => *span,
            LexError::SourceTooLarge { .. } | LexError::Config(_) => Span::DUMMY,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::SourceTooLarge { .. }
            | LexError::TooManyTokens { .. }
            | LexError::Config(_) => DiagnosticCode::E_LEXER_LIMIT_EXCEEDED,
        }
    }

    /// Converts the error into a diagnostic, with a snippet cut from `source`.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = self.span();
        let mut builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(span);

        if let Some(snippet) = SourceSnippet::from_source(source, span) {
            builder = builder.snippet(snippet.with_label(self.label()));
        }

        match self {
            LexError::UnexpectedChar { .. } => builder
                .note("expected a word, one of `*` `=` `:`, a quote, a space or a newline")
                .build(),
            LexError::UnterminatedString { quote, .. } => builder
                .help(format!("close the value with a matching {quote}"))
                .build(),
            LexError::SourceTooLarge { .. }
            | LexError::TooManyTokens { .. }
            | LexError::Config(_) => builder.build(),
        }
    }

    /// Converts the error and emits it to `handler`.
    pub fn emit(&self, source: &str, handler: &Handler) {
        handler.emit_diagnostic(self.to_diagnostic(source));
    }

    fn label(&self) -> &'static str {
        match self {
            LexError::UnexpectedChar { .. } => "not a token",
            LexError::UnterminatedString { .. } => "quote opened here",
            LexError::SourceTooLarge { .. } => "source too large",
            LexError::TooManyTokens { .. } => "limit reached here",
            LexError::Config(_) => "invalid configuration",
        }
    }
}
