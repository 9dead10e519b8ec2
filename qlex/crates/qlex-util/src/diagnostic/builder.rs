//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// Holds one source line and the column range to underline.
///
/// # Examples
///
/// ```
/// use qlex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("SELECT @", 1, 8, 9, Some("not a token"));
/// let rendered = snippet.format();
/// assert!(rendered.ends_with("^ not a token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Cut the snippet for `span` out of the full source text.
    ///
    /// Returns `None` when the span's line does not exist in `source`.
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        let line_index = (span.line as usize).checked_sub(1)?;
        let line = source.lines().nth(line_index)?;
        let start_column = span.column as usize;
        let width = source
            .get(span.start..span.end)
            .map_or(1, |text| text.chars().count().max(1));
        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing at the
    /// highlighted range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use qlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use qlex_util::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated quoted identifier")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 1, 1, 1))
///     .help("close the value with a matching quote")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
