//! Diagnostic module - Error reporting infrastructure.
//!
//! Lexing itself fails fast with a typed error; this module is the shape
//! those errors take when a host wants to collect and render them.
//!
//! # Examples
//!
//! ```
//! use qlex_util::diagnostic::{Diagnostic, Handler};
//! use qlex_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("unexpected character `#`", Span::DUMMY));
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A failure that stops lexing
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }
}

impl fmt::Display for Diagnostic {
    /// Renders `error[E1001]: message` followed by any snippets, notes and
    /// helps, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, "\n  --> {}", self.span)?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// Interior mutability lets the handler be shared by reference while
/// diagnostics are emitted into it.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
