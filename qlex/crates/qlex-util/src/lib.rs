//! qlex-util - Foundation types shared by the qlex crates
//!
//! This crate holds the pieces of the query lexer that know nothing about
//! tokens: source locations and the diagnostic model used to report
//! lexing failures to a host application.
//!
//! # Module Structure
//!
//! - [`span`] - Byte offsets plus line/column for a source location
//! - [`diagnostic`] - Severity levels, diagnostic codes and the fluent
//!   [`DiagnosticBuilder`]
//!
//! # Example
//!
//! ```
//! use qlex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character `@`")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(7, 8, 1, 8))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;
