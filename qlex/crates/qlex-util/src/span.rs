//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the query text with the line and column
//! where that range starts. Lexing errors carry one so a host application
//! can point at the offending character.
//!
//! # Examples
//!
//! ```
//! use qlex_util::span::Span;
//!
//! // The `@` in "SELECT @" sits at byte 7, line 1, column 8
//! let span = Span::new(7, 8, 1, 8);
//! assert_eq!(span.len(), 1);
//! assert_eq!(span.to_string(), "1:8");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source location span
///
/// - `start`/`end` are byte offsets into the source (end exclusive)
/// - `line` and `column` are 1-based and describe `start`
/// - columns count characters, not bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the span in bytes, zero if `end < start`
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
