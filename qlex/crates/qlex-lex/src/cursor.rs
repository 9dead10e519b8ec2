//! Character cursor for traversing query text.
//!
//! The `Cursor` owns the position state of one lexing pass: the byte
//! offset into the source, the 1-based line, and the 1-based column. It
//! handles UTF-8 correctly so errors on non-ASCII input report the real
//! character.

use qlex_util::Span;

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use qlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("id = 1");
/// assert_eq!(cursor.current_char(), 'i');
/// assert_eq!(cursor.eat_while(|c| c.is_ascii_alphabetic()), "id");
/// assert_eq!(cursor.current_char(), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' if at the end of the source; callers check
    /// [`Cursor::is_at_end`] first when a literal NUL matters.
    #[inline]
    pub fn current_char(&self) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        match rest.as_bytes().first() {
            Some(&b) if b.is_ascii() => b as char,
            _ => rest.chars().next().unwrap_or('\0'),
        }
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds and returns the consumed slice.
    ///
    /// The slice may be empty if the current character fails the predicate.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
        self.slice_from(start)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte offset `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Span of the current character, or an empty span at end of input.
    ///
    /// ```
    /// use qlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\n€");
    /// cursor.advance();
    /// cursor.advance();
    /// let span = cursor.char_span();
    /// assert_eq!((span.start, span.end), (2, 5));
    /// assert_eq!((span.line, span.column), (2, 1));
    /// ```
    pub fn char_span(&self) -> Span {
        let width = self.remaining().chars().next().map_or(0, char::len_utf8);
        Span::new(
            self.position,
            self.position + width,
            self.line,
            self.column,
        )
    }
}
