//! Character class predicates for the query lexer.
//!
//! The token classes are ASCII-only. Anything outside them (tabs, carriage
//! returns, non-ASCII letters, other punctuation) is an unexpected character.

/// Delimiters produced as single-character tokens.
pub const DELIMITERS: [char; 3] = ['*', '=', ':'];

/// Characters that open and close a delimited identifier.
pub const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Characters that end a line. A quoted value may not contain any of them.
pub const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Marker that turns a directly following word into a parameter.
pub const PARAMETER_PREFIX: &str = ":";

/// Checks if a character belongs to a word run: `[A-Za-z_0-9]`.
///
/// Digits are word characters in leading position too, so `123abc` is one
/// run.
///
/// ```
/// use qlex_lex::chars::is_word_char;
///
/// assert!(is_word_char('a'));
/// assert!(is_word_char('Z'));
/// assert!(is_word_char('_'));
/// assert!(is_word_char('7'));
/// assert!(!is_word_char('é'));
/// assert!(!is_word_char('-'));
/// ```
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is one of the single-character delimiters.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Checks if a character opens a delimited identifier.
#[inline]
pub fn is_quote(c: char) -> bool {
    QUOTES.contains(&c)
}

/// Checks if a character ends a line: `\n`, `\r`, U+2028 or U+2029.
///
/// Only `\n` advances the line counter; the others are never valid
/// outside quotes, so they only matter as the end of a quoted value.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    LINE_TERMINATORS.contains(&c)
}
