//! Delimiter lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes one of `*`, `=`, `:` as a single-character token.
    ///
    /// A `:` is emitted as a plain delimiter here; it only becomes part of a
    /// parameter if a word follows it directly.
    pub(crate) fn lex_delimiter(&mut self, c: char) -> Token {
        self.cursor.advance();
        Token::delimiter(c)
    }
}
