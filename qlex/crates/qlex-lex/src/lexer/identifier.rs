//! Word lexing: identifiers, keywords and parameter fusion.

use log::trace;

use crate::chars::{is_word_char, PARAMETER_PREFIX};
use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of `[A-Za-z_0-9]`.
    ///
    /// In priority order the run becomes:
    /// 1. a parameter, if the last emitted token is a bare `:` with nothing
    ///    between it and the run (the `:` token is retracted);
    /// 2. a keyword, if the whole run is a reserved word in any case;
    /// 3. an identifier, spelled exactly as written.
    pub(crate) fn lex_word(&mut self) -> Token {
        let word = self.cursor.eat_while(is_word_char);
        debug_assert!(!word.is_empty(), "lex_word entered on a non-word character");

        if let Some(prefix) = self.take_parameter_prefix() {
            let value = prefix.value + word;
            trace!("fused parameter {}", value);
            return Token::parameter(value);
        }

        match keyword_from_ident(word) {
            Some(keyword) => Token::keyword(keyword),
            None => Token::identifier(word),
        }
    }

    /// Pops the last token if it is a `:` directly touching the current word.
    fn take_parameter_prefix(&mut self) -> Option<Token> {
        let last = self.tokens.last()?;
        if last.followed_by_whitespace || last.value != PARAMETER_PREFIX {
            return None;
        }
        self.tokens.pop()
    }
}
