//! Delimited identifier lexing.
//!
//! A value wrapped in `'`, `"` or `` ` `` is an identifier whose text is
//! everything between the opening quote and the first matching close.
//! There are no escapes, and the value may not contain a line terminator
//! (`\n`, `\r`, U+2028 or U+2029).

use qlex_util::Span;

use crate::chars::is_line_terminator;
use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted value opened by `quote`.
    ///
    /// # Returns
    ///
    /// `Token::identifier` with the unquoted content, possibly empty
    pub(crate) fn lex_delimited(&mut self, quote: char) -> LexResult<Token> {
        let open = self.cursor.char_span();
        self.cursor.advance();

        let content = self.cursor.eat_while(|c| c != quote && !is_line_terminator(c));

        if self.cursor.is_at_end() || self.cursor.current_char() != quote {
            return Err(LexError::UnterminatedString {
                quote,
                span: Span::new(open.start, self.cursor.position(), open.line, open.column),
            });
        }
        self.cursor.advance();

        Ok(Token::identifier(content))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use qlex_util::Span;

    #[test]
    fn test_single_quoted() {
        let tokens = Lexer::lex("'something'").unwrap();
        assert_eq!(tokens, vec![Token::identifier("something")]);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_each_quote_style() {
        for source in ["'a b'", "\"a b\"", "`a b`"] {
            assert_eq!(Lexer::lex(source).unwrap(), vec![Token::identifier("a b")]);
        }
    }

    #[test]
    fn test_empty_quoted_value() {
        assert_eq!(Lexer::lex("''").unwrap(), vec![Token::identifier("")]);
    }

    #[test]
    fn test_other_quotes_are_content() {
        let tokens = Lexer::lex(r#"'say "hi" `now`'"#).unwrap();
        assert_eq!(tokens, vec![Token::identifier(r#"say "hi" `now`"#)]);
    }

    #[test]
    fn test_stops_at_first_matching_quote() {
        let tokens = Lexer::lex("'a' 'b'").unwrap();
        assert_eq!(
            tokens,
            vec![Token::identifier("a").spaced(true), Token::identifier("b")]
        );
    }

    #[test]
    fn test_quoted_keyword_is_identifier() {
        assert_eq!(Lexer::lex("\"SELECT\"").unwrap(), vec![Token::identifier("SELECT")]);
    }

    #[test]
    fn test_quoted_content_allows_any_char() {
        let tokens = Lexer::lex("'@#\t€'").unwrap();
        assert_eq!(tokens, vec![Token::identifier("@#\t€")]);
    }

    #[test]
    fn test_unterminated_at_end() {
        let err = Lexer::lex("a = 'abc").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                quote: '\'',
                span: Span::new(4, 8, 1, 5),
            }
        );
    }

    #[test]
    fn test_mismatched_quote_is_unterminated() {
        let err = Lexer::lex("'abc\"").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { quote: '\'', .. }));
    }

    #[test]
    fn test_newline_inside_quotes_is_unterminated() {
        let err = Lexer::lex("`a\nb`").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                quote: '`',
                span: Span::new(0, 2, 1, 1),
            }
        );

        for terminator in ['\r', '\u{2028}', '\u{2029}'] {
            let source = format!("'a{terminator}b'");
            let err = Lexer::lex(&source).unwrap_err();
            assert_eq!(
                err,
                LexError::UnterminatedString {
                    quote: '\'',
                    span: Span::new(0, 2, 1, 1),
                },
                "{terminator:?} should end the quoted value"
            );
        }
    }

    #[test]
    fn test_crlf_inside_quotes_is_unterminated() {
        let err = Lexer::lex("WHERE a = \"x\r\ny\"").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { quote: '"', .. }));
    }

    #[test]
    fn test_cursor_lands_after_closing_quote() {
        let mut lexer = Lexer::new("'x'=");
        lexer.lex_delimited('\'').unwrap();
        assert_eq!(lexer.cursor.remaining(), "=");
    }
}
