//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the dispatch loop and the
//! whitespace bookkeeping that annotates already-emitted tokens.

use log::{debug, trace};
use qlex_util::Span;

use crate::chars::{is_delimiter, is_quote, is_word_char};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::Token;

/// Lexer for the query language.
///
/// A `Lexer` lives for exactly one pass over one source string:
/// [`Lexer::tokenize`] consumes it. Concurrent callers each build their own.
///
/// # Example
///
/// ```
/// use qlex_lex::{Lexer, Token};
///
/// let tokens = Lexer::new("SELECT *").tokenize().unwrap();
/// assert_eq!(tokens, vec![Token::keyword("SELECT").spaced(true), Token::delimiter('*')]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens produced so far, in source order.
    pub(crate) tokens: Vec<Token>,

    /// Input limits for this pass.
    config: LexerConfig,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source with default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a new lexer with explicit input limits.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Lexes `source` with a fresh lexer.
    pub fn lex(source: &str) -> LexResult<Vec<Token>> {
        Lexer::new(source).tokenize()
    }

    /// Runs the lexer to the end of the source and returns all tokens.
    ///
    /// Stops at the first error; no partial output is returned.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        self.config.validate()?;

        let len = self.cursor.source().len();
        if let Some(max) = self.config.max_source_len {
            if len > max {
                return Err(LexError::SourceTooLarge { len, max });
            }
        }

        while let Some(token) = self.next_token()? {
            if let Some(max) = self.config.max_tokens {
                if self.tokens.len() >= max {
                    return Err(LexError::TooManyTokens {
                        max,
                        span: self.token_span(),
                    });
                }
            }
            trace!("{} {:?} at {}", token.kind, token.value, self.token_span());
            self.tokens.push(token);
        }

        debug!("lexed {} tokens from {} bytes", self.tokens.len(), len);
        Ok(self.tokens)
    }

    /// Returns the next token, or `None` at the end of the source.
    ///
    /// Newlines and spaces are consumed here without producing a token. A
    /// space marks the previously emitted token as followed by whitespace;
    /// that decision can only be made after the token is already out.
    pub(crate) fn next_token(&mut self) -> LexResult<Option<Token>> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(None);
            }

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            match self.cursor.current_char() {
                '\n' => self.cursor.advance(),
                ' ' => {
                    self.mark_whitespace();
                    self.cursor.advance();
                },
                c if is_word_char(c) => return Ok(Some(self.lex_word())),
                c if is_delimiter(c) => return Ok(Some(self.lex_delimiter(c))),
                c if is_quote(c) => return self.lex_delimited(c).map(Some),
                ch => {
                    return Err(LexError::UnexpectedChar {
                        ch,
                        span: self.cursor.char_span(),
                    })
                },
            }
        }
    }

    /// Flags the last emitted token as followed by whitespace.
    fn mark_whitespace(&mut self) {
        if let Some(last) = self.tokens.last_mut() {
            last.followed_by_whitespace = true;
        }
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}
