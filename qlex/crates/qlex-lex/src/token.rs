//! Token definitions for the query lexer.
//!
//! A [`Token`] is a classified slice of the query plus one bit of layout:
//! whether a literal space followed it. The serialized form is the wire
//! shape downstream consumers depend on:
//!
//! ```json
//! { "kind": "KEYWORD", "value": "SELECT", "followedByWhitespace": true }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved words, in their normalized (upper-case) spelling.
pub const KEYWORDS: [&str; 4] = ["SELECT", "FROM", "WHERE", "AND"];

/// The category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// A bare word, or the content of a quoted value.
    Identifier,
    /// One of `*`, `=`, `:`.
    Delimiter,
    /// A reserved word; the value is always upper-case.
    Keyword,
    /// Reserved for a future split of delimiters into operators. The lexer
    /// never produces it.
    Operator,
    /// A `:` fused with the word that directly follows it, e.g. `:id`.
    Parameter,
}

impl TokenKind {
    /// Returns the wire name of this kind, e.g. `"IDENTIFIER"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Parameter => "PARAMETER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token.
///
/// Constructors always leave `followed_by_whitespace` unset. The lexer
/// flips it later, when it consumes a space directly after this token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text; normalized for keywords, unquoted for delimited values.
    pub value: String,
    /// True when a space character came right after this token.
    pub followed_by_whitespace: bool,
}

impl Token {
    /// Creates a token of any kind with no trailing whitespace.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            followed_by_whitespace: false,
        }
    }

    /// Creates an identifier token, case preserved.
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    /// Creates a keyword token, normalizing the spelling to upper case.
    ///
    /// ```
    /// use qlex_lex::Token;
    ///
    /// assert_eq!(Token::keyword("WHEre").value, "WHERE");
    /// ```
    pub fn keyword(value: &str) -> Self {
        Self::new(TokenKind::Keyword, value.to_ascii_uppercase())
    }

    /// Creates a single-character delimiter token.
    pub fn delimiter(value: char) -> Self {
        Self::new(TokenKind::Delimiter, value.to_string())
    }

    /// Creates a parameter token; `value` includes the leading `:`.
    pub fn parameter(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Parameter, value)
    }

    /// Returns this token with the whitespace flag set to `followed`.
    ///
    /// Handy for building expected token streams.
    pub fn spaced(mut self, followed: bool) -> Self {
        self.followed_by_whitespace = followed;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Looks up a whole word in the reserved word list, ignoring case.
///
/// Returns the normalized keyword spelling, or `None` if `ident` is not
/// reserved. Prefixes never match: `FROMage` is not `FROM`.
///
/// ```
/// use qlex_lex::keyword_from_ident;
///
/// assert_eq!(keyword_from_ident("select"), Some("SELECT"));
/// assert_eq!(keyword_from_ident("FROMage"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .copied()
        .find(|keyword| keyword.eq_ignore_ascii_case(ident))
}
