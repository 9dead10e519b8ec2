//! qlex-lex - Lexical Analyzer for a small SQL-like query language
//!
//! This crate turns query text into a flat, ordered list of classified
//! tokens for a downstream parser. It does no parsing of its own.
//!
//! # Example Usage
//!
//! ```
//! use qlex_lex::{lex, Token};
//!
//! let tokens = lex("SELECT * from users WHERE id = :id").unwrap();
//!
//! assert_eq!(tokens[0], Token::keyword("SELECT").spaced(true));
//! assert_eq!(tokens[2], Token::keyword("FROM").spaced(true));
//! assert_eq!(tokens.last(), Some(&Token::parameter(":id")));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexing failures
//! - [`config`] - Optional input limits
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `SELECT`, `FROM`, `WHERE`, `AND`, matched case-insensitively on the whole
//! word and normalized to upper case.
//!
//! ## Identifiers
//!
//! Runs of `[A-Za-z_0-9]` (digits may lead, `123abc` is one identifier) and
//! the content of `'...'`, `"..."` or `` `...` `` quoted values.
//!
//! ## Delimiters
//!
//! `*`, `=`, `:`
//!
//! ## Parameters
//!
//! A `:` immediately followed by a word, e.g. `:user_id`.
//!
//! ## Whitespace
//!
//! Spaces and newlines never become tokens. A space sets
//! `followed_by_whitespace` on the token before it.

#![warn(missing_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use config::{ConfigError, LexerConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};

/// Lexes a complete query with default configuration.
///
/// Each call builds a fresh [`Lexer`], so calls never share state.
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::lex(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(value: &str) -> Token {
        Token::keyword(value).spaced(true)
    }

    fn delimiter(value: char) -> Token {
        Token::delimiter(value).spaced(true)
    }

    fn identifier(value: &str) -> Token {
        Token::identifier(value).spaced(true)
    }

    fn parameter(value: &str) -> Token {
        Token::parameter(value).spaced(true)
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex("").unwrap(), vec![]);
    }

    #[test]
    fn test_single_keyword() {
        assert_eq!(lex("SELECT").unwrap(), vec![Token::keyword("SELECT")]);
        assert!(!lex("SELECT").unwrap()[0].followed_by_whitespace);
    }

    #[test]
    fn test_case_normalization() {
        assert_eq!(lex("WHEre").unwrap(), vec![Token::keyword("WHERE")]);
    }

    #[test]
    fn test_whitespace_flagging() {
        assert_eq!(
            lex("SELECT *").unwrap(),
            vec![keyword("SELECT"), Token::delimiter('*')]
        );
    }

    #[test]
    fn test_full_query() {
        let src = "SELECT * from table WHEre id = 123 and 123abc = 'something' and :foo = :bar1";
        assert_eq!(
            lex(src).unwrap(),
            vec![
                keyword("SELECT"),
                delimiter('*'),
                keyword("FROM"),
                identifier("table"),
                keyword("WHERE"),
                identifier("id"),
                delimiter('='),
                identifier("123"),
                keyword("AND"),
                identifier("123abc"),
                delimiter('='),
                identifier("something"),
                keyword("AND"),
                parameter(":foo"),
                delimiter('='),
                Token::parameter(":bar1"),
            ]
        );
    }

    #[test]
    fn test_multiline_query() {
        let src = "SELECT *\nFROM orders\nWHERE total = :min";
        let tokens = lex(src).unwrap();
        let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, ["SELECT", "*", "FROM", "orders", "WHERE", "total", "=", ":min"]);
        // Newlines are not spaces
        assert!(!tokens[1].followed_by_whitespace);
        assert!(!tokens[3].followed_by_whitespace);
    }

    #[test]
    fn test_unrecognized_character() {
        assert!(matches!(
            lex("@").unwrap_err(),
            LexError::UnexpectedChar { ch: '@', .. }
        ));
    }

    #[test]
    fn test_calls_are_independent() {
        let first = lex("SELECT :a").unwrap();
        let second = lex("SELECT :a").unwrap();
        assert_eq!(first, second);
        assert!(lex("'open").is_err());
        assert_eq!(lex("SELECT :a").unwrap(), first);
    }

    #[test]
    fn test_serialized_stream() {
        let tokens = lex(":foo = 'x'").unwrap();
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "kind": "PARAMETER", "value": ":foo", "followedByWhitespace": true },
                { "kind": "DELIMITER", "value": "=", "followedByWhitespace": true },
                { "kind": "IDENTIFIER", "value": "x", "followedByWhitespace": false },
            ])
        );
    }

    #[test]
    fn test_diagnostic_for_failed_lex() {
        let source = "SELECT *\nFROM t WHERE a = \"b";
        let err = lex(source).unwrap_err();
        let diag = err.to_diagnostic(source);
        assert_eq!(diag.code, Some(qlex_util::DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diag.span.line, 2);
        assert_eq!(diag.snippets[0].line, "FROM t WHERE a = \"b");
    }

    #[test]
    fn test_property_relex_joined_values() {
        use proptest::prelude::*;

        let piece = prop_oneof![
            "[A-Za-z_0-9]{1,8}",
            Just("select".to_string()),
            Just("From".to_string()),
            Just("*".to_string()),
            Just("=".to_string()),
            Just(":".to_string()),
            "x[a-z0-9]{0,6}".prop_map(|s| format!(":{}", s)),
            "x[a-z0-9]{0,6}".prop_map(|s| format!("'{}'", s)),
            "x[a-z0-9]{0,6}".prop_map(|s| format!("`{}`", s)),
        ];

        proptest!(|(pieces in prop::collection::vec(piece, 0..12))| {
            let first = lex(&pieces.join(" ")).unwrap();
            let joined = first
                .iter()
                .map(|t| t.value.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let second = lex(&joined).unwrap();

            let shape = |tokens: &[Token]| {
                tokens
                    .iter()
                    .map(|t| (t.kind, t.value.clone()))
                    .collect::<Vec<_>>()
            };
            prop_assert_eq!(shape(&first), shape(&second));
        });
    }
}
