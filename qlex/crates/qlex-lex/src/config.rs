//! Configuration Module - Lexer input limits
//!
//! The lexer has no tuning knobs beyond optional guards on input size. Both
//! limits are off by default, so `LexerConfig::default()` accepts any input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by [`LexerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A limit was set to a value that rejects every input.
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}

/// Configuration for a single lexing pass.
///
/// # Examples
///
/// ```
/// use qlex_lex::LexerConfig;
///
/// let config = LexerConfig::default()
///     .with_max_source_len(64 * 1024)
///     .with_max_tokens(4096);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Maximum source length in bytes.
    ///
    /// Checked before any scanning starts. Default: unlimited
    pub max_source_len: Option<usize>,

    /// Maximum number of tokens in the output.
    ///
    /// Default: unlimited
    pub max_tokens: Option<usize>,
}

impl LexerConfig {
    /// Sets the maximum source length in bytes.
    pub fn with_max_source_len(mut self, max: usize) -> Self {
        self.max_source_len = Some(max);
        self
    }

    /// Sets the maximum number of output tokens.
    pub fn with_max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Validates the configuration.
    ///
    /// A zero `max_tokens` would reject every non-empty query, which is
    /// never what a caller means.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tokens == Some(0) {
            return Err(ConfigError::InvalidLimit(
                "max_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
