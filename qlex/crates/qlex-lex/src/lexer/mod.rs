//! Lexer module.
//!
//! The lexer implementation is split by character class:
//! - `core` - Lexer struct, dispatch loop and whitespace bookkeeping
//! - `identifier` - Word runs, keywords and parameter fusion
//! - `delimiter` - Single-character delimiters
//! - `string` - Quoted (delimited) identifiers

mod core;
mod delimiter;
mod identifier;
mod string;

pub use core::Lexer;
