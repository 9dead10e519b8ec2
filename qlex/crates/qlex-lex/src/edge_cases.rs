//! Edge case tests for qlex-lex
