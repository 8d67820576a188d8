//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of type names, literal keywords, identifiers and operators
//! - Token position tracking for error reporting
//! - Comments, whitespace and line breaks (statement separators)

pub mod lexer;
pub mod tokens;
