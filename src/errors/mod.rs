//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used throughout the pipeline. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each stage (lexing, parsing, checking, evaluation)
//! - The `ErrorKind` taxonomy callers use to tell the stages apart
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
