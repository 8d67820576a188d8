//! Tree-walking evaluator for the typed AST.
//!
//! This module executes a type-checked program. It handles:
//!
//! - Evaluation of expressions and statements
//! - The runtime environment of bindings
//! - Numeric semantics of every operator (floor division, sign of modulo,
//!   checked 64-bit integer arithmetic)

pub mod expr;
pub mod interpreter;
pub mod stmt;
pub mod value;
