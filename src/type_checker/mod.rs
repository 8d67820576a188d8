//! Type checking and semantic analysis module.
//!
//! This module performs type checking on the AST. It transforms the untyped
//! AST into a typed AST while:
//!
//! - Verifying type correctness of expressions and statements
//! - Resolving variable references
//! - Fixing the type of `var` bindings at their first declaration
//! - Rejecting operators applied to incompatible operand types
//!
//! The type checker keeps one flat environment per session, so type errors
//! surface before any evaluation side effect.

pub mod type_checker;
pub mod typed_ast;
