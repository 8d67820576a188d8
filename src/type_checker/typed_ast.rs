//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. Each typed node includes type information and
//! has been validated for type correctness.
//!
//! The typed AST mirrors the structure of the untyped AST but includes:
//! - Resolved types for all expressions
//! - The effective type of every declared binding
//!
//! This typed AST is consumed by the interpreter.

use crate::{
    ast::{
        expressions::{BinaryOperator, PrefixOperator},
        types::Type,
    },
    Span,
};

/// An expression annotated with its resolved type.
#[derive(Debug, Clone)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypedExprKind {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    None,
    Symbol(TypedSymbolExpr),
    Prefix(TypedPrefixExpr),
    Binary(TypedBinaryExpr),
}

#[derive(Debug, Clone)]
pub struct TypedSymbolExpr {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct TypedPrefixExpr {
    pub operator: PrefixOperator,
    pub right_expr: Box<TypedExpr>,
}

#[derive(Debug, Clone)]
pub struct TypedBinaryExpr {
    pub left: Box<TypedExpr>,
    pub operator: BinaryOperator,
    pub right: Box<TypedExpr>,
}

impl TypedExpr {
    pub fn get_type(&self) -> Type {
        self.ty
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// The value of a numeric literal, looking through unary `+` and `-`.
    pub fn literal_number(&self) -> Option<f64> {
        match &self.kind {
            TypedExprKind::Integer(value) => Some(*value as f64),
            TypedExprKind::Float(value) => Some(*value),
            TypedExprKind::Prefix(prefix) => {
                let operand = prefix.right_expr.literal_number()?;
                match prefix.operator {
                    PrefixOperator::Plus => Some(operand),
                    PrefixOperator::Minus => Some(-operand),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TypedStmt {
    Expression(TypedExpressionStmt),
    VarDecl(TypedVarDeclStmt),
    Assignment(TypedAssignmentStmt),
}

impl TypedStmt {
    pub fn get_span(&self) -> &Span {
        match self {
            TypedStmt::Expression(stmt) => &stmt.span,
            TypedStmt::VarDecl(stmt) => &stmt.span,
            TypedStmt::Assignment(stmt) => &stmt.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypedExpressionStmt {
    pub expression: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedVarDeclStmt {
    pub identifier: String,
    /// Effective type of the binding after `var` inference.
    pub var_type: Type,
    pub assigned_value: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedAssignmentStmt {
    pub identifier: String,
    pub value: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedBlockStmt {
    pub body: Vec<TypedStmt>,
    pub span: Span,
}

impl TypedBlockStmt {
    pub fn iter(&self) -> std::slice::Iter<'_, TypedStmt> {
        self.body.iter()
    }
}
