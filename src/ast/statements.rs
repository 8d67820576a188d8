use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{ast::{Expr, Stmt}, types::Type};

/// The root of a parsed program: statements in source order.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `name: type = value`, where `type` may be `var`.
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: Type,
    pub assigned_value: Expr,
    pub span: Span,
}

/// `name = value` on an existing binding.
#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub span: Span,
}
