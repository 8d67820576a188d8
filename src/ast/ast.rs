use std::fmt::{Display, Write};

use crate::Span;

use super::{
    expressions::{
        BinaryExpr, BooleanExpr, FloatExpr, IntegerExpr, NoneExpr, PrefixExpr, StringExpr,
        SymbolExpr,
    },
    statements::{AssignmentStmt, ExpressionStmt, VarDeclStmt},
};

/// Expression nodes.
///
/// Nodes are plain data: created once by the parser and never mutated.
#[derive(Debug, Clone)]
pub enum Expr {
    Integer(IntegerExpr),
    Float(FloatExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    None(NoneExpr),
    Symbol(SymbolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Integer(expr) => &expr.span,
            Expr::Float(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::None(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }
}

/// Writes a string literal that the lexer reads back as the same value.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\0' => quoted.push_str("\\0"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Formats a float so that it always lexes back as a float literal.
pub fn format_float(value: f64) -> String {
    let mut text = format!("{}", value);
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

// Binary and prefix operations are fully parenthesised so the printed text
// parses back into the same tree regardless of precedence.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer(expr) => write!(f, "{}", expr.value),
            Expr::Float(expr) => write!(f, "{}", format_float(expr.value)),
            Expr::String(expr) => write!(f, "{}", quote_string(&expr.value)),
            Expr::Boolean(expr) => write!(f, "{}", if expr.value { "True" } else { "False" }),
            Expr::None(_) => write!(f, "None"),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
            Expr::Prefix(expr) => {
                f.write_char('(')?;
                write!(f, "{}", expr.operator)?;
                if expr.operator.symbol().chars().all(char::is_alphabetic) {
                    f.write_char(' ')?;
                }
                write!(f, "{})", expr.right_expr)
            }
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.left, expr.operator, expr.right),
        }
    }
}

/// Statement nodes.
#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
            Stmt::VarDecl(stmt) => write!(
                f,
                "{}: {} = {}",
                stmt.identifier, stmt.explicit_type, stmt.assigned_value
            ),
            Stmt::Assignment(stmt) => write!(f, "{} = {}", stmt.identifier, stmt.value),
        }
    }
}
