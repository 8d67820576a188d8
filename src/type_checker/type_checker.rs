use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{BinaryOperator, PrefixOperator},
        statements::{AssignmentStmt, BlockStmt, VarDeclStmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::typed_ast::{
    TypedAssignmentStmt, TypedBinaryExpr, TypedBlockStmt, TypedExpr, TypedExprKind,
    TypedExpressionStmt, TypedPrefixExpr, TypedStmt, TypedSymbolExpr, TypedVarDeclStmt,
};

/// Static bindings: name to recorded type.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, Type>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare_variable(&mut self, variable_name: String, variable_type: Type) {
        self.variable_lookup.insert(variable_name, variable_type);
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<Type> {
        self.variable_lookup.get(variable_name).copied()
    }
}

impl FromIterator<(String, Type)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Type)>>(iter: I) -> Self {
        Environment {
            variable_lookup: iter.into_iter().collect(),
        }
    }
}

/// Checks programs against a persistent static environment.
///
/// A program that fails to check leaves the environment untouched.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub environment: Environment,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            environment: Environment::new(),
        }
    }

    pub fn with_environment(environment: Environment) -> Self {
        TypeChecker { environment }
    }

    pub fn type_check(&mut self, ast: &BlockStmt) -> Result<TypedBlockStmt, Error> {
        let mut scratch = TypeChecker::with_environment(self.environment.clone());
        let typed = type_check_block(&mut scratch, ast)?;
        self.environment = scratch.environment;
        Ok(typed)
    }
}

fn prefix_result_type(operator: PrefixOperator, operand: Type) -> Option<Type> {
    match (operator, operand) {
        (_, Type::Never) => Some(Type::Never),
        (PrefixOperator::Plus | PrefixOperator::Minus, Type::Int) => Some(Type::Int),
        (PrefixOperator::Plus | PrefixOperator::Minus, Type::Float) => Some(Type::Float),
        (PrefixOperator::BitNot, Type::Int) => Some(Type::Int),
        (PrefixOperator::Not, Type::Bool) => Some(Type::Bool),
        _ => None,
    }
}

fn binary_result_type(operator: BinaryOperator, left: Type, right: Type) -> Option<Type> {
    use BinaryOperator::*;

    match operator {
        And | Or => match (left, right) {
            (Type::Never, Type::Bool | Type::Never) => Some(Type::Never),
            // The right side may be skipped, so the result is the left's
            (Type::Bool, Type::Bool | Type::Never) => Some(Type::Bool),
            _ => None,
        },
        _ if left == Type::Never || right == Type::Never => Some(Type::Never),
        Divide if left.is_numeric() && right.is_numeric() => Some(Type::Float),
        Add | Subtract | Multiply | FloorDivide | Modulo | Power
            if left.is_numeric() && right.is_numeric() =>
        {
            if left == Type::Int && right == Type::Int {
                Some(Type::Int)
            } else {
                Some(Type::Float)
            }
        }
        BitAnd | BitOr | BitXor | ShiftLeft | ShiftRight
            if left == Type::Int && right == Type::Int =>
        {
            Some(Type::Int)
        }
        Equals | NotEquals if (left.is_numeric() && right.is_numeric()) || left == right => {
            Some(Type::Bool)
        }
        Less | LessEquals | Greater | GreaterEquals
            if (left.is_numeric() && right.is_numeric()) || (left == Type::Str && right == Type::Str) =>
        {
            Some(Type::Bool)
        }
        Is | IsNot if left == right || left == Type::NoneType || right == Type::NoneType => {
            Some(Type::Bool)
        }
        In | NotIn if left == Type::Str && right == Type::Str => Some(Type::Bool),
        _ => None,
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<TypedExpr, Error> {
    let span = ast.get_span().clone();

    let (kind, ty) = match ast {
        Expr::Integer(integer) => (TypedExprKind::Integer(integer.value), Type::Int),
        Expr::Float(float) => (TypedExprKind::Float(float.value), Type::Float),
        Expr::String(string) => (TypedExprKind::String(string.value.clone()), Type::Str),
        Expr::Boolean(boolean) => (TypedExprKind::Boolean(boolean.value), Type::Bool),
        Expr::None(_) => (TypedExprKind::None, Type::NoneType),
        Expr::Symbol(symbol) => {
            let var_type = type_checker
                .environment
                .get_variable(&symbol.value)
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::VariableNotDeclared {
                            variable: symbol.value.clone(),
                        },
                        span.start.clone(),
                    )
                })?;

            (
                TypedExprKind::Symbol(TypedSymbolExpr {
                    value: symbol.value.clone(),
                }),
                var_type,
            )
        }
        Expr::Prefix(prefix) => {
            let right_expr = type_check_expr(type_checker, &prefix.right_expr)?;
            let ty = prefix_result_type(prefix.operator, right_expr.get_type()).ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnaryOperandType {
                        operator: prefix.operator.to_string(),
                        operand: right_expr.get_type().to_string(),
                    },
                    span.start.clone(),
                )
            })?;

            (
                TypedExprKind::Prefix(TypedPrefixExpr {
                    operator: prefix.operator,
                    right_expr: Box::new(right_expr),
                }),
                ty,
            )
        }
        Expr::Binary(binary) => {
            let left = type_check_expr(type_checker, &binary.left)?;
            let right = type_check_expr(type_checker, &binary.right)?;
            let operator = binary.operator;

            let mut ty = binary_result_type(operator, left.get_type(), right.get_type())
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::BinaryOperandTypes {
                            operator: operator.to_string(),
                            left: left.get_type().to_string(),
                            right: right.get_type().to_string(),
                        },
                        binary.left.get_span().start.clone(),
                    )
                })?;

            let divisor = right.literal_number();

            // A literal zero divisor can never produce a value
            if operator.is_division() && divisor == Some(0.0) {
                ty = Type::Never;
            }

            if operator == BinaryOperator::Power
                && ty == Type::Int
                && divisor.is_some_and(|exponent| exponent < 0.0)
            {
                return Err(Error::new(
                    ErrorImpl::NegativeExponent,
                    right.get_span().start.clone(),
                ));
            }

            (
                TypedExprKind::Binary(TypedBinaryExpr {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                }),
                ty,
            )
        }
    };

    Ok(TypedExpr { kind, ty, span })
}

fn type_check_var_decl(
    type_checker: &mut TypeChecker,
    var_decl_stmt: &VarDeclStmt,
) -> Result<TypedStmt, Error> {
    let assigned_value = type_check_expr(type_checker, &var_decl_stmt.assigned_value)?;
    let value_type = assigned_value.get_type();

    let var_type = if var_decl_stmt.explicit_type == Type::Inferred {
        value_type
    } else {
        if !var_decl_stmt.explicit_type.accepts(value_type) {
            return Err(Error::new(
                ErrorImpl::TypeMatchError {
                    name: var_decl_stmt.identifier.clone(),
                    expected: var_decl_stmt.explicit_type.to_string(),
                    received: value_type.to_string(),
                },
                assigned_value.get_span().start.clone(),
            ));
        }
        var_decl_stmt.explicit_type
    };

    let existing = type_checker.environment.get_variable(&var_decl_stmt.identifier);
    match existing {
        Some(existing) if !existing.accepts(var_type) => {
            return Err(Error::new(
                ErrorImpl::RedeclarationTypeMismatch {
                    variable: var_decl_stmt.identifier.clone(),
                    existing: existing.to_string(),
                    declared: var_type.to_string(),
                },
                var_decl_stmt.span.start.clone(),
            ));
        }
        // The declaration never completes, the old binding stays
        Some(_) if var_type == Type::Never => {}
        _ => type_checker
            .environment
            .declare_variable(var_decl_stmt.identifier.clone(), var_type),
    }

    Ok(TypedStmt::VarDecl(TypedVarDeclStmt {
        identifier: var_decl_stmt.identifier.clone(),
        var_type,
        assigned_value,
        span: var_decl_stmt.span.clone(),
    }))
}

fn type_check_assignment(
    type_checker: &mut TypeChecker,
    assignment: &AssignmentStmt,
) -> Result<TypedStmt, Error> {
    let recorded = type_checker
        .environment
        .get_variable(&assignment.identifier)
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: assignment.identifier.clone(),
                },
                assignment.span.start.clone(),
            )
        })?;

    let value = type_check_expr(type_checker, &assignment.value)?;

    if !recorded.accepts(value.get_type()) {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                name: assignment.identifier.clone(),
                expected: recorded.to_string(),
                received: value.get_type().to_string(),
            },
            value.get_span().start.clone(),
        ));
    }

    Ok(TypedStmt::Assignment(TypedAssignmentStmt {
        identifier: assignment.identifier.clone(),
        value,
        span: assignment.span.clone(),
    }))
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Result<TypedStmt, Error> {
    match ast {
        Stmt::Expression(expression_stmt) => Ok(TypedStmt::Expression(TypedExpressionStmt {
            expression: type_check_expr(type_checker, &expression_stmt.expression)?,
            span: expression_stmt.span.clone(),
        })),
        Stmt::VarDecl(var_decl_stmt) => type_check_var_decl(type_checker, var_decl_stmt),
        Stmt::Assignment(assignment) => type_check_assignment(type_checker, assignment),
    }
}

pub fn type_check_block(type_checker: &mut TypeChecker, ast: &BlockStmt) -> Result<TypedBlockStmt, Error> {
    let mut typed_ast = TypedBlockStmt {
        body: vec![],
        span: ast.span.clone(),
    };

    for stmt in ast.iter() {
        typed_ast.body.push(type_check_stmt(type_checker, stmt)?);
    }

    debug!(
        statements = typed_ast.body.len(),
        bindings = type_checker.environment.variable_lookup.len(),
        "type checked program"
    );

    Ok(typed_ast)
}

/// Checks a whole program against an empty environment.
pub fn type_check(ast: &BlockStmt) -> Result<TypedBlockStmt, Error> {
    TypeChecker::new().type_check(ast)
}
