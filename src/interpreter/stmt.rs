use crate::{
    errors::errors::{Error, ErrorImpl},
    type_checker::typed_ast::TypedStmt,
};

use super::{
    expr::eval_expression,
    interpreter::{Binding, Interpreter},
    value::Value,
};

/// Executes one statement; expression statements yield their value.
pub fn eval_statement(interpreter: &mut Interpreter, statement: &TypedStmt) -> Result<Option<Value>, Error> {
    match statement {
        TypedStmt::Expression(expression_stmt) => {
            let value = eval_expression(interpreter, &expression_stmt.expression)?;
            Ok(Some(value))
        }
        TypedStmt::VarDecl(var_decl_stmt) => {
            let value = eval_expression(interpreter, &var_decl_stmt.assigned_value)?;

            interpreter.environment.declare(
                var_decl_stmt.identifier.clone(),
                Binding {
                    ty: var_decl_stmt.var_type,
                    value,
                },
            );
            Ok(None)
        }
        TypedStmt::Assignment(assignment) => {
            let value = eval_expression(interpreter, &assignment.value)?;

            if !interpreter.environment.assign(&assignment.identifier, value) {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: assignment.identifier.clone(),
                    },
                    assignment.span.start.clone(),
                ));
            }
            Ok(None)
        }
    }
}
