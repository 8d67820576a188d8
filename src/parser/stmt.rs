use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, ExpressionStmt, VarDeclStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

/// Parses one statement. The caller checks the separator that follows.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.current_token_kind() == TokenKind::Identifier {
        match parser.peek_kind() {
            TokenKind::Colon => return parse_var_decl_stmt(parser),
            TokenKind::Assignment => return parse_assignment_stmt(parser),
            _ => {}
        }
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier_token = parser.expect(TokenKind::Identifier, "identifier")?;
    parser.expect(TokenKind::Colon, "`:`")?;
    let explicit_type = parse_type(parser)?;
    parser.expect(TokenKind::Assignment, "`=`")?;
    let assigned_value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: Span {
            start: identifier_token.span.start.clone(),
            end: assigned_value.get_span().end.clone(),
        },
        identifier: identifier_token.value,
        explicit_type,
        assigned_value,
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier_token = parser.expect(TokenKind::Identifier, "identifier")?;
    parser.expect(TokenKind::Assignment, "`=`")?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        span: Span {
            start: identifier_token.span.start.clone(),
            end: value.get_span().end.clone(),
        },
        identifier: identifier_token.value,
        value,
    }))
}
