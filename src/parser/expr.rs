use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BinaryOperator, BooleanExpr, FloatExpr, IntegerExpr, NoneExpr,
            PrefixExpr, PrefixOperator, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expression")),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected("operator")),
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let expr = match token.kind {
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => Expr::Integer(IntegerExpr { value, span: token.span }),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::Float => match token.value.parse::<f64>() {
            // Out of range literals parse to infinity, which has no literal form
            Ok(value) if value.is_finite() => Expr::Float(FloatExpr { value, span: token.span }),
            _ => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::String => Expr::String(StringExpr { value: token.value, span: token.span }),
        TokenKind::True => Expr::Boolean(BooleanExpr { value: true, span: token.span }),
        TokenKind::False => Expr::Boolean(BooleanExpr { value: false, span: token.span }),
        TokenKind::NoneLiteral => Expr::None(NoneExpr { span: token.span }),
        TokenKind::Identifier => Expr::Symbol(SymbolExpr { value: token.value, span: token.span }),
        _ => return Err(parser.unexpected("expression")),
    };

    parser.advance();
    Ok(expr)
}

fn binary_operator(parser: &Parser) -> Result<BinaryOperator, Error> {
    BinaryOperator::from_token_kind(parser.current_token_kind())
        .ok_or_else(|| parser.unexpected("binary operator"))
}

fn make_binary(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

/// Left-associative infix operators: the right side binds at the operator's
/// own power, so an equal-power operator that follows ends it.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = binary_operator(parser)?;
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(make_binary(left, operator, right))
}

/// `is` and `is not`.
pub fn parse_is_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let operator = if parser.current_token_kind() == TokenKind::Not {
        parser.advance();
        BinaryOperator::IsNot
    } else {
        BinaryOperator::Is
    };

    let right = parse_expr(parser, bp)?;

    Ok(make_binary(left, operator, right))
}

/// `not in`, reached when `not` follows a complete operand.
pub fn parse_not_in_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    parser.expect(TokenKind::In, "`in`")?;

    let right = parse_expr(parser, bp)?;

    Ok(make_binary(left, BinaryOperator::NotIn, right))
}

/// `**` is right-associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
pub fn parse_power_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = binary_operator(parser)?;
    parser.advance();

    let right = parse_expr(parser, BindingPower::Multiplicative)?;

    Ok(make_binary(left, operator, right))
}

fn make_prefix(parser: &mut Parser, operand_bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = PrefixOperator::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("prefix operator"),
                found: operator_token.describe(),
            },
            operator_token.span.start.clone(),
        )
    })?;
    let rhs = parse_expr(parser, operand_bp)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator,
        right_expr: Box::new(rhs),
    }))
}

/// `-`, `+` and `~` bind tighter than every infix operator, `**` included.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    make_prefix(parser, BindingPower::Unary)
}

/// `not` binds looser than comparisons: `not a == b` is `not (a == b)`.
pub fn parse_not_expr(parser: &mut Parser) -> Result<Expr, Error> {
    make_prefix(parser, BindingPower::LogicalNot)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "`)`")?;

    Ok(expr)
}
