//! Expression evaluation and the numeric kernels behind each operator.
//!
//! Integers are 64-bit two's complement. Every operation that would leave
//! that range fails with `IntegerOverflow` instead of wrapping.

use std::cmp::Ordering;

use crate::{
    ast::expressions::{BinaryOperator, PrefixOperator},
    errors::errors::{Error, ErrorImpl},
    type_checker::typed_ast::{TypedBinaryExpr, TypedExpr, TypedExprKind, TypedPrefixExpr},
};

use super::{interpreter::Interpreter, value::Value};

fn overflow(operator: BinaryOperator) -> ErrorImpl {
    ErrorImpl::IntegerOverflow {
        operator: operator.to_string(),
    }
}

fn division_by_zero(operator: BinaryOperator) -> ErrorImpl {
    ErrorImpl::DivisionByZero {
        operator: operator.to_string(),
    }
}

/// Integer division rounded toward negative infinity.
pub fn int_floor_div(a: i64, b: i64) -> Result<i64, ErrorImpl> {
    if b == 0 {
        return Err(division_by_zero(BinaryOperator::FloorDivide));
    }

    let quotient = a
        .checked_div(b)
        .ok_or_else(|| overflow(BinaryOperator::FloorDivide))?;

    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Integer remainder carrying the sign of the divisor.
pub fn int_modulo(a: i64, b: i64) -> Result<i64, ErrorImpl> {
    if b == 0 {
        return Err(division_by_zero(BinaryOperator::Modulo));
    }

    // i64::MIN % -1 is 0, only the hardware instruction overflows
    let remainder = a.wrapping_rem(b);

    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

pub fn float_modulo(a: f64, b: f64) -> Result<f64, ErrorImpl> {
    if b == 0.0 {
        return Err(division_by_zero(BinaryOperator::Modulo));
    }

    let remainder = a % b;

    if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

pub fn float_floor_div(a: f64, b: f64) -> Result<f64, ErrorImpl> {
    if b == 0.0 {
        return Err(division_by_zero(BinaryOperator::FloorDivide));
    }

    let remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
        quotient -= 1.0;
    }

    // `quotient` is within rounding error of an integer
    let floor = quotient.floor();
    if quotient - floor > 0.5 {
        Ok(floor + 1.0)
    } else {
        Ok(floor)
    }
}

pub fn int_power(base: i64, exponent: i64) -> Result<i64, ErrorImpl> {
    if exponent < 0 {
        return Err(ErrorImpl::NegativePowerExponent);
    }

    match (base, u32::try_from(exponent)) {
        (_, Ok(exponent)) => base
            .checked_pow(exponent)
            .ok_or_else(|| overflow(BinaryOperator::Power)),
        (0 | 1, Err(_)) => Ok(base),
        (-1, Err(_)) => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => Err(overflow(BinaryOperator::Power)),
    }
}

pub fn float_power(base: f64, exponent: f64) -> Result<f64, ErrorImpl> {
    if base == 0.0 && exponent < 0.0 {
        return Err(division_by_zero(BinaryOperator::Power));
    }

    Ok(base.powf(exponent))
}

pub fn shift_left(value: i64, count: i64) -> Result<i64, ErrorImpl> {
    if count < 0 {
        return Err(ErrorImpl::NegativeShift);
    }
    if value == 0 {
        return Ok(0);
    }
    if count >= 64 {
        return Err(overflow(BinaryOperator::ShiftLeft));
    }

    let shifted = value << count;
    if shifted >> count != value {
        return Err(overflow(BinaryOperator::ShiftLeft));
    }

    Ok(shifted)
}

/// Arithmetic right shift; shifting by the full width leaves only the sign.
pub fn shift_right(value: i64, count: i64) -> Result<i64, ErrorImpl> {
    if count < 0 {
        return Err(ErrorImpl::NegativeShift);
    }
    if count >= 64 {
        return Ok(if value < 0 { -1 } else { 0 });
    }

    Ok(value >> count)
}

fn int_arithmetic(operator: BinaryOperator, a: i64, b: i64) -> Result<Value, ErrorImpl> {
    let result = match operator {
        BinaryOperator::Add => a.checked_add(b).ok_or_else(|| overflow(operator))?,
        BinaryOperator::Subtract => a.checked_sub(b).ok_or_else(|| overflow(operator))?,
        BinaryOperator::Multiply => a.checked_mul(b).ok_or_else(|| overflow(operator))?,
        BinaryOperator::FloorDivide => int_floor_div(a, b)?,
        BinaryOperator::Modulo => int_modulo(a, b)?,
        BinaryOperator::Power => int_power(a, b)?,
        BinaryOperator::BitAnd => a & b,
        BinaryOperator::BitOr => a | b,
        BinaryOperator::BitXor => a ^ b,
        BinaryOperator::ShiftLeft => shift_left(a, b)?,
        BinaryOperator::ShiftRight => shift_right(a, b)?,
        _ => return Err(unsupported(operator, &Value::Int(a), &Value::Int(b))),
    };

    Ok(Value::Int(result))
}

fn float_arithmetic(operator: BinaryOperator, a: f64, b: f64) -> Result<Value, ErrorImpl> {
    let result = match operator {
        BinaryOperator::Add => a + b,
        BinaryOperator::Subtract => a - b,
        BinaryOperator::Multiply => a * b,
        BinaryOperator::FloorDivide => float_floor_div(a, b)?,
        BinaryOperator::Modulo => float_modulo(a, b)?,
        BinaryOperator::Power => float_power(a, b)?,
        _ => return Err(unsupported(operator, &Value::Float(a), &Value::Float(b))),
    };

    Ok(Value::Float(result))
}

fn unsupported(operator: BinaryOperator, left: &Value, right: &Value) -> ErrorImpl {
    ErrorImpl::BinaryOperandTypes {
        operator: operator.to_string(),
        left: left.get_type().to_string(),
        right: right.get_type().to_string(),
    }
}

/// Identity in the sense of `is`: same type and same contents. Floats are
/// compared by bit pattern, so `nan is nan` holds and `0.0 is -0.0` does not.
fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
        _ => left == right,
    }
}

/// Orders an integer against a float without rounding the integer first.
pub fn compare_int_float(a: i64, b: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if b.is_nan() {
        return None;
    }
    if b >= LIMIT {
        return Some(Ordering::Less);
    }
    if b < -LIMIT {
        return Some(Ordering::Greater);
    }

    let floor = b.floor();
    match a.cmp(&(floor as i64)) {
        Ordering::Equal if b > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
        (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::None, Value::None) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Applies a strict (non short-circuiting) binary operator to two values.
pub fn apply_binary(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, ErrorImpl> {
    use BinaryOperator::*;

    match operator {
        Divide => match (left.as_float(), right.as_float()) {
            (Some(_), Some(b)) if b == 0.0 => Err(division_by_zero(operator)),
            (Some(a), Some(b)) => Ok(Value::Float(a / b)),
            _ => Err(unsupported(operator, &left, &right)),
        },
        Add | Subtract | Multiply | FloorDivide | Modulo | Power | BitAnd | BitOr | BitXor
        | ShiftLeft | ShiftRight => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => int_arithmetic(operator, *a, *b),
            _ if operator.is_bitwise() => Err(unsupported(operator, &left, &right)),
            _ => match (left.as_float(), right.as_float()) {
                (Some(a), Some(b)) => float_arithmetic(operator, a, b),
                _ => Err(unsupported(operator, &left, &right)),
            },
        },
        Equals | NotEquals => {
            // NaN compares unequal to everything, itself included
            let equal = compare(&left, &right) == Some(Ordering::Equal);
            Ok(Value::Bool(equal == (operator == Equals)))
        }
        Less | LessEquals | Greater | GreaterEquals => {
            let ordering = match (&left, &right) {
                (Value::Bool(_), _) | (Value::None, _) => {
                    return Err(unsupported(operator, &left, &right))
                }
                _ => compare(&left, &right),
            };
            let result = match (operator, ordering) {
                (_, None) => false,
                (Less, Some(ordering)) => ordering == Ordering::Less,
                (LessEquals, Some(ordering)) => ordering != Ordering::Greater,
                (Greater, Some(ordering)) => ordering == Ordering::Greater,
                (_, Some(ordering)) => ordering != Ordering::Less,
            };
            Ok(Value::Bool(result))
        }
        Is => Ok(Value::Bool(identical(&left, &right))),
        IsNot => Ok(Value::Bool(!identical(&left, &right))),
        In | NotIn => match (&left, &right) {
            (Value::Str(needle), Value::Str(haystack)) => {
                Ok(Value::Bool(haystack.contains(needle.as_str()) == (operator == In)))
            }
            _ => Err(unsupported(operator, &left, &right)),
        },
        And | Or => match (&left, &right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if operator == And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(unsupported(operator, &left, &right)),
        },
    }
}

pub fn apply_prefix(operator: PrefixOperator, operand: Value) -> Result<Value, ErrorImpl> {
    match (operator, operand) {
        (PrefixOperator::Plus, value @ (Value::Int(_) | Value::Float(_))) => Ok(value),
        (PrefixOperator::Minus, Value::Int(value)) => {
            value.checked_neg().map(Value::Int).ok_or(ErrorImpl::IntegerOverflow {
                operator: operator.to_string(),
            })
        }
        (PrefixOperator::Minus, Value::Float(value)) => Ok(Value::Float(-value)),
        (PrefixOperator::BitNot, Value::Int(value)) => Ok(Value::Int(!value)),
        (PrefixOperator::Not, Value::Bool(value)) => Ok(Value::Bool(!value)),
        (_, operand) => Err(ErrorImpl::UnaryOperandType {
            operator: operator.to_string(),
            operand: operand.get_type().to_string(),
        }),
    }
}

fn eval_prefix(
    interpreter: &mut Interpreter,
    prefix: &TypedPrefixExpr,
    expression: &TypedExpr,
) -> Result<Value, Error> {
    let operand = eval_expression(interpreter, &prefix.right_expr)?;
    apply_prefix(prefix.operator, operand)
        .map_err(|error| Error::new(error, expression.get_span().start.clone()))
}

fn eval_binary(interpreter: &mut Interpreter, binary: &TypedBinaryExpr) -> Result<Value, Error> {
    let left = eval_expression(interpreter, &binary.left)?;

    // `and`/`or` only look at the right side when the left does not decide
    match (binary.operator, &left) {
        (BinaryOperator::And, Value::Bool(false)) => return Ok(left),
        (BinaryOperator::Or, Value::Bool(true)) => return Ok(left),
        _ => {}
    }

    let right = eval_expression(interpreter, &binary.right)?;

    apply_binary(binary.operator, left, right)
        .map_err(|error| Error::new(error, binary.right.get_span().start.clone()))
}

pub fn eval_expression(interpreter: &mut Interpreter, expression: &TypedExpr) -> Result<Value, Error> {
    match &expression.kind {
        TypedExprKind::Integer(value) => Ok(Value::Int(*value)),
        TypedExprKind::Float(value) => Ok(Value::Float(*value)),
        TypedExprKind::String(value) => Ok(Value::Str(value.clone())),
        TypedExprKind::Boolean(value) => Ok(Value::Bool(*value)),
        TypedExprKind::None => Ok(Value::None),
        TypedExprKind::Symbol(symbol) => interpreter
            .environment
            .get(&symbol.value)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: symbol.value.clone(),
                    },
                    expression.get_span().start.clone(),
                )
            }),
        TypedExprKind::Prefix(prefix) => eval_prefix(interpreter, prefix, expression),
        TypedExprKind::Binary(binary) => eval_binary(interpreter, binary),
    }
}
