use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The stage-level category an error belongs to.
///
/// Every error aborts the run it was raised in; the category only tells the
/// caller which stage rejected the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    TypeError,
    NameError,
    RuntimeError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::MalformedNumber { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::NumberParseError { .. } => ErrorKind::LexError,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::ParseError,
            ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::RedeclarationTypeMismatch { .. }
            | ErrorImpl::UnaryOperandType { .. }
            | ErrorImpl::BinaryOperandTypes { .. }
            | ErrorImpl::NegativeExponent => ErrorKind::TypeError,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::NameError,
            ErrorImpl::DivisionByZero { .. }
            | ErrorImpl::IntegerOverflow { .. }
            | ErrorImpl::NegativeShift
            | ErrorImpl::NegativePowerExponent => ErrorKind::RuntimeError,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::RedeclarationTypeMismatch { .. } => "RedeclarationTypeMismatch",
            ErrorImpl::UnaryOperandType { .. } => "UnaryOperandType",
            ErrorImpl::BinaryOperandTypes { .. } => "BinaryOperandTypes",
            ErrorImpl::NegativeExponent => "NegativeExponent",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::DivisionByZero { .. } => "DivisionByZero",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::NegativeShift => "NegativeShift",
            ErrorImpl::NegativePowerExponent => "NegativePowerExponent",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a decimal point must be followed by digits",
                token
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing quote"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, it is outside the range of its type",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::TypeMatchError {
                name,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` has type `{}`, received `{}`",
                name, expected, received
            )),
            ErrorImpl::RedeclarationTypeMismatch {
                variable,
                existing,
                declared,
            } => ErrorTip::Suggestion(format!(
                "Variable `{}` is already bound to `{}` and cannot become `{}`",
                variable, existing, declared
            )),
            ErrorImpl::UnaryOperandType { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to `{}`",
                operator, operand
            )),
            ErrorImpl::BinaryOperandTypes {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::NegativeExponent => ErrorTip::Suggestion(String::from(
                "Integer powers need a non-negative exponent, use a float base instead",
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::DivisionByZero { operator } => ErrorTip::Suggestion(format!(
                "The right operand of `{}` is zero",
                operator
            )),
            ErrorImpl::IntegerOverflow { operator } => ErrorTip::Suggestion(format!(
                "Result of `{}` does not fit in a 64-bit integer",
                operator
            )),
            ErrorImpl::NegativeShift => ErrorTip::None,
            ErrorImpl::NegativePowerExponent => ErrorTip::Suggestion(String::from(
                "Integer powers need a non-negative exponent, use a float base instead",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid character {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed number literal {token:?}")]
    MalformedNumber { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("cannot assign {received} to {name:?} of type {expected}")]
    TypeMatchError {
        name: String,
        expected: String,
        received: String,
    },
    #[error("variable {variable:?} is already bound to {existing}, cannot redeclare it as {declared}")]
    RedeclarationTypeMismatch {
        variable: String,
        existing: String,
        declared: String,
    },
    #[error("unsupported operand type for {operator}: {operand}")]
    UnaryOperandType { operator: String, operand: String },
    #[error("unsupported operand types for {operator}: {left} and {right}")]
    BinaryOperandTypes {
        operator: String,
        left: String,
        right: String,
    },
    #[error("integer power with a negative exponent")]
    NegativeExponent,
    #[error("name {variable:?} is not defined")]
    VariableNotDeclared { variable: String },
    #[error("division by zero")]
    DivisionByZero { operator: String },
    #[error("integer overflow in {operator}")]
    IntegerOverflow { operator: String },
    #[error("negative shift count")]
    NegativeShift,
    #[error("integer power with a negative exponent")]
    NegativePowerExponent,
}
