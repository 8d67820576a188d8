//! Unit tests for error handling.
//!
//! This module contains tests for error types, their taxonomy and the
//! messages shown to the user.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.spy".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::LexError);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "expression".to_string(),
            found: ")".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.spy");
}

#[test]
fn test_error_kinds() {
    let cases = [
        (ErrorImpl::UnterminatedString, ErrorKind::LexError),
        (
            ErrorImpl::NumberParseError { token: "99999999999999999999".to_string() },
            ErrorKind::LexError,
        ),
        (
            ErrorImpl::UnexpectedToken {
                expected: "type name".to_string(),
                found: "x".to_string(),
            },
            ErrorKind::ParseError,
        ),
        (
            ErrorImpl::TypeMatchError {
                name: "a".to_string(),
                expected: "int".to_string(),
                received: "float".to_string(),
            },
            ErrorKind::TypeError,
        ),
        (ErrorImpl::NegativeExponent, ErrorKind::TypeError),
        (
            ErrorImpl::VariableNotDeclared { variable: "y".to_string() },
            ErrorKind::NameError,
        ),
        (
            ErrorImpl::DivisionByZero { operator: "/".to_string() },
            ErrorKind::RuntimeError,
        ),
        (ErrorImpl::NegativeShift, ErrorKind::RuntimeError),
    ];

    for (internal, kind) in cases {
        assert_eq!(Error::new(internal, at(0)).kind(), kind);
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::DivisionByZero { operator: "/".to_string() }, at(0));
    assert_eq!(error.to_string(), "RuntimeError: division by zero");

    let error = Error::new(
        ErrorImpl::TypeMatchError {
            name: "a".to_string(),
            expected: "float".to_string(),
            received: "int".to_string(),
        },
        at(0),
    );
    assert_eq!(error.to_string(), "TypeError: cannot assign int to \"a\" of type float");
}

#[test]
fn test_redeclaration_error() {
    let error = Error::new(
        ErrorImpl::RedeclarationTypeMismatch {
            variable: "a".to_string(),
            existing: "int".to_string(),
            declared: "float".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "RedeclarationTypeMismatch");
    assert_eq!(error.kind(), ErrorKind::TypeError);
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "x".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(msg) => assert!(msg.contains("x")),
        ErrorTip::None => panic!("Expected suggestion"),
    }

    let error = Error::new(ErrorImpl::NegativeShift, at(0));
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}
