//! Integration tests for the end-to-end pipeline.
//!
//! These tests run source text through tokenization, parsing, type checking
//! and evaluation via the public `run` and `Session` entry points.

use tyscript::{
    errors::errors::{ErrorImpl, ErrorKind},
    interpreter::value::Value,
    run, Session,
};

fn value_of(source: &str) -> Value {
    run(source, false).unwrap().value.unwrap()
}

fn error_kind(source: &str) -> ErrorKind {
    run(source, false).unwrap_err().kind()
}

#[test]
fn test_arithmetic_precedence_program() {
    assert_eq!(value_of("10 + 5 * (6 / 2) % 3 ** 5 // 9 - 1"), Value::Float(10.0));
}

#[test]
fn test_bitwise_precedence_program() {
    assert_eq!(value_of("~4 ^ 6 & 2 | 1 << 3"), Value::Int(-7));
}

#[test]
fn test_redeclaration_with_other_type() {
    let error = run("a: int = 10\na: float = 1.0", false).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::TypeError);
    // Second statement
    assert_eq!(error.get_position().0, 12);
}

#[test]
fn test_inferred_type_is_fixed() {
    let error = run("f: var = 5\nf = 2.5", false).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::TypeError);
    assert!(matches!(error.get_internal(), ErrorImpl::TypeMatchError { .. }));
}

#[test]
fn test_division_by_zero_fails_at_run_time() {
    let error = run("x: int = 1\ny: int = x / 0", false).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::RuntimeError);
    assert_eq!(error.to_string(), "RuntimeError: division by zero");
}

#[test]
fn test_error_taxonomy() {
    assert_eq!(error_kind("x: int = 1 $ 2"), ErrorKind::LexError);
    assert_eq!(error_kind("x: float = 1."), ErrorKind::LexError);
    assert_eq!(error_kind("x: int = (1 + 2"), ErrorKind::ParseError);
    assert_eq!(error_kind("x: = 1"), ErrorKind::ParseError);
    assert_eq!(error_kind("x: int = 1.5"), ErrorKind::TypeError);
    assert_eq!(error_kind("x: int = 'one'"), ErrorKind::TypeError);
    assert_eq!(error_kind("1.5 | 2"), ErrorKind::TypeError);
    assert_eq!(error_kind("undeclared + 1"), ErrorKind::NameError);
    assert_eq!(error_kind("undeclared = 1"), ErrorKind::NameError);
    assert_eq!(error_kind("z: int = 0\n10 // z"), ErrorKind::RuntimeError);
}

#[test]
fn test_type_errors_precede_side_effects() {
    // The runtime error on line 1 never happens: checking fails first
    assert_eq!(error_kind("z: int = 0\nq: int = 1 // z\nr: str = 1"), ErrorKind::TypeError);
}

#[test]
fn test_floor_division_and_modulo_signs() {
    assert_eq!(value_of("-7 // 2"), Value::Int(-4));
    assert_eq!(value_of("7 // -2"), Value::Int(-4));
    assert_eq!(value_of("-7 % 3"), Value::Int(2));
    assert_eq!(value_of("7 % -3"), Value::Int(-2));
    assert_eq!(value_of("-7.5 // 2"), Value::Float(-4.0));
    assert_eq!(value_of("a: int = -7\nb: int = 3\n(a // b) * b + a % b == a"), Value::Bool(true));
}

#[test]
fn test_full_program() {
    let source = "\
# running total
total: int = 0
step: var = 3
total = total + step * 4    # 12
ratio: float = total / 8
shifted: int = total << 2 >> 1
name: str = 'tyscript'
done: bool = ratio > 1.0 and not (shifted == 0)
done
";
    assert_eq!(value_of(source), Value::Bool(true));
}

#[test]
fn test_debug_output() {
    let output = run("x: int = 1; x + 1", true).unwrap();

    assert_eq!(output.value, Some(Value::Int(2)));
    assert_eq!(output.tokens.as_ref().map(Vec::len), Some(10));
    assert_eq!(output.ast.unwrap().to_string(), "x: int = 1\n(x + 1)\n");

    let output = run("1", false).unwrap();
    assert!(output.tokens.is_none() && output.ast.is_none());
}

#[test]
fn test_debug_output_survives_failed_run() {
    let mut session = Session::new();

    let error = session.run("x: int = 1\ny: int = x / 0", true).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::RuntimeError);
    assert_eq!(session.last_tokens().map(<[_]>::len), Some(14));
    assert_eq!(
        session.last_ast().map(ToString::to_string).as_deref(),
        Some("x: int = 1\ny: int = (x / 0)\n")
    );

    // A type error happens after parsing, so both are still there
    assert!(session.run("x: int = 1.5", true).is_err());
    assert_eq!(session.last_tokens().map(<[_]>::len), Some(6));
    assert_eq!(
        session.last_ast().map(ToString::to_string).as_deref(),
        Some("x: int = 1.5\n")
    );

    // A parse error leaves only the tokens
    assert!(session.run("(1", true).is_err());
    assert!(session.last_tokens().is_some());
    assert!(session.last_ast().is_none());

    // Nothing is kept outside debug mode
    assert!(session.run("1 // 0", false).is_err());
    assert!(session.last_tokens().is_none() && session.last_ast().is_none());
}

#[test]
fn test_identity_and_membership_operators() {
    assert_eq!(value_of("n: NoneType = None\nn is None"), Value::Bool(true));
    assert_eq!(value_of("s: str = 'abc'; s is not None"), Value::Bool(true));
    assert_eq!(value_of("'a' in 'abc' and 'z' not in 'abc'"), Value::Bool(true));
    assert_eq!(value_of("1 | 2 == 3 is True"), Value::Bool(true));

    assert_eq!(error_kind("1 is 'a'"), ErrorKind::TypeError);
    assert_eq!(error_kind("1 in 'abc'"), ErrorKind::TypeError);
    assert_eq!(error_kind("'a' not 'abc'"), ErrorKind::ParseError);
}

#[test]
fn test_session_keeps_bindings() {
    let mut session = Session::new();

    session.run("a: int = 40", false).unwrap();
    let output = session.run("a + 2", false).unwrap();
    assert_eq!(output.value, Some(Value::Int(42)));

    // Still an int binding
    assert_eq!(session.run("a = 'x'", false).unwrap_err().kind(), ErrorKind::TypeError);
}

#[test]
fn test_session_recovers_from_runtime_error() {
    let mut session = Session::new();

    let error = session.run("a: int = 1; b: int = a // 0; c: int = 3", false).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::RuntimeError);

    // `a` ran, `b` and `c` never did
    assert!(session.interpreter().environment.get("a").is_some());
    assert!(session.interpreter().environment.get("b").is_none());
    assert!(session.type_checker().environment.get_variable("b").is_none());
    assert_eq!(session.run("a", false).unwrap().value, Some(Value::Int(1)));
    assert_eq!(session.run("c", false).unwrap_err().kind(), ErrorKind::NameError);
    // `c` may now be declared with another type
    assert!(session.run("c: str = 'three'", false).is_ok());
}

#[test]
fn test_pretty_print_round_trip() {
    let sources = [
        "10 + 5 * (6 / 2) % 3 ** 5 // 9 - 1",
        "~4 ^ 6 & 2 | 1 << 3",
        "x: float = -(2.5f ** 2) // 1.0",
        "s: str = 'tab\\there'; t: var = s == \"x\"",
        "s: str = 'a'; s not in 'abc' or s is not None and not s in s",
    ];

    for source in sources {
        let first = run(source, true).unwrap().ast.unwrap().to_string();
        let second = run(&first, true).unwrap().ast.unwrap().to_string();
        assert_eq!(first, second);
    }
}
