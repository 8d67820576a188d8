//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Variable declarations and assignments
//! - Operator precedence and associativity
//! - Grouping and prefix operators
//! - Statement separators
//! - Error reporting

use std::rc::Rc;

use crate::{
    ast::{ast::Stmt, statements::BlockStmt, types::Type},
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<BlockStmt, crate::errors::errors::Error> {
    let tokens = tokenize(source.to_string(), Some("test.spy".to_string()))?;
    parse(tokens, Rc::new("test.spy".to_string()))
}

/// Pretty-prints the single expression statement in `source`.
fn printed(source: &str) -> String {
    let block = parse_source(source).unwrap();
    assert_eq!(block.body.len(), 1);
    block.body[0].to_string()
}

#[test]
fn test_parse_variable_declaration() {
    let block = parse_source("x: int = 42").unwrap();

    match &block.body[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.identifier, "x");
            assert_eq!(decl.explicit_type, Type::Int);
            assert_eq!(decl.assigned_value.to_string(), "42");
        }
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_inferred_declaration() {
    let block = parse_source("f: var = 2.5f").unwrap();

    match &block.body[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.explicit_type, Type::Inferred);
            assert_eq!(decl.assigned_value.to_string(), "2.5");
        }
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_assignment() {
    let block = parse_source("x = x + 1").unwrap();

    match &block.body[0] {
        Stmt::Assignment(assign) => {
            assert_eq!(assign.identifier, "x");
            assert_eq!(assign.value.to_string(), "(x + 1)");
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_statement_separators() {
    let block = parse_source("a: int = 1; b: int = 2\n\n;c: int = 3\n").unwrap();
    assert_eq!(block.body.len(), 3);
    assert_eq!(block.body[2].to_string(), "c: int = 3");
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_source("").unwrap().body.is_empty());
    assert!(parse_source("\n;\n# only a comment\n").unwrap().body.is_empty());
}

#[test]
fn test_parse_multiplicative_binds_tighter() {
    assert_eq!(printed("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(printed("1 * 2 + 3"), "((1 * 2) + 3)");
}

#[test]
fn test_parse_left_associativity() {
    assert_eq!(printed("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(printed("8 // 4 % 3 / 2"), "(((8 // 4) % 3) / 2)");
}

#[test]
fn test_parse_power_right_associative() {
    assert_eq!(printed("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
    assert_eq!(printed("2 ** 3 * 4"), "((2 ** 3) * 4)");
}

#[test]
fn test_parse_unary_binds_tighter_than_power() {
    assert_eq!(printed("-2 ** 2"), "((-2) ** 2)");
    assert_eq!(printed("2 ** -1"), "(2 ** (-1))");
    assert_eq!(printed("~4 ^ 6"), "((~4) ^ 6)");
    assert_eq!(printed("- - 3"), "(-(-3))");
}

#[test]
fn test_parse_bitwise_ladder() {
    assert_eq!(printed("~4 ^ 6 & 2 | 1 << 3"), "(((~4) ^ (6 & 2)) | (1 << 3))");
    assert_eq!(printed("1 + 2 << 3"), "((1 + 2) << 3)");
}

#[test]
fn test_parse_scenario_arithmetic() {
    assert_eq!(
        printed("10 + 5 * (6 / 2) % 3 ** 5 // 9 - 1"),
        "((10 + (((5 * (6 / 2)) % (3 ** 5)) // 9)) - 1)"
    );
}

#[test]
fn test_parse_comparison_and_logic() {
    assert_eq!(printed("a < b and b <= c"), "((a < b) and (b <= c))");
    assert_eq!(printed("a or b and c"), "(a or (b and c))");
    assert_eq!(printed("not a == b"), "(not (a == b))");
    assert_eq!(printed("not a and b"), "((not a) and b)");
    assert_eq!(printed("1 | 2 == 3"), "((1 | 2) == 3)");
}

#[test]
fn test_parse_identity_and_membership() {
    assert_eq!(printed("a is None"), "(a is None)");
    assert_eq!(printed("a is not None"), "(a is not None)");
    assert_eq!(printed("a in b"), "(a in b)");
    assert_eq!(printed("a not in b or c"), "((a not in b) or c)");
    assert_eq!(printed("not a in b"), "(not (a in b))");
    assert_eq!(printed("a == b is c"), "((a == b) is c)");
    assert_eq!(printed("a | b in c"), "((a | b) in c)");
    assert_eq!(printed("a and not b"), "(a and (not b))");
}

#[test]
fn test_parse_infix_not_requires_in() {
    let error = parse_source("a not b").unwrap_err();

    assert_eq!(
        error.get_internal(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("`in`"),
            found: String::from("b"),
        }
    );
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_parse_grouping() {
    assert_eq!(printed("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(printed("((x))"), "x");
}

#[test]
fn test_parse_literals() {
    assert_eq!(printed("True"), "True");
    assert_eq!(printed("None"), "None");
    assert_eq!(printed("'it\\'s'"), "\"it's\"");
    assert_eq!(printed("1f"), "1.0");
}

#[test]
fn test_parse_round_trip() {
    let sources = [
        "10 + 5 * (6 / 2) % 3 ** 5 // 9 - 1",
        "~4 ^ 6 & 2 | 1 << 3",
        "-2 ** -(3 + 1)",
        "s: str = \"line\\n\\ttab \\\"quoted\\\"\"",
        "x: float = 1.5 * 2.0f",
        "not (a < b) or c != None",
        "v: var = +1 - -2",
    ];

    for source in sources {
        let first = parse_source(source).unwrap().to_string();
        let second = parse_source(&first).unwrap().to_string();
        assert_eq!(first, second, "round trip of {}", source);
    }
}

#[test]
fn test_parse_missing_close_paren() {
    let error = parse_source("x: int = (1 + 2").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ParseError);
    assert_eq!(
        error.get_internal(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("`)`"),
            found: String::from("end of input"),
        }
    );
}

#[test]
fn test_parse_missing_type_name() {
    let error = parse_source("x: integer = 1").unwrap_err();

    assert_eq!(
        error.get_internal(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("type name"),
            found: String::from("integer"),
        }
    );
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_parse_missing_operand() {
    let error = parse_source("1 +").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ParseError);
    assert_eq!(
        error.get_internal(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("expression"),
            found: String::from("end of input"),
        }
    );
}

#[test]
fn test_parse_two_expressions_without_separator() {
    let error = parse_source("1 2").unwrap_err();

    assert_eq!(
        error.get_internal(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("end of statement"),
            found: String::from("2"),
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_type_name_in_expression() {
    let error = parse_source("int + 1").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ParseError);
}

#[test]
fn test_parse_integer_out_of_range() {
    let error = parse_source("99999999999999999999").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LexError);
    assert_eq!(
        error.get_internal(),
        &ErrorImpl::NumberParseError { token: String::from("99999999999999999999") }
    );
}

#[test]
fn test_parse_float_out_of_range() {
    let source = format!("x: float = 1{}.0", "0".repeat(400));
    let error = parse_source(&source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LexError);
    assert!(matches!(error.get_internal(), ErrorImpl::NumberParseError { .. }));
    assert_eq!(error.get_position().0, 11);

    // A large but finite literal still prints back into a float literal
    let large = format!("1{}.0", "0".repeat(300));
    let reprinted = printed(&large);
    assert!(reprinted.ends_with(".0"));
    assert_eq!(printed(&reprinted), reprinted);
}
