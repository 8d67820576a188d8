#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc, time::Instant};

use tracing::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorTip},
    interpreter::{interpreter::Interpreter, value::Value},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    type_checker::type_checker::TypeChecker,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// What a pipeline run produced.
#[derive(Debug, Default)]
pub struct RunOutput {
    /// Value of the last expression statement that ran
    pub value: Option<Value>,
    /// Token list, only kept in debug mode
    pub tokens: Option<Vec<Token>>,
    /// Parsed program, only kept in debug mode
    pub ast: Option<BlockStmt>,
}

/// Type checker and interpreter state shared by consecutive runs, so that a
/// REPL sees the names declared on earlier lines.
///
/// In debug mode the tokens and tree of the latest run are kept here as soon
/// as each stage finishes, so they are still available when a later stage
/// fails.
#[derive(Debug)]
pub struct Session {
    file: Rc<String>,
    type_checker: TypeChecker,
    interpreter: Interpreter,
    last_tokens: Option<Vec<Token>>,
    last_ast: Option<BlockStmt>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session::with_file(String::from("shell"))
    }

    /// A session whose positions are reported against `file`.
    pub fn with_file(file: String) -> Self {
        Session {
            file: Rc::new(file),
            type_checker: TypeChecker::new(),
            interpreter: Interpreter::new(),
            last_tokens: None,
            last_ast: None,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn type_checker(&self) -> &TypeChecker {
        &self.type_checker
    }

    /// Tokens of the latest debug run that got past the lexer.
    pub fn last_tokens(&self) -> Option<&[Token]> {
        self.last_tokens.as_deref()
    }

    /// Tree of the latest debug run that got past the parser.
    pub fn last_ast(&self) -> Option<&BlockStmt> {
        self.last_ast.as_ref()
    }

    /// Runs `source` through every stage. The first error aborts the run.
    pub fn run(&mut self, source: &str, debug: bool) -> Result<RunOutput, Error> {
        self.last_tokens = None;
        self.last_ast = None;

        let start = Instant::now();
        let tokens = tokenize(source.to_string(), Some(self.file.to_string()))?;
        debug!(elapsed = ?start.elapsed(), "tokenized");

        if debug {
            self.last_tokens = Some(tokens.clone());
        }

        let parse_start = Instant::now();
        let ast = parse(tokens, Rc::clone(&self.file))?;
        debug!(elapsed = ?parse_start.elapsed(), "parsed");

        if debug {
            self.last_ast = Some(ast.clone());
        }

        let type_check_start = Instant::now();
        let typed_ast = self.type_checker.type_check(&ast)?;
        debug!(elapsed = ?type_check_start.elapsed(), "type checked");

        let eval_start = Instant::now();
        let value = match self.interpreter.run(&typed_ast) {
            Ok(value) => value,
            Err(error) => {
                // Names past the failing statement were checked but never bound
                self.type_checker =
                    TypeChecker::with_environment(self.interpreter.environment.to_static());
                return Err(error);
            }
        };
        debug!(elapsed = ?eval_start.elapsed(), total = ?start.elapsed(), "evaluated");

        Ok(RunOutput {
            value,
            tokens: self.last_tokens.clone(),
            ast: self.last_ast.clone(),
        })
    }
}

/// Runs a complete program in a fresh environment.
pub fn run(source: &str, debug: bool) -> Result<RunOutput, Error> {
    Session::new().run(source, debug)
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the offset of the
/// position within that line. A position just past the end maps onto the
/// last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: on an empty last line when the source ends in a newline
    let line_start = content.rfind('\n').map(|index| index + 1).unwrap_or(0);
    Some((
        content[..line_start].matches('\n').count() + 1,
        content[line_start..].to_string(),
        pos - line_start,
    ))
}

/// Renders an error against the source it came from:
///
/// ```text
/// Error: TypeMatchError (`a` has type `float`, received `int`)
/// TypeError: cannot assign int to "a" of type float
/// -> main.spy
///   |
/// 2 | a: float = 1
///   | -----------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut rendered = String::new();

    // Writing into a String cannot fail
    let _ = match error.get_tip() {
        ErrorTip::None => writeln!(rendered, "Error: {}", error.get_error_name()),
        tip => writeln!(rendered, "Error: {} ({})", error.get_error_name(), tip),
    };
    let _ = writeln!(rendered, "{}", error);
    let _ = writeln!(rendered, "-> {}", file);

    let position = error.get_position();
    if let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) {
        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

        let _ = writeln!(rendered, "{:>padding$}", "|");
        let _ = writeln!(rendered, "{} | {}", line_string, line_text_removed.trim_end());
        let _ = writeln!(rendered, "{:>padding$} {:->arrows$}", "|", "^");
    }

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
