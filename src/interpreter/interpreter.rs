//! Main interpreter module.
//!
//! This module contains the core Interpreter structure: the runtime
//! environment plus the entry point that executes a typed program
//! statement by statement.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::types::Type,
    errors::errors::Error,
    type_checker::{type_checker, typed_ast::TypedBlockStmt},
};

use super::{stmt::eval_statement, value::Value};

/// A runtime binding: the type the name was declared with and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub ty: Type,
    pub value: Value,
}

/// Name to binding. Scoping is flat: the language has no blocks.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Inserts or overwrites a binding.
    pub fn declare(&mut self, name: String, binding: Binding) {
        self.bindings.insert(name, binding);
    }

    /// Overwrites the value of an existing binding. Returns false when the
    /// name is unbound.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.bindings.get_mut(name) {
            Some(binding) => {
                binding.value = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The static view of these bindings, for a type checker that must agree
    /// with what actually ran.
    pub fn to_static(&self) -> type_checker::Environment {
        self.bindings
            .iter()
            .map(|(name, binding)| (name.clone(), binding.ty))
            .collect()
    }
}

/// The structure that holds the state of evaluation.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Bindings created by every program run so far
    pub environment: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            environment: Environment::new(),
        }
    }

    /// Executes the statements in source order and returns the value of the
    /// last expression statement, if any ran.
    pub fn run(&mut self, ast: &TypedBlockStmt) -> Result<Option<Value>, Error> {
        let mut last_value = None;

        for statement in ast.iter() {
            if let Some(value) = eval_statement(self, statement)? {
                last_value = Some(value);
            }
        }

        debug!(bindings = self.environment.len(), "evaluated program");

        Ok(last_value)
    }
}
