//! Static type tags.
//!
//! The language has a closed set of value types. `Inferred` only appears in
//! declaration syntax (`var`), and `Never` is produced by the type checker for
//! expressions that can only ever raise, so neither is ever the type of a
//! runtime value.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Str,
    Bool,
    NoneType,
    /// Declared with `var`: the binding takes the initializer's type.
    Inferred,
    /// The type of an expression that always fails at run time.
    Never,
}

impl Type {
    /// Maps a type-name token onto its tag.
    pub fn from_token_kind(kind: TokenKind) -> Option<Type> {
        match kind {
            TokenKind::IntType => Some(Type::Int),
            TokenKind::FloatType => Some(Type::Float),
            TokenKind::StrType => Some(Type::Str),
            TokenKind::BoolType => Some(Type::Bool),
            TokenKind::NoneTypeType => Some(Type::NoneType),
            TokenKind::Var => Some(Type::Inferred),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Whether a value of type `other` may be stored in a binding of this type.
    pub fn accepts(&self, other: Type) -> bool {
        *self == other || other == Type::Never || *self == Type::Never
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Str => "str",
            Type::Bool => "bool",
            Type::NoneType => "NoneType",
            Type::Inferred => "var",
            Type::Never => "Never",
        };
        write!(f, "{}", name)
    }
}
