use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::IntType);
        map.insert("float", TokenKind::FloatType);
        map.insert("str", TokenKind::StrType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("NoneType", TokenKind::NoneTypeType);
        map.insert("var", TokenKind::Var);
        map.insert("True", TokenKind::True);
        map.insert("False", TokenKind::False);
        map.insert("None", TokenKind::NoneLiteral);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("is", TokenKind::Is);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,

    // Literals
    Integer,
    Float,
    String,
    True,
    False,
    NoneLiteral,
    Identifier,

    // Type names
    IntType,
    FloatType,
    StrType,
    BoolType,
    NoneTypeType,
    Var,

    OpenParen,
    CloseParen,

    Assignment, // =
    Colon,
    Semicolon,

    Plus,
    Dash,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,

    Tilde,
    Caret,
    Ampersand,
    Pipe,
    ShiftLeft,
    ShiftRight,

    Equals,    // ==
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Is,
    In,

    And,
    Or,
    Not,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TokenKind {
    /// Whether the token names a type in declaration position.
    pub fn is_type_name(&self) -> bool {
        matches!(
            self,
            TokenKind::IntType
                | TokenKind::FloatType
                | TokenKind::StrType
                | TokenKind::BoolType
                | TokenKind::NoneTypeType
                | TokenKind::Var
        )
    }

    /// Whether the token ends a statement.
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon | TokenKind::EOF)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer | TokenKind::Float | TokenKind::Identifier => {
                write!(f, "{} ({}) @{}", self.kind, self.value, self.span.start.0)
            }
            TokenKind::String => write!(f, "{} ({:?}) @{}", self.kind, self.value, self.span.start.0),
            _ => write!(f, "{} () @{}", self.kind, self.span.start.0),
        }
    }
}

impl Token {
    /// Text used when the token shows up in a diagnostic.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            TokenKind::Newline => String::from("end of line"),
            TokenKind::String => format!("{:?}", self.value),
            _ => self.value.clone(),
        }
    }
}
