//! Type annotation parsing.
//!
//! The language only has the built-in scalar type names plus `var`, so a
//! type annotation is a single token.

use crate::{ast::types::Type, errors::errors::Error};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match Type::from_token_kind(parser.current_token_kind()) {
        Some(ty) => {
            parser.advance();
            Ok(ty)
        }
        None => Err(parser.unexpected("type name")),
    }
}
