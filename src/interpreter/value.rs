//! Runtime values.

use std::fmt::Display;

use crate::ast::types::Type;

/// A runtime value. Its tag always matches the static type of the
/// expression that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
}

impl Value {
    pub fn get_type(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Str(_) => Type::Str,
            Value::Bool(_) => Type::Bool,
            Value::None => Type::NoneType,
        }
    }

    /// Numeric view of the value, promoting integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }
}

/// Shortest round-tripping form, switching to scientific notation outside
/// `1e-4 <= |x| < 1e16`, with a signed exponent of at least two digits:
/// `1e+16`, `1.5e-05`.
pub fn format_float_value(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }

    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", format_float_value(*value)),
            Value::Str(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", if *value { "True" } else { "False" }),
            Value::None => write!(f, "None"),
        }
    }
}
