//! Runtime value representation

use crate::token::format_real;
use serde::{Serialize, Serializer};
use std::fmt;

/// A value produced by evaluating an expression
///
/// Derived `PartialEq` is structural (`Integer(1) != Real(1.0)`); the
/// language's `==` goes through [`Value::equals`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Name of this value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
        }
    }

    /// `0`, `0.0`, `''` and `false`
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Integer(n) => *n == 0,
            Value::Real(r) => *r == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Bool(b) => !*b,
        }
    }

    /// Numeric view of the value, promoting integers to real
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            Value::Str(_) | Value::Bool(_) => None,
        }
    }

    /// Language-level equality
    ///
    /// Integers and reals compare numerically across kinds. Values of
    /// different families are never equal.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (a, b) => match (a.as_real(), b.as_real()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(r) => f.write_str(&format_real(*r)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Serializes as the bare JSON scalar. JSON has no infinities or NaN, so
/// non-finite reals are written as their display text (`"inf"`, `"NaN"`).
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Real(r) if r.is_finite() => serializer.serialize_f64(*r),
            Value::Real(r) => serializer.serialize_str(&format_real(*r)),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
