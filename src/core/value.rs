//! Typed values produced by argument resolution.
//!
//! Modifier arguments are authored as raw strings with per-opcode semantics.
//! `Value` is the typed view the resolver hands to opcode bodies that want
//! dynamic typing; most opcodes use the typed convenience accessors on
//! `ValueResolver` instead.

use serde::{Deserialize, Serialize};

/// A resolved argument value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Text value (tag names, variable names, easing names).
    Str(String),
    /// Floating-point value (positions, times, colors).
    Float(f32),
    /// Integer value (counters, indices).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
}

impl Value {
    /// Get as string slice if this is a Str value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view: Float or Int widened to f64.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(f64::from(*v)),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Float(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_are_strict() {
        let v = Value::Float(2.5);
        assert_eq!(v.as_float(), Some(2.5));
        assert_eq!(v.as_int(), None);
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_bool(), None);
    }

    #[test]
    fn test_as_number_widens() {
        assert_eq!(Value::Int(3).as_number(), Some(3.0));
        assert_eq!(Value::Float(1.5).as_number(), Some(1.5));
        assert_eq!(Value::Bool(true).as_number(), None);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from("tag"), Value::Str("tag".to_string()));
        assert_eq!(Value::from(4i64), Value::Int(4));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Str("x".into()).to_string(), "x");
        assert_eq!(Value::Float(3.5).to_string(), "3.5");
        assert_eq!(Value::Int(-2).to_string(), "-2");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
