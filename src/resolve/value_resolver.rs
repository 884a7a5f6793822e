//! Argument slot resolution.
//!
//! Opcode bodies never parse their own arguments; they ask the resolver for
//! a slot as a given type. Resolution order:
//!
//! 1. if the raw argument names a scope variable, substitute its value;
//! 2. for math slots, hand the (substituted) text to the host expression
//!    evaluator with the numeric scope plus the owner's bindings;
//! 3. otherwise parse as the requested primitive, falling back to the
//!    supplied default on failure. Parse failures never propagate.

use rustc_hash::FxHashMap;

use crate::core::{Scope, Value};
use crate::host::eval::{EvalError, ExpressionEvaluator};
use crate::modifier::Modifier;
use crate::store::LevelObject;

/// Resolves modifier argument slots into typed values.
pub struct ValueResolver;

impl ValueResolver {
    /// Raw slot text with variable substitution applied.
    ///
    /// Returns `None` only when the slot was never authored.
    #[must_use]
    pub fn raw<'a>(modifier: &'a Modifier, slot: usize, scope: &'a Scope) -> Option<&'a str> {
        let arg = modifier.arg(slot)?;
        Some(scope.get(arg).unwrap_or(arg))
    }

    /// Resolve a slot as a string.
    #[must_use]
    pub fn string(modifier: &Modifier, slot: usize, scope: &Scope, default: &str) -> String {
        Self::raw(modifier, slot, scope).unwrap_or(default).to_string()
    }

    /// Resolve a slot as a float.
    #[must_use]
    pub fn float(modifier: &Modifier, slot: usize, scope: &Scope, default: f32) -> f32 {
        Self::raw(modifier, slot, scope)
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .unwrap_or(default)
    }

    /// Resolve a slot as an integer.
    #[must_use]
    pub fn int(modifier: &Modifier, slot: usize, scope: &Scope, default: i64) -> i64 {
        Self::raw(modifier, slot, scope)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(default)
    }

    /// Resolve a slot as a boolean ("true"/"false"/"1"/"0", case-insensitive).
    #[must_use]
    pub fn boolean(modifier: &Modifier, slot: usize, scope: &Scope, default: bool) -> bool {
        Self::raw(modifier, slot, scope)
            .and_then(parse_bool)
            .unwrap_or(default)
    }

    /// Best-effort typed view of a slot: bool, then int, then float, else
    /// string. A missing slot resolves to the empty string.
    #[must_use]
    pub fn value(modifier: &Modifier, slot: usize, scope: &Scope) -> Value {
        let Some(raw) = Self::raw(modifier, slot, scope) else {
            return Value::Str(String::new());
        };
        let trimmed = raw.trim();
        if let Some(b) = parse_strict_bool(trimmed) {
            return Value::Bool(b);
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f32>() {
            return Value::Float(f);
        }
        Value::Str(raw.to_string())
    }

    /// Resolve a math slot through the host evaluator.
    ///
    /// The numeric variable map is the tick scope's numeric view merged with
    /// the owner's bindings. Errors are returned for the caller to catch at
    /// the action boundary (abort the action for this tick).
    pub fn math(
        modifier: &Modifier,
        slot: usize,
        scope: &Scope,
        owner: Option<&LevelObject>,
        evaluator: &dyn ExpressionEvaluator,
    ) -> Result<f64, EvalError> {
        let expr = Self::raw(modifier, slot, scope).unwrap_or("0");
        let mut vars: FxHashMap<String, f64> = scope.numeric_vars();
        if let Some(owner) = owner {
            for (name, value) in owner.numeric_bindings() {
                vars.insert(name.to_string(), value);
            }
        }
        evaluator.evaluate(expr, &vars)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" => Some(true),
        "0" => Some(false),
        other => parse_strict_bool(other),
    }
}

fn parse_strict_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
