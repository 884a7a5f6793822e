//! Expression evaluator boundary.
//!
//! Arithmetic expressions in modifier arguments are evaluated by the host's
//! math parser; the engine treats it as a pure function of the expression
//! and a numeric variable map. Evaluator failures never escape an action:
//! the dispatcher policy is to abort that action for the tick.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error from the host expression evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression could not be parsed or evaluated.
    #[error("malformed expression: {0}")]
    Malformed(String),
    /// The expression referenced a variable that is not bound.
    #[error("unknown variable: {0}")]
    UnknownVariable(String),
}

/// Host-provided expression evaluator.
///
/// `vars` carries the numeric view of the tick scope merged with the owning
/// object's bindings (position, scale, rotation, alpha).
pub trait ExpressionEvaluator {
    /// Evaluate `expr` against `vars`.
    fn evaluate(&self, expr: &str, vars: &FxHashMap<String, f64>) -> Result<f64, EvalError>;
}

/// Adapter wrapping a closure as an evaluator.
pub struct FnEvaluator<F>(pub F);

impl<F> ExpressionEvaluator for FnEvaluator<F>
where
    F: Fn(&str, &FxHashMap<String, f64>) -> Result<f64, EvalError>,
{
    fn evaluate(&self, expr: &str, vars: &FxHashMap<String, f64>) -> Result<f64, EvalError> {
        (self.0)(expr, vars)
    }
}

/// Fallback evaluator handling bare numeric literals and single variable
/// names only. Hosts without a math parser can still run levels whose
/// expressions are plain numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralEvaluator;

impl ExpressionEvaluator for LiteralEvaluator {
    fn evaluate(&self, expr: &str, vars: &FxHashMap<String, f64>) -> Result<f64, EvalError> {
        let expr = expr.trim();
        if let Ok(v) = expr.parse::<f64>() {
            return Ok(v);
        }
        if is_identifier(expr) {
            return vars
                .get(expr)
                .copied()
                .ok_or_else(|| EvalError::UnknownVariable(expr.to_string()));
        }
        Err(EvalError::Malformed(expr.to_string()))
    }
}

fn is_identifier(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
