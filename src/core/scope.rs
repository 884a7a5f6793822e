//! Per-tick variable scope.
//!
//! The scope is the mutable map of named variables shared by every modifier
//! evaluated within one tick. It is created fresh at tick start and discarded
//! when the tick ends; nothing persists across ticks unless a modifier stores
//! it in its own result cache. Writes made by one modifier are visible to all
//! modifiers evaluated later in the same tick, in evaluation order.

use rustc_hash::FxHashMap;

/// Variable scope for one tick of modifier evaluation.
///
/// Keys are variable names, values are unparsed strings (the same raw form
/// modifier arguments use). Typed interpretation happens in the resolver.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    vars: FxHashMap<String, String>,
}

impl Scope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Check whether a variable is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Set a variable, overwriting any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable. Returns the old value if it existed.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the scope is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Build the numeric variable map handed to the expression evaluator.
    ///
    /// Only variables whose value parses as a number are included; the rest
    /// are simply absent from the math scope.
    #[must_use]
    pub fn numeric_vars(&self) -> FxHashMap<String, f64> {
        self.vars
            .iter()
            .filter_map(|(name, value)| {
                value.trim().parse::<f64>().ok().map(|v| (name.clone(), v))
            })
            .collect()
    }
}
