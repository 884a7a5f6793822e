//! The modifier data model.
//!
//! A modifier is one configured trigger or action attached to a level
//! object. Level data stores [`ModifierData`] (opcode name plus raw
//! positional arguments); loading binds it against the opcode registry into
//! a [`Modifier`], which additionally carries the per-instance runtime
//! state: the result cache and the edge timer.

use serde::{Deserialize, Serialize};

use super::cache::ResultCache;
use super::registry::OpcodeId;
use crate::core::ObjectId;

/// Whether an opcode gates (trigger) or mutates (action).
///
/// Fixed at registration; a modifier inherits it from its opcode when bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Evaluates a boolean predicate each tick.
    Trigger,
    /// Performs a side effect when its object is gated.
    Action,
}

/// How an object's trigger results combine into one gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombinePolicy {
    /// Every trigger must hold (logical AND).
    #[default]
    All,
    /// At least one trigger must hold (logical OR).
    Any,
}

/// A modifier as authored in level data.
///
/// Arguments are positional, unparsed strings; their semantics belong to the
/// opcode. This is the serialized form; binding it against a registry
/// produces a runtime [`Modifier`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModifierData {
    /// Opcode name.
    pub kind: String,

    /// Positional argument slots.
    #[serde(default)]
    pub arguments: Vec<String>,

    /// If true, the action re-runs every tick the gate holds; if false it
    /// runs once per rising edge. Ignored for triggers.
    #[serde(default)]
    pub continuous: bool,

    /// Group combination policy contributed by this modifier.
    #[serde(default)]
    pub combine: CombinePolicy,
}

impl ModifierData {
    /// Create modifier data for an opcode.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            arguments: Vec::new(),
            continuous: false,
            combine: CombinePolicy::default(),
        }
    }

    /// Append an argument (builder pattern).
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Append several arguments (builder pattern).
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }

    /// Mark as continuous (builder pattern).
    #[must_use]
    pub fn continuous(mut self) -> Self {
        self.continuous = true;
        self
    }

    /// Set the combination policy (builder pattern).
    #[must_use]
    pub fn with_combine(mut self, combine: CombinePolicy) -> Self {
        self.combine = combine;
        self
    }
}

/// A bound modifier instance attached to a level object.
///
/// Created at load/spawn by [`crate::modifier::OpcodeRegistry::bind`] and
/// destroyed with its owner. `cache` and `edge_time` are private per-instance
/// state: no other modifier or tick reads them.
#[derive(Debug)]
pub struct Modifier {
    /// Registry id the opcode name resolved to at bind time.
    pub opcode: OpcodeId,
    /// Opcode name as authored (kept for diagnostics).
    pub kind: String,
    /// Trigger or action, inherited from the opcode.
    pub category: Category,
    /// Positional argument slots, unparsed.
    pub arguments: Vec<String>,
    /// Re-run every gated tick vs. once per rising edge.
    pub continuous: bool,
    /// Group combination policy contributed by this modifier.
    pub combine: CombinePolicy,
    /// Memoized setup state, private to this instance.
    pub cache: ResultCache,
    /// Tick time at which the gate last rose; cleared on the falling edge.
    pub edge_time: Option<f32>,
    /// Owning object (weak back-reference: lookup only).
    pub owner: ObjectId,
}

impl Modifier {
    /// Raw argument at a slot, if authored.
    #[must_use]
    pub fn arg(&self, slot: usize) -> Option<&str> {
        self.arguments.get(slot).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder() {
        let data = ModifierData::new("setPosition")
            .with_arg("x")
            .with_args(["positionX + 1"])
            .continuous()
            .with_combine(CombinePolicy::Any);

        assert_eq!(data.kind, "setPosition");
        assert_eq!(data.arguments, vec!["x", "positionX + 1"]);
        assert!(data.continuous);
        assert_eq!(data.combine, CombinePolicy::Any);
    }

    #[test]
    fn test_data_defaults() {
        let data = ModifierData::new("timeGreater");
        assert!(!data.continuous);
        assert_eq!(data.combine, CombinePolicy::All);
        assert!(data.arguments.is_empty());
    }

    #[test]
    fn test_deserialize_level_data() {
        // defaults fill in omitted fields, as authored level data relies on
        let json = r#"[
            {"kind": "playerDistanceLesser", "arguments": ["5"]},
            {"kind": "spawnPrefab", "arguments": ["burst"], "continuous": false},
            {"kind": "setColor", "arguments": ["1", "0", "0", "1"], "continuous": true}
        ]"#;

        let list: Vec<ModifierData> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].kind, "playerDistanceLesser");
        assert_eq!(list[0].combine, CombinePolicy::All);
        assert!(list[2].continuous);
    }
}
