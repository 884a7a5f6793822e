//! Opcode registry.
//!
//! Hundreds of trigger/action kinds are addressed by name in level data.
//! Rather than dispatching on strings every tick, the registry is built once
//! at startup and binding resolves each authored modifier's name to an
//! `OpcodeId` exactly once, at load time. Handlers are plain `fn` pointers
//! tagged with their category.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::modifier::{Category, Modifier, ModifierData};
use super::cache::ResultCache;
use crate::core::ObjectId;
use crate::runtime::TickContext;

/// Trigger predicate: returns whether the condition holds this tick.
///
/// Predicates may mutate the modifier's cache (edge-detecting triggers
/// compare against it) and the tick scope.
pub type TriggerFn = fn(&mut Modifier, &mut TickContext) -> bool;

/// Action body: performs the opcode's side effect.
pub type ActionFn = fn(&mut Modifier, &mut TickContext);

/// A registered handler, tagged by category.
#[derive(Clone, Copy)]
pub enum Handler {
    Trigger(TriggerFn),
    Action(ActionFn),
}

impl Handler {
    /// The category this handler dispatches as.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Handler::Trigger(_) => Category::Trigger,
            Handler::Action(_) => Category::Action,
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Trigger(_) => f.write_str("Handler::Trigger"),
            Handler::Action(_) => f.write_str("Handler::Action"),
        }
    }
}

/// Dense id assigned to an opcode at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpcodeId(pub u32);

impl OpcodeId {
    /// Create an opcode ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for OpcodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opcode({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct RegisteredOp {
    name: String,
    handler: Handler,
}

/// Registry mapping opcode names to handlers.
///
/// Built once at startup (see [`crate::ops::register_builtins`] for the
/// built-in catalogue); hosts register their own opcodes the same way.
#[derive(Clone, Debug, Default)]
pub struct OpcodeRegistry {
    by_name: FxHashMap<String, OpcodeId>,
    ops: Vec<RegisteredOp>,
}

impl OpcodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger predicate. Returns its id.
    ///
    /// Panics if the name is already registered.
    pub fn register_trigger(&mut self, name: impl Into<String>, f: TriggerFn) -> OpcodeId {
        self.register(name.into(), Handler::Trigger(f))
    }

    /// Register an action body. Returns its id.
    ///
    /// Panics if the name is already registered.
    pub fn register_action(&mut self, name: impl Into<String>, f: ActionFn) -> OpcodeId {
        self.register(name.into(), Handler::Action(f))
    }

    fn register(&mut self, name: String, handler: Handler) -> OpcodeId {
        if self.by_name.contains_key(&name) {
            panic!("Opcode {:?} already registered", name);
        }
        let id = OpcodeId::new(self.ops.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.ops.push(RegisteredOp { name, handler });
        id
    }

    /// Resolve an opcode name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<OpcodeId> {
        self.by_name.get(name).copied()
    }

    /// Get the handler for an opcode.
    #[must_use]
    pub fn handler(&self, id: OpcodeId) -> Option<Handler> {
        self.ops.get(id.0 as usize).map(|op| op.handler)
    }

    /// Get an opcode's registered name.
    #[must_use]
    pub fn name(&self, id: OpcodeId) -> Option<&str> {
        self.ops.get(id.0 as usize).map(|op| op.name.as_str())
    }

    /// Get an opcode's category.
    #[must_use]
    pub fn category(&self, id: OpcodeId) -> Option<Category> {
        self.handler(id).map(|h| h.category())
    }

    /// Number of registered opcodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Bind authored modifier data to its opcode.
    ///
    /// Returns `None` when the opcode name is not registered; callers skip
    /// the modifier (malformed content never faults the engine).
    #[must_use]
    pub fn bind(&self, data: &ModifierData, owner: ObjectId) -> Option<Modifier> {
        let opcode = self.lookup(&data.kind)?;
        let category = self.category(opcode)?;
        Some(Modifier {
            opcode,
            kind: data.kind.clone(),
            category,
            arguments: data.arguments.clone(),
            continuous: data.continuous,
            combine: data.combine,
            cache: ResultCache::new(),
            edge_time: None,
            owner,
        })
    }
}
