//! The tick driver.
//!
//! `ModifierRuntime` owns the opcode registry, the per-object modifier sets,
//! and the RNG, and advances the whole level one tick at a time:
//!
//! 1. a fresh scope and deferred queue are created for the tick;
//! 2. objects are visited in attach order; for each live object its triggers
//!    are gated and its actions dispatched against the edge state;
//! 3. the deferred queue drains into the store.
//!
//! The store itself lives outside the runtime (the editor snapshots it for
//! seek); the runtime holds only script-side state.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::core::{ObjectId, Scope, TickRng, TickRngState};
use crate::host::animation::Animator;
use crate::host::eval::ExpressionEvaluator;
use crate::modifier::{Modifier, ModifierData, OpcodeRegistry};
use crate::store::LevelStore;

use super::context::TickContext;
use super::dispatch::ActionDispatcher;
use super::gate::TriggerGate;
use super::queue::PostTickQueue;

/// All modifiers attached to one object, plus its gate state.
#[derive(Debug, Default)]
pub struct ModifierSet {
    /// Modifiers in authoring order.
    pub modifiers: Vec<Modifier>,
    /// Whether the gate held on the previous tick (edge detection).
    was_gated: bool,
}

impl ModifierSet {
    /// Whether the gate held on the most recent tick.
    #[must_use]
    pub fn was_gated(&self) -> bool {
        self.was_gated
    }
}

/// Drives modifier evaluation for a level.
pub struct ModifierRuntime {
    registry: OpcodeRegistry,
    sets: FxHashMap<ObjectId, ModifierSet>,
    order: Vec<ObjectId>,
    rng: TickRng,
}

impl ModifierRuntime {
    /// Create a runtime over a registry, seeding the RNG.
    #[must_use]
    pub fn new(registry: OpcodeRegistry, seed: u64) -> Self {
        Self {
            registry,
            sets: FxHashMap::default(),
            order: Vec::new(),
            rng: TickRng::new(seed),
        }
    }

    /// The opcode registry this runtime binds against.
    #[must_use]
    pub fn registry(&self) -> &OpcodeRegistry {
        &self.registry
    }

    /// Bind authored modifier data and attach it to an object.
    ///
    /// Unknown opcodes are skipped with a warning; the rest of the object's
    /// modifiers still run.
    pub fn attach(&mut self, object: ObjectId, data: &ModifierData) {
        let Some(modifier) = self.registry.bind(data, object) else {
            log::warn!("skipping unknown opcode {:?} on {}", data.kind, object);
            return;
        };
        let set = match self.sets.entry(object) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(object);
                entry.insert(ModifierSet::default())
            }
        };
        set.modifiers.push(modifier);
    }

    /// Attach several modifiers to an object in authoring order.
    pub fn attach_all<'a>(
        &mut self,
        object: ObjectId,
        data: impl IntoIterator<Item = &'a ModifierData>,
    ) {
        for d in data {
            self.attach(object, d);
        }
    }

    /// Remove an object's modifiers entirely.
    pub fn detach(&mut self, object: ObjectId) {
        if self.sets.remove(&object).is_some() {
            self.order.retain(|id| *id != object);
        }
    }

    /// An object's modifier set, if any modifiers are attached.
    #[must_use]
    pub fn set(&self, object: ObjectId) -> Option<&ModifierSet> {
        self.sets.get(&object)
    }

    /// Number of objects with attached modifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether any modifiers are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// RNG state for checkpointing alongside a store snapshot.
    #[must_use]
    pub fn rng_state(&self) -> TickRngState {
        self.rng.state()
    }

    /// Restore the RNG from a checkpoint.
    pub fn restore_rng(&mut self, state: &TickRngState) {
        self.rng = TickRng::from_state(state);
    }

    /// Advance the level one tick at time `time` (seconds).
    pub fn tick(
        &mut self,
        store: &mut LevelStore,
        animator: &mut dyn Animator,
        evaluator: &dyn ExpressionEvaluator,
        time: f32,
    ) {
        let mut scope = Scope::new();
        let mut queue = PostTickQueue::new();

        for i in 0..self.order.len() {
            let object = self.order[i];
            if !store.is_alive(object) {
                continue;
            }
            let Some(set) = self.sets.get_mut(&object) else {
                continue;
            };

            let mut ctx = TickContext {
                store: &mut *store,
                scope: &mut scope,
                queue: &mut queue,
                animator: &mut *animator,
                evaluator,
                rng: &mut self.rng,
                time,
                owner: object,
            };

            let gated = TriggerGate::evaluate(&mut set.modifiers, &self.registry, &mut ctx);
            let rising = gated && !set.was_gated;
            let falling = !gated && set.was_gated;
            ActionDispatcher::run(
                &mut set.modifiers,
                gated,
                rising,
                falling,
                &self.registry,
                &mut ctx,
            );
            set.was_gated = gated;
        }

        queue.drain(store);
    }

    /// Reset all script-side state for a replay or editor seek.
    ///
    /// Clears every modifier's cache and edge timer, re-arms all gates, and
    /// rewinds the RNG to its original seed. The caller restores the store
    /// from its own snapshot.
    pub fn reset(&mut self) {
        for set in self.sets.values_mut() {
            set.was_gated = false;
            for modifier in &mut set.modifiers {
                modifier.cache.clear();
                modifier.edge_time = None;
            }
        }
        self.rng = TickRng::new(self.rng.state().seed);
    }
}
