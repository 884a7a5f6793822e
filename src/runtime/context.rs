//! Per-evaluation tick context.
//!
//! A `TickContext` is assembled fresh for each object the runtime visits and
//! handed to every trigger/action handler. It bundles mutable access to the
//! world with the per-tick services: scope, deferred queue, animator,
//! expression evaluator, RNG, the current tick time, and the owning object.

use crate::core::{ObjectId, Scope, TickRng};
use crate::host::animation::Animator;
use crate::host::eval::{EvalError, ExpressionEvaluator};
use crate::modifier::Modifier;
use crate::resolve::ValueResolver;
use crate::store::{LevelObject, LevelStore};

use super::queue::PostTickQueue;

/// Everything a handler can touch during one evaluation.
pub struct TickContext<'a> {
    /// The level store (synchronous writes land here; cross-object writes go
    /// through `queue`).
    pub store: &'a mut LevelStore,
    /// Tick-wide variable scope, shared by all objects this tick.
    pub scope: &'a mut Scope,
    /// Deferred effects, drained after the evaluation pass.
    pub queue: &'a mut PostTickQueue,
    /// Host animation system.
    pub animator: &'a mut dyn Animator,
    /// Host expression evaluator for math slots.
    pub evaluator: &'a dyn ExpressionEvaluator,
    /// Deterministic RNG stream.
    pub rng: &'a mut TickRng,
    /// Current tick time in seconds.
    pub time: f32,
    /// The object whose modifiers are being evaluated.
    pub owner: ObjectId,
}

impl TickContext<'_> {
    /// The owning object, if still present in the store.
    #[must_use]
    pub fn owner_object(&self) -> Option<&LevelObject> {
        self.store.get(self.owner)
    }

    /// Mutable access to the owning object.
    #[must_use]
    pub fn owner_mut(&mut self) -> Option<&mut LevelObject> {
        self.store.get_mut(self.owner)
    }

    /// Evaluate a math slot against the tick scope and the owner's numeric
    /// bindings.
    pub fn eval_math(&self, modifier: &Modifier, slot: usize) -> Result<f64, EvalError> {
        ValueResolver::math(
            modifier,
            slot,
            self.scope,
            self.store.get(self.owner),
            self.evaluator,
        )
    }

    /// Distance from the owner to the player, along all three axes.
    #[must_use]
    pub fn player_distance(&self) -> Option<f32> {
        let owner = self.owner_object()?;
        let p = self.store.player_position();
        let d = [
            owner.visual.position[0] - p[0],
            owner.visual.position[1] - p[1],
            owner.visual.position[2] - p[2],
        ];
        Some((d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt())
    }
}
