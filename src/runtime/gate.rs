//! Trigger gating.
//!
//! Each object's triggers are evaluated every tick and combined into a
//! single gate bit. Every predicate runs even once the outcome is decided:
//! edge-detecting triggers must observe every tick to keep their caches
//! current, so there is no short-circuiting.

use crate::modifier::{Category, CombinePolicy, Handler, Modifier, OpcodeRegistry};

use super::context::TickContext;

/// Combines an object's trigger results into one gate bit.
pub struct TriggerGate;

impl TriggerGate {
    /// Evaluate all triggers in `modifiers` and combine them.
    ///
    /// The combine policy is taken from the first trigger in authoring
    /// order. An object with no triggers is gated unconditionally.
    pub fn evaluate(
        modifiers: &mut [Modifier],
        registry: &OpcodeRegistry,
        ctx: &mut TickContext,
    ) -> bool {
        let mut policy = None;
        let mut all = true;
        let mut any = false;

        for modifier in modifiers.iter_mut() {
            if modifier.category != Category::Trigger {
                continue;
            }
            let Some(Handler::Trigger(predicate)) = registry.handler(modifier.opcode) else {
                continue;
            };
            let hit = predicate(modifier, ctx);
            if policy.is_none() {
                policy = Some(modifier.combine);
            }
            all &= hit;
            any |= hit;
        }

        match policy {
            None => true,
            Some(CombinePolicy::All) => all,
            Some(CombinePolicy::Any) => any,
        }
    }
}
