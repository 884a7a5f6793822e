//! Action dispatch.
//!
//! Once the gate bit for an object is known, the dispatcher decides which of
//! its actions fire this tick and maintains each modifier's edge timer:
//!
//! - continuous actions fire every tick the gate holds;
//! - one-shot actions fire only on the rising edge;
//! - `edge_time` is stamped on the rising edge and cleared on the falling
//!   edge, for every modifier on the object (timed actions read it as their
//!   animation baseline).

use crate::modifier::{Category, Handler, Modifier, OpcodeRegistry};

use super::context::TickContext;

/// Fires an object's actions according to gate state and edges.
pub struct ActionDispatcher;

impl ActionDispatcher {
    /// Update edge timers and run the actions due this tick.
    pub fn run(
        modifiers: &mut [Modifier],
        gated: bool,
        rising: bool,
        falling: bool,
        registry: &OpcodeRegistry,
        ctx: &mut TickContext,
    ) {
        for modifier in modifiers.iter_mut() {
            if rising {
                modifier.edge_time = Some(ctx.time);
            } else if falling {
                modifier.edge_time = None;
            }
        }

        for modifier in modifiers.iter_mut() {
            if modifier.category != Category::Action {
                continue;
            }
            let due = if modifier.continuous { gated } else { rising };
            if !due {
                continue;
            }
            let Some(Handler::Action(body)) = registry.handler(modifier.opcode) else {
                continue;
            };
            body(modifier, ctx);
        }
    }
}
