//! Tick-driven evaluation: gating, dispatch, deferral, and the driver.
//!
//! - [`TickContext`]: per-evaluation view handed to every handler
//! - [`TriggerGate`]: combines an object's trigger results into a gate bit
//! - [`ActionDispatcher`]: fires actions against the gate and its edges
//! - [`PostTickQueue`]: deferred effects, drained once per tick
//! - [`ModifierRuntime`]: owns the sets and drives the whole tick

mod context;
mod dispatch;
mod gate;
mod queue;
#[allow(clippy::module_inception)]
mod runtime;

pub use context::TickContext;
pub use dispatch::ActionDispatcher;
pub use gate::TriggerGate;
pub use queue::{DeferredEffect, PostTickQueue};
pub use runtime::{ModifierRuntime, ModifierSet};
