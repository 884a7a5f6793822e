//! The modifier data model and opcode registry.
//!
//! - [`ModifierData`]: a modifier as authored in level data (opcode name,
//!   raw positional arguments, continuous flag, combine policy)
//! - [`Modifier`]: a bound instance with its private runtime state
//! - [`ResultCache`]: the per-instance memoization slot
//! - [`OpcodeRegistry`]: name → handler binding, built once at startup
//!
//! The catalogue of concrete opcodes is content plugged into the engine;
//! see [`crate::ops`] for the built-in sample.

mod cache;
#[allow(clippy::module_inception)]
mod modifier;
mod registry;

pub use cache::ResultCache;
pub use modifier::{Category, CombinePolicy, Modifier, ModifierData};
pub use registry::{ActionFn, Handler, OpcodeId, OpcodeRegistry, TriggerFn};
