//! Core engine types: object ids, values, the per-tick variable scope, RNG.
//!
//! These are the building blocks everything else consumes; none of them know
//! about modifiers or the tick cycle.

pub mod object;
pub mod rng;
pub mod scope;
pub mod value;

pub use object::{Axis, ObjectId, PrefabInstanceId};
pub use rng::{TickRng, TickRngState};
pub use scope::Scope;
pub use value::Value;
