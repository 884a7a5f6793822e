//! # levelscript
//!
//! A tick-driven modifier engine for level scripting in a rhythm-game
//! editor/runtime.
//!
//! Level objects carry **modifiers**: triggers (boolean predicates over
//! world state) and actions (side effects). Every tick, each object's
//! triggers combine into a single gate bit; actions fire while the gate
//! holds (continuous) or on its rising edge (one-shot).
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: The engine hardcodes no opcode. Triggers and
//!    actions are registered by name at startup; level data references them
//!    by name and binds once at load.
//!
//! 2. **Deterministic Replay**: All randomness flows through a seeded RNG,
//!    and cross-object writes defer to a post-tick queue, so a level replays
//!    identically from any editor seek.
//!
//! 3. **Faults Stay Local**: Unknown opcodes are skipped at load, malformed
//!    arguments fall back to defaults, and a failed expression aborts only
//!    that action for that tick.
//!
//! ## Architecture
//!
//! - **Persistent Store**: O(1) level snapshots via `im`, taken by the
//!   editor when seeking.
//!
//! - **Bind Once, Dispatch Cheap**: Opcode names resolve to dense ids at
//!   load; the tick loop never does string dispatch.
//!
//! ## Modules
//!
//! - `core`: Object ids, values, the tick scope, deterministic RNG
//! - `store`: Level objects and the snapshot-able level store
//! - `host`: Boundaries to the host (expression evaluator, animator)
//! - `modifier`: Modifier data model, result cache, opcode registry
//! - `resolve`: Argument slot resolution and tag-based object lookup
//! - `runtime`: Trigger gating, action dispatch, deferral, the tick driver
//! - `ops`: The built-in opcode catalogue

pub mod core;
pub mod store;
pub mod host;
pub mod modifier;
pub mod resolve;
pub mod runtime;
pub mod ops;

// Re-export commonly used types
pub use crate::core::{
    Axis, ObjectId, PrefabInstanceId,
    Scope, Value,
    TickRng, TickRngState,
};

pub use crate::store::{LevelObject, LevelStore, Rgba, VisualState};

pub use crate::host::{
    AnimHandle, AnimationTarget, Animator, Keyframe, NullAnimator,
    EvalError, ExpressionEvaluator, FnEvaluator, LiteralEvaluator,
};

pub use crate::modifier::{
    ActionFn, Category, CombinePolicy, Handler,
    Modifier, ModifierData, OpcodeId, OpcodeRegistry,
    ResultCache, TriggerFn,
};

pub use crate::resolve::{ObjectIndex, TargetSet, ValueResolver};

pub use crate::runtime::{
    ActionDispatcher, DeferredEffect, ModifierRuntime, ModifierSet,
    PostTickQueue, TickContext, TriggerGate,
};

pub use crate::ops::{builtin_registry, register_builtins};
