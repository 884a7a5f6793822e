//! Interfaces to host collaborators.
//!
//! The engine has no renderer, physics, audio or math parser of its own; it
//! calls out through these traits. Hosts wire concrete implementations into
//! [`crate::runtime::ModifierRuntime::tick`] each tick.

pub mod animation;
pub mod eval;

pub use animation::{AnimHandle, AnimationTarget, Animator, Keyframe, NullAnimator};
pub use eval::{EvalError, ExpressionEvaluator, FnEvaluator, LiteralEvaluator};
