//! Animation subsystem boundary.
//!
//! Non-continuous actions that animate over audio time hand a keyframe track
//! to the host's tweening subsystem and return immediately; the tween then
//! advances independently of the modifier tick. Targets are a tagged enum
//! rather than raw setter closures, so hosts can route them without
//! capturing engine state.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, ObjectId};

/// Handle to a running tween, used to cancel/replace it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimHandle(pub u64);

/// One keyframe in a track. Times are in seconds from track start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    /// Easing name resolved by the host's easing registry.
    pub ease: String,
}

impl Keyframe {
    /// Create a keyframe with linear easing.
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            ease: "linear".to_string(),
        }
    }

    /// Set the easing name (builder pattern).
    #[must_use]
    pub fn with_ease(mut self, ease: impl Into<String>) -> Self {
        self.ease = ease.into();
        self
    }
}

/// What a tween writes to as it advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationTarget {
    /// One axis of an object's position.
    Position { object: ObjectId, axis: Axis },
    /// One axis of an object's scale.
    Scale { object: ObjectId, axis: Axis },
    /// An object's rotation.
    Rotation { object: ObjectId },
}

/// Host tweening subsystem.
///
/// Implementations must treat object handles as potentially stale: a tween
/// whose target object has been destroyed simply stops writing.
pub trait Animator {
    /// Start a tween over `track` writing to `target`. Returns a handle.
    fn play(&mut self, track: Vec<Keyframe>, target: AnimationTarget) -> AnimHandle;

    /// Stop a tween. Unknown handles are a no-op.
    fn remove(&mut self, handle: AnimHandle);
}

/// Animator that discards every track. Useful for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct NullAnimator {
    next_handle: u64,
}

impl NullAnimator {
    /// Create a null animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Animator for NullAnimator {
    fn play(&mut self, _track: Vec<Keyframe>, _target: AnimationTarget) -> AnimHandle {
        self.next_handle += 1;
        AnimHandle(self.next_handle)
    }

    fn remove(&mut self, _handle: AnimHandle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_builder() {
        let kf = Keyframe::new(0.5, 2.0).with_ease("outQuad");
        assert_eq!(kf.time, 0.5);
        assert_eq!(kf.value, 2.0);
        assert_eq!(kf.ease, "outQuad");

        assert_eq!(Keyframe::new(0.0, 0.0).ease, "linear");
    }

    #[test]
    fn test_null_animator_hands_out_unique_handles() {
        let mut animator = NullAnimator::default();
        let target = AnimationTarget::Rotation {
            object: ObjectId::new(1),
        };

        let h1 = animator.play(vec![], target);
        let h2 = animator.play(vec![], target);
        assert_ne!(h1, h2);

        animator.remove(h1);
        animator.remove(AnimHandle(999));
    }
}
