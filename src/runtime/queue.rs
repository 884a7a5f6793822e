//! Deferred effect queue.
//!
//! Actions whose effects must not be observed by later objects in the same
//! tick enqueue them here instead of writing the store directly. The queue
//! drains once, after every object has evaluated, in enqueue order: within a
//! tick all objects see the same pre-tick world, and the last write to a
//! contested property wins deterministically.

use std::mem;

use crate::core::ObjectId;
use crate::store::{LevelStore, Rgba};

/// One deferred store mutation.
pub enum DeferredEffect {
    /// Set an object's visual color.
    SetColor { object: ObjectId, color: Rgba },
    /// Enable or disable an object.
    SetActive { object: ObjectId, active: bool },
    /// Arbitrary store mutation.
    ///
    /// Closures receive only the store, so a deferred effect cannot enqueue
    /// further effects. The queue drains exactly once per tick.
    Run(Box<dyn FnOnce(&mut LevelStore)>),
}

impl std::fmt::Debug for DeferredEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeferredEffect::SetColor { object, color } => f
                .debug_struct("SetColor")
                .field("object", object)
                .field("color", color)
                .finish(),
            DeferredEffect::SetActive { object, active } => f
                .debug_struct("SetActive")
                .field("object", object)
                .field("active", active)
                .finish(),
            DeferredEffect::Run(_) => f.write_str("Run(..)"),
        }
    }
}

/// FIFO queue of effects applied after the tick's evaluation pass.
#[derive(Debug, Default)]
pub struct PostTickQueue {
    items: Vec<DeferredEffect>,
}

impl PostTickQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an effect for the post-tick drain.
    pub fn enqueue(&mut self, effect: DeferredEffect) {
        self.items.push(effect);
    }

    /// Number of pending effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply all pending effects in enqueue order and clear the queue.
    ///
    /// Targeted effects whose object has been destroyed since enqueue are
    /// dropped silently.
    pub fn drain(&mut self, store: &mut LevelStore) {
        for effect in mem::take(&mut self.items) {
            match effect {
                DeferredEffect::SetColor { object, color } => {
                    if store.is_alive(object) {
                        if let Some(obj) = store.get_mut(object) {
                            obj.visual.color = color;
                        }
                    }
                }
                DeferredEffect::SetActive { object, active } => {
                    if store.is_alive(object) {
                        if let Some(obj) = store.get_mut(object) {
                            obj.visual.active = active;
                        }
                    }
                }
                DeferredEffect::Run(f) => f(store),
            }
        }
    }
}
