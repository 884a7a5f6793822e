//! Per-modifier result cache.
//!
//! Each modifier instance owns one opaque slot for memoized setup state: a
//! built emitter, a timer baseline, the list of entities it spawned. The
//! slot is private to the instance (nothing else reads it) and lives until
//! the modifier is destroyed or an explicit clear.
//!
//! Reads are downcast-and-validate: asking for the wrong type is treated as
//! "no cached value", never a fault.

use std::any::Any;

/// Opaque single-value cache owned by one modifier instance.
#[derive(Default)]
pub struct ResultCache {
    slot: Option<Box<dyn Any>>,
}

impl ResultCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a value is cached.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.slot.is_some()
    }

    /// Store a value, replacing whatever was there.
    pub fn set<T: Any>(&mut self, value: T) {
        self.slot = Some(Box::new(value));
    }

    /// Borrow the cached value if present and of type `T`.
    ///
    /// A cached value of a different type reads as absent.
    #[must_use]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.slot.as_ref().and_then(|b| b.downcast_ref::<T>())
    }

    /// Mutably borrow the cached value if present and of type `T`.
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slot.as_mut().and_then(|b| b.downcast_mut::<T>())
    }

    /// Borrow the cached `T`, initializing it first if the slot is empty or
    /// holds a different type.
    pub fn get_or_insert_with<T: Any>(&mut self, init: impl FnOnce() -> T) -> &mut T {
        let mismatched = match &self.slot {
            Some(b) => !b.is::<T>(),
            None => true,
        };
        if mismatched {
            self.slot = Some(Box::new(init()));
        }
        self.slot
            .as_mut()
            .and_then(|b| b.downcast_mut::<T>())
            .expect("slot was just initialized with T")
    }

    /// Take the cached value out if present and of type `T`.
    ///
    /// On a type mismatch the value stays in place and `None` is returned.
    pub fn take<T: Any>(&mut self) -> Option<T> {
        match self.slot.take() {
            Some(b) => match b.downcast::<T>() {
                Ok(v) => Some(*v),
                Err(b) => {
                    self.slot = Some(b);
                    None
                }
            },
            None => None,
        }
    }

    /// Drop the cached value.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.slot.is_some() {
            f.write_str("ResultCache(<cached>)")
        } else {
            f.write_str("ResultCache(empty)")
        }
    }
}
