//! Object identification.
//!
//! Every level object has a unique `ObjectId`, allocated by the level store
//! in creation order. Objects spawned together from a prefab additionally
//! share a `PrefabInstanceId`, which is what prefab-scoped tag lookups key on.

use serde::{Deserialize, Serialize};

/// Unique identifier for a level object.
///
/// Ids are allocated by the store and never reused within a level run.
/// Modifiers hold their owner's id as a weak back-reference: lookup only,
/// never ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Create an object ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// Identifier for one spawned instance of a prefab.
///
/// All objects expanded from the same prefab spawn carry the same instance
/// id, so "this prefab instance only" lookups can tell sibling copies apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabInstanceId(pub u32);

impl PrefabInstanceId {
    /// Create a prefab instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PrefabInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrefabInstance({})", self.0)
    }
}

/// Transform axis addressed by position/scale operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into a `[f32; 3]` component array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Parse an authored axis argument ("x"/"y"/"z" or "0"/"1"/"2").
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "x" | "X" | "0" => Some(Axis::X),
            "y" | "Y" | "1" => Some(Axis::Y),
            "z" | "Z" | "2" => Some(Axis::Z),
            _ => None,
        }
    }
}
