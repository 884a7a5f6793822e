//! The level store: the indexed collection of live objects.
//!
//! Objects are kept in creation order, which is the iteration order every
//! lookup and the tick loop observe. The store uses `im` persistent
//! structures so `snapshot()` is O(1); the editor takes snapshots when
//! seeking and restores them wholesale.
//!
//! The store also tracks the player position consumed by distance triggers,
//! and allocates prefab instance ids for spawn actions.

use im::{HashMap as ImHashMap, Vector};

use super::object::LevelObject;
use crate::core::{ObjectId, PrefabInstanceId};

/// Indexed collection of level objects.
#[derive(Clone, Debug, Default)]
pub struct LevelStore {
    objects: ImHashMap<ObjectId, LevelObject>,
    /// Creation order; iteration and lookups follow this.
    order: Vector<ObjectId>,
    player_position: [f32; 3],
    next_id: u32,
    next_prefab_instance: u32,
}

impl LevelStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, assigning its id. Returns the assigned id.
    pub fn spawn(&mut self, mut object: LevelObject) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId::new(self.next_id);
        object.id = id;
        self.objects.insert(id, object);
        self.order.push_back(id);
        id
    }

    /// Allocate a fresh prefab instance id for a spawn.
    pub fn new_prefab_instance(&mut self) -> PrefabInstanceId {
        self.next_prefab_instance += 1;
        PrefabInstanceId::new(self.next_prefab_instance)
    }

    /// Get an object by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&LevelObject> {
        self.objects.get(&id)
    }

    /// Get a mutable object by id.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut LevelObject> {
        self.objects.get_mut(&id)
    }

    /// Check whether an object exists and is alive.
    #[must_use]
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(|o| o.alive)
    }

    /// Mark an object destroyed. It stays in the store (so non-alive-only
    /// lookups still see it) until `remove` is called.
    pub fn destroy(&mut self, id: ObjectId) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.alive = false;
        }
    }

    /// Remove an object entirely. Returns it if it existed.
    pub fn remove(&mut self, id: ObjectId) -> Option<LevelObject> {
        let removed = self.objects.remove(&id);
        if removed.is_some() {
            self.order.retain(|&o| o != id);
        }
        removed
    }

    /// Iterate objects in creation order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &LevelObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Number of objects (including destroyed-but-not-removed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Current player position.
    #[must_use]
    pub fn player_position(&self) -> [f32; 3] {
        self.player_position
    }

    /// Update the player position (done by the host each frame).
    pub fn set_player_position(&mut self, position: [f32; 3]) {
        self.player_position = position;
    }

    /// Take an O(1) snapshot of the whole level.
    ///
    /// Snapshots are independent: mutating the original does not affect the
    /// snapshot. Used by editor seek/rewind.
    #[must_use]
    pub fn snapshot(&self) -> LevelStore {
        self.clone()
    }
}
