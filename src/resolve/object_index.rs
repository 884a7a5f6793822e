//! Cross-object tag lookup.
//!
//! Nearly every "Other" trigger/action addresses a set of objects by tag.
//! Lookups are recomputed per call over the store's creation order, so the
//! result is stable within a tick (objects are never reordered mid-tick).
//! No match is an empty set, never an error.

use smallvec::SmallVec;

use crate::core::{ObjectId, PrefabInstanceId};
use crate::store::LevelStore;

/// Object set addressed by a tag lookup.
pub type TargetSet = SmallVec<[ObjectId; 4]>;

/// Tag/prefab-scoped lookup over the level store.
pub struct ObjectIndex;

impl ObjectIndex {
    /// Find all objects carrying `tag`, in creation order.
    ///
    /// `prefab_scope` restricts matches to one prefab instance's objects;
    /// `alive_only` excludes destroyed/disabled objects.
    #[must_use]
    pub fn find(
        store: &LevelStore,
        tag: &str,
        prefab_scope: Option<PrefabInstanceId>,
        alive_only: bool,
    ) -> TargetSet {
        let mut out = TargetSet::new();
        for object in store.iter_ordered() {
            if alive_only && !object.alive {
                continue;
            }
            if let Some(instance) = prefab_scope {
                if object.prefab != Some(instance) {
                    continue;
                }
            }
            if object.has_tag(tag) {
                out.push(object.id);
            }
        }
        out
    }

    /// First match, if any.
    #[must_use]
    pub fn try_find_one(
        store: &LevelStore,
        tag: &str,
        prefab_scope: Option<PrefabInstanceId>,
        alive_only: bool,
    ) -> Option<ObjectId> {
        for object in store.iter_ordered() {
            if alive_only && !object.alive {
                continue;
            }
            if let Some(instance) = prefab_scope {
                if object.prefab != Some(instance) {
                    continue;
                }
            }
            if object.has_tag(tag) {
                return Some(object.id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LevelObject;

    fn store_with_tags() -> (LevelStore, Vec<ObjectId>) {
        let mut store = LevelStore::new();
        let ids = vec![
            store.spawn(LevelObject::new("a").with_tag("enemy")),
            store.spawn(LevelObject::new("b").with_tag("enemy").with_tag("boss")),
            store.spawn(LevelObject::new("c").with_tag("wall")),
            store.spawn(LevelObject::new("d").with_tag("enemy")),
        ];
        (store, ids)
    }

    #[test]
    fn test_find_preserves_creation_order() {
        let (store, ids) = store_with_tags();

        let found = ObjectIndex::find(&store, "enemy", None, false);
        assert_eq!(found.as_slice(), &[ids[0], ids[1], ids[3]]);
    }

    #[test]
    fn test_find_no_match_is_empty() {
        let (store, _) = store_with_tags();

        let found = ObjectIndex::find(&store, "missing", None, false);
        assert!(found.is_empty());

        let empty = LevelStore::new();
        assert!(ObjectIndex::find(&empty, "enemy", None, true).is_empty());
    }

    #[test]
    fn test_alive_only_excludes_destroyed() {
        let (mut store, ids) = store_with_tags();
        store.destroy(ids[0]);

        let alive = ObjectIndex::find(&store, "enemy", None, true);
        assert_eq!(alive.as_slice(), &[ids[1], ids[3]]);

        // destroyed objects still match when alive_only is off
        let all = ObjectIndex::find(&store, "enemy", None, false);
        assert_eq!(all.as_slice(), &[ids[0], ids[1], ids[3]]);
    }

    #[test]
    fn test_prefab_scope() {
        let mut store = LevelStore::new();
        let instance_a = store.new_prefab_instance();
        let instance_b = store.new_prefab_instance();

        let a1 = store.spawn(
            LevelObject::new("p").with_tag("part").with_prefab(instance_a),
        );
        let _b1 = store.spawn(
            LevelObject::new("p").with_tag("part").with_prefab(instance_b),
        );
        let loose = store.spawn(LevelObject::new("p").with_tag("part"));

        let scoped = ObjectIndex::find(&store, "part", Some(instance_a), false);
        assert_eq!(scoped.as_slice(), &[a1]);

        let unscoped = ObjectIndex::find(&store, "part", None, false);
        assert_eq!(unscoped.len(), 3);
        assert!(unscoped.contains(&loose));
    }

    #[test]
    fn test_try_find_one() {
        let (mut store, ids) = store_with_tags();

        assert_eq!(ObjectIndex::try_find_one(&store, "boss", None, false), Some(ids[1]));
        assert_eq!(ObjectIndex::try_find_one(&store, "missing", None, false), None);

        store.destroy(ids[1]);
        assert_eq!(ObjectIndex::try_find_one(&store, "boss", None, true), None);
    }
}
