//! Level data store: objects, tags, prefab lineage, player tracking.
//!
//! The store is the backing query surface for [`crate::resolve::ObjectIndex`]
//! and the mutation target for actions and deferred effects. It is fully
//! cloneable in O(1) for editor seek snapshots.

mod level;
mod object;

pub use level::LevelStore;
pub use object::{LevelObject, Rgba, VisualState};
