//! Level objects and their visual state.
//!
//! A `LevelObject` is the engine's view of one authored object: identity,
//! tag set, prefab lineage, liveness, and the visual state that actions
//! mutate. Rendering, physics and audio backends read `VisualState`; the
//! engine only writes it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ObjectId, PrefabInstanceId};

/// RGBA color, components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation towards `other` by `t` in [0, 1].
    #[must_use]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// Mutable visual/physical state of a level object.
///
/// This is the surface the rendering and physics collaborators consume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// World position.
    pub position: [f32; 3],
    /// Per-axis scale.
    pub scale: [f32; 3],
    /// Rotation in degrees around Z.
    pub rotation: f32,
    /// Current color, including alpha.
    pub color: Rgba,
    /// Whether the object is rendered/updated at all.
    pub active: bool,
    /// Whether the object's collider participates in physics queries.
    pub collider_enabled: bool,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            scale: [1.0; 3],
            rotation: 0.0,
            color: Rgba::WHITE,
            active: true,
            collider_enabled: true,
        }
    }
}

/// One object in the level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelObject {
    /// Store-assigned identity. Zero until spawned.
    pub id: ObjectId,
    /// Authored name (also used as the prefab name for spawned copies).
    pub name: String,
    /// Tag set for cross-object addressing. Tags are not unique.
    pub tags: SmallVec<[String; 4]>,
    /// Prefab instance this object was spawned from, if any.
    pub prefab: Option<PrefabInstanceId>,
    /// Alive flag: destroyed objects stay in the store with `alive == false`
    /// until removed, so alive-only lookups can exclude them.
    pub alive: bool,
    /// Visual/physical state actions mutate.
    pub visual: VisualState,
}

impl LevelObject {
    /// Create a new object. The store assigns the real id on spawn.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(0),
            name: name.into(),
            tags: SmallVec::new(),
            prefab: None,
            alive: true,
            visual: VisualState::default(),
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Mark as spawned from a prefab instance (builder pattern).
    #[must_use]
    pub fn with_prefab(mut self, instance: PrefabInstanceId) -> Self {
        self.prefab = Some(instance);
        self
    }

    /// Set the initial position (builder pattern).
    #[must_use]
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.visual.position = [x, y, z];
        self
    }

    /// Check whether the object carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Numeric bindings this object contributes to expression evaluation.
    ///
    /// Merged over the tick scope's numeric variables, so an expression like
    /// `positionX + 2` resolves against the owning object.
    #[must_use]
    pub fn numeric_bindings(&self) -> [(&'static str, f64); 8] {
        [
            ("positionX", f64::from(self.visual.position[0])),
            ("positionY", f64::from(self.visual.position[1])),
            ("positionZ", f64::from(self.visual.position[2])),
            ("scaleX", f64::from(self.visual.scale[0])),
            ("scaleY", f64::from(self.visual.scale[1])),
            ("scaleZ", f64::from(self.visual.scale[2])),
            ("rotation", f64::from(self.visual.rotation)),
            ("alpha", f64::from(self.visual.color.a)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let obj = LevelObject::new("spike")
            .with_tag("hazard")
            .with_tag("wave1")
            .at(1.0, 2.0, 0.0);

        assert_eq!(obj.name, "spike");
        assert!(obj.has_tag("hazard"));
        assert!(obj.has_tag("wave1"));
        assert!(!obj.has_tag("wave2"));
        assert_eq!(obj.visual.position, [1.0, 2.0, 0.0]);
        assert!(obj.alive);
    }

    #[test]
    fn test_visual_defaults() {
        let v = VisualState::default();
        assert_eq!(v.scale, [1.0; 3]);
        assert_eq!(v.color, Rgba::WHITE);
        assert!(v.active);
        assert!(v.collider_enabled);
    }

    #[test]
    fn test_rgba_lerp() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);

        let mid = black.lerp(white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);

        // t is clamped
        assert_eq!(black.lerp(white, 2.0), white);
    }

    #[test]
    fn test_numeric_bindings() {
        let obj = LevelObject::new("o").at(3.0, -1.0, 0.5);
        let bindings = obj.numeric_bindings();

        assert!(bindings.contains(&("positionX", 3.0)));
        assert!(bindings.contains(&("positionY", -1.0)));
        assert!(bindings.contains(&("rotation", 0.0)));
        assert!(bindings.contains(&("alpha", 1.0)));
    }
}
