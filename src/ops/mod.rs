//! The built-in opcode catalogue.
//!
//! Opcodes are content: the engine dispatches whatever the registry holds,
//! and hosts extend the catalogue with their own handlers through
//! [`crate::modifier::OpcodeRegistry`]. The built-ins here cover the common
//! authoring vocabulary: time/distance/variable/edge/chance triggers, scope
//! and transform writers, deferred color/active writers, prefab spawning,
//! and the tween/fade bridges into the host animator.

pub mod actions;
pub mod triggers;

use crate::modifier::OpcodeRegistry;

/// Register every built-in opcode under its authored name.
pub fn register_builtins(registry: &mut OpcodeRegistry) {
    registry.register_trigger("timeGreater", triggers::time_greater);
    registry.register_trigger("timeLesser", triggers::time_lesser);
    registry.register_trigger("playerDistanceLesser", triggers::player_distance_lesser);
    registry.register_trigger("playerDistanceGreater", triggers::player_distance_greater);
    registry.register_trigger("variableEquals", triggers::variable_equals);
    registry.register_trigger("positionChanged", triggers::position_changed);
    registry.register_trigger("chance", triggers::chance);

    registry.register_action("getFloat", actions::get_float);
    registry.register_action("setVariable", actions::set_variable);
    registry.register_action("setPosition", actions::set_position);
    registry.register_action("setPositionOther", actions::set_position_other);
    registry.register_action("setCollider", actions::set_collider);
    registry.register_action("setColor", actions::set_color);
    registry.register_action("setColorOther", actions::set_color_other);
    registry.register_action("setActiveOther", actions::set_active_other);
    registry.register_action("spawnPrefab", actions::spawn_prefab);
    registry.register_action("clearSpawned", actions::clear_spawned);
    registry.register_action("tweenPosition", actions::tween_position);
    registry.register_action("fadeColor", actions::fade_color);
}

/// A registry pre-loaded with the built-in catalogue.
#[must_use]
pub fn builtin_registry() -> OpcodeRegistry {
    let mut registry = OpcodeRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Category;

    #[test]
    fn test_builtin_registry_is_complete() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), 19);

        for name in ["timeGreater", "chance", "positionChanged"] {
            let id = registry.lookup(name).unwrap();
            assert_eq!(registry.category(id), Some(Category::Trigger));
        }
        for name in ["setPosition", "spawnPrefab", "fadeColor"] {
            let id = registry.lookup(name).unwrap();
            assert_eq!(registry.category(id), Some(Category::Action));
        }
    }

    #[test]
    fn test_builtins_register_into_existing_registry() {
        fn custom(_: &mut crate::modifier::Modifier, _: &mut crate::runtime::TickContext) {}

        let mut registry = OpcodeRegistry::new();
        registry.register_action("hostCustom", custom);
        register_builtins(&mut registry);

        assert!(registry.lookup("hostCustom").is_some());
        assert!(registry.lookup("timeGreater").is_some());
        assert_eq!(registry.len(), 20);
    }
}
