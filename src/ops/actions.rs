//! Built-in action bodies.
//!
//! Writes to the owning object land synchronously; writes to other objects
//! and to color/active state are deferred through the post-tick queue so
//! every object in the tick observes the same pre-tick world. Actions whose
//! math slot fails to evaluate abort for the tick without faulting anything
//! else.

use crate::core::{Axis, ObjectId};
use crate::host::animation::{AnimHandle, AnimationTarget, Keyframe};
use crate::modifier::Modifier;
use crate::resolve::{ObjectIndex, ValueResolver};
use crate::runtime::{DeferredEffect, TickContext};
use crate::store::Rgba;

/// `getFloat(name, expr)`: evaluates the expression and publishes the result
/// as a scope variable, readable by later modifiers this tick.
pub fn get_float(m: &mut Modifier, ctx: &mut TickContext) {
    let Some(name) = m.arg(0).map(str::to_string) else {
        return;
    };
    match ctx.eval_math(m, 1) {
        Ok(value) => ctx.scope.set(name, value.to_string()),
        Err(err) => log::debug!("{} aborted: {err}", m.kind),
    }
}

/// `setVariable(name, value)`: publishes a string scope variable.
pub fn set_variable(m: &mut Modifier, ctx: &mut TickContext) {
    let Some(name) = m.arg(0).map(str::to_string) else {
        return;
    };
    let value = ValueResolver::string(m, 1, ctx.scope, "");
    ctx.scope.set(name, value);
}

/// `setPosition(axis, expr)`: writes one axis of the owner's position.
///
/// A self-write, so it lands synchronously.
pub fn set_position(m: &mut Modifier, ctx: &mut TickContext) {
    let Some(axis) = m.arg(0).and_then(Axis::parse) else {
        return;
    };
    let value = match ctx.eval_math(m, 1) {
        Ok(v) => v as f32,
        Err(err) => {
            log::debug!("{} aborted: {err}", m.kind);
            return;
        }
    };
    if let Some(owner) = ctx.owner_mut() {
        owner.visual.position[axis.index()] = value;
    }
}

/// `setPositionOther(tag, axis, expr)`: writes one position axis of every
/// live object carrying the tag. Cross-object, so the writes are deferred.
pub fn set_position_other(m: &mut Modifier, ctx: &mut TickContext) {
    let tag = ValueResolver::string(m, 0, ctx.scope, "");
    let Some(axis) = m.arg(1).and_then(Axis::parse) else {
        return;
    };
    let value = match ctx.eval_math(m, 2) {
        Ok(v) => v as f32,
        Err(err) => {
            log::debug!("{} aborted: {err}", m.kind);
            return;
        }
    };
    for target in ObjectIndex::find(ctx.store, &tag, None, true) {
        ctx.queue.enqueue(DeferredEffect::Run(Box::new(move |store| {
            if let Some(obj) = store.get_mut(target) {
                if obj.alive {
                    obj.visual.position[axis.index()] = value;
                }
            }
        })));
    }
}

/// `setCollider(enabled)`: toggles the owner's collider.
pub fn set_collider(m: &mut Modifier, ctx: &mut TickContext) {
    let enabled = ValueResolver::boolean(m, 0, ctx.scope, true);
    if let Some(owner) = ctx.owner_mut() {
        owner.visual.collider_enabled = enabled;
    }
}

/// `setColor(r, g, b, a)`: sets the owner's color, deferred so every object
/// this tick still reads the pre-tick color.
pub fn set_color(m: &mut Modifier, ctx: &mut TickContext) {
    let color = color_args(m, ctx, 0);
    let object = m.owner;
    ctx.queue.enqueue(DeferredEffect::SetColor { object, color });
}

/// `setColorOther(tag, r, g, b, a)`: sets the color of every live object
/// carrying the tag, deferred.
pub fn set_color_other(m: &mut Modifier, ctx: &mut TickContext) {
    let tag = ValueResolver::string(m, 0, ctx.scope, "");
    let color = color_args(m, ctx, 1);
    for object in ObjectIndex::find(ctx.store, &tag, None, true) {
        ctx.queue.enqueue(DeferredEffect::SetColor { object, color });
    }
}

/// `setActiveOther(tag, active)`: enables or disables every live object
/// carrying the tag, deferred.
pub fn set_active_other(m: &mut Modifier, ctx: &mut TickContext) {
    let tag = ValueResolver::string(m, 0, ctx.scope, "");
    let active = ValueResolver::boolean(m, 1, ctx.scope, true);
    for object in ObjectIndex::find(ctx.store, &tag, None, true) {
        ctx.queue.enqueue(DeferredEffect::SetActive { object, active });
    }
}

/// `spawnPrefab(name, count, jitter)`: spawns `count` copies at the owner's
/// position, tagged with the prefab name and sharing one fresh prefab
/// instance id. A non-zero jitter radius offsets each copy on X/Y by a
/// deterministic draw from the tick RNG. Spawned ids accumulate in the
/// cache.
pub fn spawn_prefab(m: &mut Modifier, ctx: &mut TickContext) {
    let name = ValueResolver::string(m, 0, ctx.scope, "");
    if name.is_empty() {
        return;
    }
    let count = ValueResolver::int(m, 1, ctx.scope, 1).max(0);
    let jitter = ValueResolver::float(m, 2, ctx.scope, 0.0).max(0.0);
    let origin = ctx
        .owner_object()
        .map_or([0.0; 3], |o| o.visual.position);

    let instance = ctx.store.new_prefab_instance();
    let mut ids = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut position = origin;
        if jitter > 0.0 {
            position[0] += ctx.rng.gen_f32(-jitter..jitter);
            position[1] += ctx.rng.gen_f32(-jitter..jitter);
        }
        let object = crate::store::LevelObject::new(name.clone())
            .with_tag(name.clone())
            .with_prefab(instance)
            .at(position[0], position[1], position[2]);
        ids.push(ctx.store.spawn(object));
    }
    m.cache
        .get_or_insert_with(Vec::<ObjectId>::new)
        .extend(ids);
}

/// `clearSpawned(name)`: removes every prefab-spawned object tagged with
/// the name. Authored objects sharing the tag are untouched (they carry no
/// prefab lineage).
pub fn clear_spawned(m: &mut Modifier, ctx: &mut TickContext) {
    let name = ValueResolver::string(m, 0, ctx.scope, "");
    if name.is_empty() {
        return;
    }
    let targets: Vec<ObjectId> = ctx
        .store
        .iter_ordered()
        .filter(|o| o.prefab.is_some() && o.has_tag(&name))
        .map(|o| o.id)
        .collect();
    for id in targets {
        ctx.store.remove(id);
    }
}

/// `tweenPosition(axis, target_expr, duration, ease)`: hands the host
/// animator a two-keyframe track from the owner's current position to the
/// target. Re-firing cancels the previous tween first.
pub fn tween_position(m: &mut Modifier, ctx: &mut TickContext) {
    let Some(axis) = m.arg(0).and_then(Axis::parse) else {
        return;
    };
    let target = match ctx.eval_math(m, 1) {
        Ok(v) => v as f32,
        Err(err) => {
            log::debug!("{} aborted: {err}", m.kind);
            return;
        }
    };
    let duration = ValueResolver::float(m, 2, ctx.scope, 1.0).max(f32::EPSILON);
    let ease = ValueResolver::string(m, 3, ctx.scope, "linear");
    let Some(owner) = ctx.owner_object() else {
        return;
    };
    let start = owner.visual.position[axis.index()];

    if let Some(previous) = m.cache.take::<AnimHandle>() {
        ctx.animator.remove(previous);
    }
    let track = vec![
        Keyframe::new(0.0, start),
        Keyframe::new(duration, target).with_ease(ease),
    ];
    let handle = ctx.animator.play(
        track,
        AnimationTarget::Position {
            object: m.owner,
            axis,
        },
    );
    m.cache.set(handle);
}

/// `fadeColor(r, g, b, a, duration)`: continuous action interpolating the
/// owner's color from its value at the rising edge towards the target over
/// `duration` seconds of gate-held time.
pub fn fade_color(m: &mut Modifier, ctx: &mut TickContext) {
    let Some(edge) = m.edge_time else {
        return;
    };
    let Some(owner) = ctx.owner_object() else {
        return;
    };
    let current = owner.visual.color;
    let object = m.owner;
    let target = color_args(m, ctx, 0);
    let duration = ValueResolver::float(m, 4, ctx.scope, 1.0).max(f32::EPSILON);

    // the start color is captured once per rising edge, keyed by edge time
    let start = match m.cache.get::<FadeStart>() {
        Some(s) if s.edge == edge => s.color,
        _ => {
            m.cache.set(FadeStart {
                edge,
                color: current,
            });
            current
        }
    };

    let t = ((ctx.time - edge) / duration).clamp(0.0, 1.0);
    ctx.queue.enqueue(DeferredEffect::SetColor {
        object,
        color: start.lerp(target, t),
    });
}

struct FadeStart {
    edge: f32,
    color: Rgba,
}

fn color_args(m: &Modifier, ctx: &TickContext, first_slot: usize) -> Rgba {
    Rgba::new(
        ValueResolver::float(m, first_slot, ctx.scope, 1.0),
        ValueResolver::float(m, first_slot + 1, ctx.scope, 1.0),
        ValueResolver::float(m, first_slot + 2, ctx.scope, 1.0),
        ValueResolver::float(m, first_slot + 3, ctx.scope, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Scope, TickRng};
    use crate::host::animation::NullAnimator;
    use crate::host::eval::LiteralEvaluator;
    use crate::modifier::{ActionFn, ModifierData, OpcodeRegistry};
    use crate::runtime::PostTickQueue;
    use crate::store::{LevelObject, LevelStore};

    struct Fixture {
        store: LevelStore,
        owner: ObjectId,
        scope: Scope,
        queue: PostTickQueue,
        animator: NullAnimator,
        rng: TickRng,
    }

    impl Fixture {
        fn new() -> Self {
            let mut store = LevelStore::new();
            let owner = store.spawn(LevelObject::new("o"));
            Self {
                store,
                owner,
                scope: Scope::new(),
                queue: PostTickQueue::new(),
                animator: NullAnimator::new(),
                rng: TickRng::new(0),
            }
        }

        fn fire(&mut self, f: ActionFn, m: &mut Modifier, time: f32) {
            let mut ctx = TickContext {
                store: &mut self.store,
                scope: &mut self.scope,
                queue: &mut self.queue,
                animator: &mut self.animator,
                evaluator: &LiteralEvaluator,
                rng: &mut self.rng,
                time,
                owner: self.owner,
            };
            f(m, &mut ctx);
        }

        fn drain(&mut self) {
            self.queue.drain(&mut self.store);
        }
    }

    fn modifier(kind: &str, f: ActionFn, args: &[&str]) -> Modifier {
        let mut r = OpcodeRegistry::new();
        r.register_action(kind, f);
        r.bind(
            &ModifierData::new(kind).with_args(args.iter().copied()),
            ObjectId::new(1),
        )
        .unwrap()
    }

    #[test]
    fn test_get_float_publishes_scope_variable() {
        let mut fx = Fixture::new();
        let mut m = modifier("getFloat", get_float, &["x", "3.5"]);

        fx.fire(get_float, &mut m, 0.0);
        assert_eq!(fx.scope.get("x"), Some("3.5"));

        // later modifiers read it through math slots the same tick
        let mut reader = modifier("setPosition", set_position, &["x", "x"]);
        fx.fire(set_position, &mut reader, 0.0);
        assert_eq!(
            fx.store.get(fx.owner).unwrap().visual.position[0],
            3.5
        );
    }

    #[test]
    fn test_get_float_aborts_on_bad_expression() {
        let mut fx = Fixture::new();
        let mut m = modifier("getFloat", get_float, &["x", "not a number"]);

        fx.fire(get_float, &mut m, 0.0);
        assert_eq!(fx.scope.get("x"), None);
    }

    #[test]
    fn test_set_variable() {
        let mut fx = Fixture::new();
        let mut m = modifier("setVariable", set_variable, &["phase", "boss"]);

        fx.fire(set_variable, &mut m, 0.0);
        assert_eq!(fx.scope.get("phase"), Some("boss"));
    }

    #[test]
    fn test_set_position_writes_synchronously() {
        let mut fx = Fixture::new();
        let mut m = modifier("setPosition", set_position, &["y", "4"]);

        fx.fire(set_position, &mut m, 0.0);
        // visible before any drain
        assert_eq!(fx.store.get(fx.owner).unwrap().visual.position[1], 4.0);
    }

    #[test]
    fn test_set_position_bad_axis_or_expr_is_noop() {
        let mut fx = Fixture::new();

        let mut bad_axis = modifier("setPosition", set_position, &["w", "4"]);
        fx.fire(set_position, &mut bad_axis, 0.0);

        let mut bad_expr = modifier("setPosition", set_position, &["x", "1 + bogus"]);
        fx.fire(set_position, &mut bad_expr, 0.0);

        assert_eq!(
            fx.store.get(fx.owner).unwrap().visual.position,
            [0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_set_position_other_is_deferred() {
        let mut fx = Fixture::new();
        let a = fx.store.spawn(LevelObject::new("a").with_tag("wall"));
        let b = fx.store.spawn(LevelObject::new("b").with_tag("wall"));
        let mut m = modifier("setPositionOther", set_position_other, &["wall", "x", "7"]);

        fx.fire(set_position_other, &mut m, 0.0);
        // not yet applied
        assert_eq!(fx.store.get(a).unwrap().visual.position[0], 0.0);

        fx.drain();
        assert_eq!(fx.store.get(a).unwrap().visual.position[0], 7.0);
        assert_eq!(fx.store.get(b).unwrap().visual.position[0], 7.0);
    }

    #[test]
    fn test_set_collider() {
        let mut fx = Fixture::new();
        let mut m = modifier("setCollider", set_collider, &["false"]);

        fx.fire(set_collider, &mut m, 0.0);
        assert!(!fx.store.get(fx.owner).unwrap().visual.collider_enabled);
    }

    #[test]
    fn test_set_color_deferred_overrides_sync_write() {
        let mut fx = Fixture::new();
        let mut m = modifier("setColor", set_color, &["1", "0", "0", "1"]);

        fx.fire(set_color, &mut m, 0.0);
        // a synchronous write lands first but the drain wins
        fx.store.get_mut(fx.owner).unwrap().visual.color = Rgba::BLACK;
        fx.drain();

        assert_eq!(
            fx.store.get(fx.owner).unwrap().visual.color,
            Rgba::new(1.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_set_active_other() {
        let mut fx = Fixture::new();
        let a = fx.store.spawn(LevelObject::new("a").with_tag("wave2"));
        let mut m = modifier("setActiveOther", set_active_other, &["wave2", "false"]);

        fx.fire(set_active_other, &mut m, 0.0);
        fx.drain();

        assert!(!fx.store.get(a).unwrap().visual.active);
        assert!(fx.store.get(fx.owner).unwrap().visual.active);
    }

    #[test]
    fn test_spawn_prefab() {
        let mut fx = Fixture::new();
        fx.store.get_mut(fx.owner).unwrap().visual.position = [2.0, 3.0, 0.0];
        let mut m = modifier("spawnPrefab", spawn_prefab, &["burst", "3"]);

        fx.fire(spawn_prefab, &mut m, 0.0);

        let first_instance = {
            let spawned: Vec<_> = fx
                .store
                .iter_ordered()
                .filter(|o| o.has_tag("burst"))
                .collect();
            assert_eq!(spawned.len(), 3);
            for obj in &spawned {
                assert_eq!(obj.visual.position, [2.0, 3.0, 0.0]);
                assert!(obj.prefab.is_some());
            }
            // one instance id shared by the batch
            assert!(spawned.iter().all(|o| o.prefab == spawned[0].prefab));
            spawned[0].prefab
        };

        // the instance records what it spawned
        assert_eq!(m.cache.get::<Vec<ObjectId>>().unwrap().len(), 3);

        // a second firing gets its own instance id
        fx.fire(spawn_prefab, &mut m, 1.0);
        let fresh = fx
            .store
            .iter_ordered()
            .filter(|o| o.has_tag("burst") && o.prefab != first_instance)
            .count();
        assert_eq!(fresh, 3);
        assert_eq!(m.cache.get::<Vec<ObjectId>>().unwrap().len(), 6);
    }

    #[test]
    fn test_spawn_prefab_jitter_offsets_copies() {
        let mut fx = Fixture::new();
        fx.store.get_mut(fx.owner).unwrap().visual.position = [5.0, 5.0, 1.0];
        let mut m = modifier("spawnPrefab", spawn_prefab, &["burst", "8", "2"]);

        fx.fire(spawn_prefab, &mut m, 0.0);

        let positions: Vec<[f32; 3]> = fx
            .store
            .iter_ordered()
            .filter(|o| o.has_tag("burst"))
            .map(|o| o.visual.position)
            .collect();
        assert_eq!(positions.len(), 8);

        for p in &positions {
            assert!((p[0] - 5.0).abs() < 2.0);
            assert!((p[1] - 5.0).abs() < 2.0);
            // jitter is planar
            assert_eq!(p[2], 1.0);
        }
        // the copies are actually scattered, not stacked
        assert!(positions.iter().any(|p| *p != positions[0]));
    }

    #[test]
    fn test_spawn_prefab_jitter_is_deterministic() {
        let spawn_run = |seed: u64| -> Vec<[f32; 3]> {
            let mut fx = Fixture::new();
            fx.rng = TickRng::new(seed);
            let mut m = modifier("spawnPrefab", spawn_prefab, &["burst", "4", "1"]);
            fx.fire(spawn_prefab, &mut m, 0.0);
            fx.store
                .iter_ordered()
                .filter(|o| o.has_tag("burst"))
                .map(|o| o.visual.position)
                .collect()
        };

        assert_eq!(spawn_run(3), spawn_run(3));
        assert_ne!(spawn_run(3), spawn_run(4));
    }

    #[test]
    fn test_clear_spawned_leaves_authored_objects() {
        let mut fx = Fixture::new();
        let authored = fx.store.spawn(LevelObject::new("decoy").with_tag("burst"));

        let mut spawner = modifier("spawnPrefab", spawn_prefab, &["burst", "2"]);
        fx.fire(spawn_prefab, &mut spawner, 0.0);
        assert_eq!(count_tagged(&fx, "burst"), 3);

        let mut clearer = modifier("clearSpawned", clear_spawned, &["burst"]);
        fx.fire(clear_spawned, &mut clearer, 1.0);

        assert_eq!(count_tagged(&fx, "burst"), 1);
        assert!(fx.store.get(authored).is_some());
    }

    fn count_tagged(fx: &Fixture, tag: &str) -> usize {
        fx.store.iter_ordered().filter(|o| o.has_tag(tag)).count()
    }

    #[test]
    fn test_tween_position_replaces_previous_handle() {
        let mut fx = Fixture::new();
        let mut m = modifier("tweenPosition", tween_position, &["x", "10", "2", "outQuad"]);

        fx.fire(tween_position, &mut m, 0.0);
        let first = *m.cache.get::<AnimHandle>().unwrap();

        fx.fire(tween_position, &mut m, 1.0);
        let second = *m.cache.get::<AnimHandle>().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_fade_color_interpolates_from_edge() {
        let mut fx = Fixture::new();
        fx.store.get_mut(fx.owner).unwrap().visual.color = Rgba::BLACK;
        let mut m = modifier("fadeColor", fade_color, &["1", "1", "1", "1", "2"]);
        m.edge_time = Some(1.0);

        // halfway through the fade
        fx.fire(fade_color, &mut m, 2.0);
        fx.drain();
        let mid = fx.store.get(fx.owner).unwrap().visual.color;
        assert!((mid.r - 0.5).abs() < 1e-6);

        // past the duration the target holds
        fx.fire(fade_color, &mut m, 10.0);
        fx.drain();
        assert_eq!(fx.store.get(fx.owner).unwrap().visual.color, Rgba::WHITE);
    }

    #[test]
    fn test_fade_color_without_edge_is_noop() {
        let mut fx = Fixture::new();
        let mut m = modifier("fadeColor", fade_color, &["1", "1", "1", "1", "2"]);

        fx.fire(fade_color, &mut m, 0.0);
        assert!(fx.queue.is_empty());
    }
}
