//! Built-in trigger predicates.
//!
//! Each predicate is a pure function of the tick context plus the modifier's
//! own cache. Malformed arguments fall back to defaults through the
//! resolver; a missing owner reads as "condition does not hold".

use crate::modifier::Modifier;
use crate::resolve::ValueResolver;
use crate::runtime::TickContext;

/// `timeGreater(threshold)`: holds once tick time exceeds the threshold.
pub fn time_greater(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    ctx.time > ValueResolver::float(m, 0, ctx.scope, 0.0)
}

/// `timeLesser(threshold)`: holds while tick time is below the threshold.
pub fn time_lesser(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    ctx.time < ValueResolver::float(m, 0, ctx.scope, 0.0)
}

/// `playerDistanceLesser(radius)`: holds while the player is within `radius`
/// of the owner.
pub fn player_distance_lesser(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    let radius = ValueResolver::float(m, 0, ctx.scope, 0.0);
    ctx.player_distance().is_some_and(|d| d < radius)
}

/// `playerDistanceGreater(radius)`: holds while the player is farther than
/// `radius` from the owner.
pub fn player_distance_greater(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    let radius = ValueResolver::float(m, 0, ctx.scope, 0.0);
    ctx.player_distance().is_some_and(|d| d > radius)
}

/// `variableEquals(name, expected)`: holds while the named scope variable
/// equals the expected value. An unset variable never matches.
pub fn variable_equals(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    let Some(name) = m.arg(0) else {
        return false;
    };
    let Some(actual) = ctx.scope.get(name) else {
        return false;
    };
    let actual = actual.to_string();
    actual == ValueResolver::string(m, 1, ctx.scope, "")
}

/// `positionChanged()`: holds on any tick where the owner's position differs
/// from the previous tick's. The first tick establishes the baseline.
pub fn position_changed(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    let Some(owner) = ctx.owner_object() else {
        return false;
    };
    let current = owner.visual.position;
    let changed = m
        .cache
        .get::<[f32; 3]>()
        .is_some_and(|prev| *prev != current);
    m.cache.set(current);
    changed
}

/// `chance(probability)`: holds with the given probability each tick, drawn
/// from the deterministic tick RNG.
pub fn chance(m: &mut Modifier, ctx: &mut TickContext) -> bool {
    let probability = f64::from(ValueResolver::float(m, 0, ctx.scope, 0.0));
    ctx.rng.gen_bool(probability)
}
