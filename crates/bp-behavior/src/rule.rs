//! The `SteeringRule` trait, the per-kind extension point, and the
//! built-in rules.

use bp_entity::Entity;

use crate::{Steer, SteeringContext};

/// Pluggable per-kind steering.
///
/// Called once per live entity per tick during the plan step.  A rule reads
/// the entity and the context and returns the adjustment it wants, or
/// `None` to leave the velocity alone.
///
/// Rules hold no per-entity state, so implementations must be `Send + Sync`
/// and are shared by every entity of their kind.
///
/// # Example
///
/// ```rust,ignore
/// struct Orbit(Vec2);
///
/// impl SteeringRule for Orbit {
///     fn steer(&self, _entity: &Entity, _ctx: &SteeringContext<'_>) -> Option<Steer> {
///         Some(Steer::Toward(self.0))
///     }
/// }
///
/// table.set(BehaviorKind::Plain, Orbit(Vec2::new(512.0, 384.0)));
/// ```
pub trait SteeringRule: Send + Sync + 'static {
    fn steer(&self, entity: &Entity, ctx: &SteeringContext<'_>) -> Option<Steer>;
}

/// No autonomous steering.  Used by Plain, Bouncy, and player entities.
pub struct Idle;

impl SteeringRule for Idle {
    fn steer(&self, _entity: &Entity, _ctx: &SteeringContext<'_>) -> Option<Steer> {
        None
    }
}

/// Toward the nearest entity, whatever its size.  Consuming entities.
pub struct Seek;

impl SteeringRule for Seek {
    fn steer(&self, entity: &Entity, ctx: &SteeringContext<'_>) -> Option<Steer> {
        let neighbor = ctx.nearest(entity)?;
        Some(Steer::Toward(neighbor.position))
    }
}

/// Away from the nearest entity.  Evading entities.
pub struct Flee;

impl SteeringRule for Flee {
    fn steer(&self, entity: &Entity, ctx: &SteeringContext<'_>) -> Option<Steer> {
        let neighbor = ctx.nearest(entity)?;
        Some(Steer::Away(neighbor.position))
    }
}

/// Toward a strictly smaller nearest neighbor, away from one of equal or
/// larger area.  Intelligent entities.
pub struct SizeAware;

impl SteeringRule for SizeAware {
    fn steer(&self, entity: &Entity, ctx: &SteeringContext<'_>) -> Option<Steer> {
        let neighbor = ctx.nearest(entity)?;
        if neighbor.area() < entity.area() {
            Some(Steer::Toward(neighbor.position))
        } else {
            Some(Steer::Away(neighbor.position))
        }
    }
}

/// Stationary unless the nearest neighbor is strictly larger, in which case
/// it moves *toward* that neighbor.  Master entities.
///
/// Chasing the larger ball looks reversed for a stationary trap, but it is
/// the rule the game has always shipped with, so it is kept as is.  Swap in
/// a different rule through [`SteeringTable::set`][crate::SteeringTable::set]
/// to change it.
pub struct MasterLure;

impl SteeringRule for MasterLure {
    fn steer(&self, entity: &Entity, ctx: &SteeringContext<'_>) -> Option<Steer> {
        let neighbor = ctx.nearest(entity)?;
        (neighbor.area() > entity.area()).then_some(Steer::Toward(neighbor.position))
    }
}
