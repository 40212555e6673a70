//! Steering requests, the output of the plan step.

use bp_core::Vec2;
use bp_entity::Entity;

/// A velocity adjustment an entity wants this tick.
///
/// Produced by [`SteeringRule::steer`][crate::SteeringRule::steer] and applied
/// by [`BehaviorEngine::apply`][crate::BehaviorEngine::apply].  The point is
/// captured at plan time, so later motion in the same tick does not change
/// where the entity was aiming.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Steer {
    /// Accelerate toward the point.
    Toward(Vec2),
    /// Accelerate away from the point.
    Away(Vec2),
}

impl Steer {
    /// Apply this request to `entity` with step size `accel`.
    pub fn apply_to(self, entity: &mut Entity, accel: f64) {
        match self {
            Steer::Toward(p) => entity.accelerate_toward(p, accel),
            Steer::Away(p)   => entity.accelerate_away(p, accel),
        }
    }
}
