//! The per-entity mutable record.

use std::f64::consts::PI;

use bp_core::{BehaviorKind, EntityId, Rgb, Vec2};

/// One simulated ball.
///
/// `Entity` deliberately does not implement `PartialEq`: identity is the
/// `id`, and two entities with identical attributes are still different
/// entities.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id:        EntityId,
    pub kind:      BehaviorKind,
    pub position:  Vec2,
    pub velocity:  Vec2,
    /// Never negative; [`shrink`](Self::shrink) clamps at zero.
    pub radius:    f64,
    /// Velocity magnitude cap enforced whenever steering is applied.
    pub max_speed: f64,
    pub color:     Rgb,
    /// Cleared by the cleanup pass just before the entity leaves the store.
    pub alive:     bool,
}

impl Entity {
    /// Size metric shared by steering comparisons and the elimination test.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Add `accel` along the direction from `position` to `target`, then cap
    /// the speed.  A target at the entity's own position changes nothing.
    pub fn accelerate_toward(&mut self, target: Vec2, accel: f64) {
        let dir = (target - self.position).normalize_or_zero();
        self.velocity = (self.velocity + dir * accel).clamp_length(self.max_speed);
    }

    /// Mirror of [`accelerate_toward`](Self::accelerate_toward): push away
    /// from `target`.
    pub fn accelerate_away(&mut self, target: Vec2, accel: f64) {
        let dir = (target - self.position).normalize_or_zero();
        self.velocity = (self.velocity - dir * accel).clamp_length(self.max_speed);
    }

    #[inline]
    pub fn grow(&mut self, step: f64) {
        self.radius += step;
    }

    #[inline]
    pub fn shrink(&mut self, step: f64) {
        self.radius = (self.radius - step).max(0.0);
    }
}
