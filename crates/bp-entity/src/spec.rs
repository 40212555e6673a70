//! Construction parameters for a single entity.

use bp_core::{ArenaConfig, BehaviorKind, CoreError, CoreResult, Vec2};

/// Everything needed to create an [`Entity`][crate::Entity] except its id.
///
/// A spec is unvalidated; [`EntityStore::spawn`][crate::EntityStore::spawn]
/// runs [`validate`](Self::validate) and rejects bad parameters before the
/// entity can reach the tick pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySpec {
    pub kind:      BehaviorKind,
    pub position:  Vec2,
    pub velocity:  Vec2,
    pub radius:    f64,
    pub max_speed: f64,
}

impl EntitySpec {
    /// A stationary entity of `kind` at `position` with the given radius and
    /// the default speed cap (`ArenaConfig::default_max_speed`).
    pub fn new(kind: BehaviorKind, position: Vec2, radius: f64) -> Self {
        Self {
            kind,
            position,
            velocity: Vec2::ZERO,
            radius,
            max_speed: ArenaConfig::default().default_max_speed,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Reject non-positive or non-finite radii and non-finite vectors.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(CoreError::InvalidRadius(self.radius));
        }
        if !self.position.is_finite() {
            return Err(CoreError::NonFinite {
                what: "position",
                x:    self.position.x,
                y:    self.position.y,
            });
        }
        if !self.velocity.is_finite() {
            return Err(CoreError::NonFinite {
                what: "velocity",
                x:    self.velocity.x,
                y:    self.velocity.y,
            });
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(CoreError::Config(format!(
                "max_speed must be non-negative, got {}",
                self.max_speed
            )));
        }
        Ok(())
    }
}
