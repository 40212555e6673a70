//! The motion phase of the tick.

use bp_core::{BehaviorKind, EntityId};
use bp_entity::{Entity, EntityStore};
use tracing::trace;

use crate::{Axis, Bounds, Wall};

/// Moves entities and reflects them off the arena edges.
#[derive(Copy, Clone, Debug)]
pub struct MotionIntegrator {
    pub bounds: Bounds,
}

impl MotionIntegrator {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Move `entity` by one velocity step.  Unconditional; no clamping.
    #[inline]
    pub fn step(&self, entity: &mut Entity) {
        entity.position += entity.velocity;
    }

    /// Negate the velocity component on `axis`.
    #[inline]
    pub fn reflect(&self, entity: &mut Entity, axis: Axis) {
        match axis {
            Axis::X => entity.velocity.x = -entity.velocity.x,
            Axis::Y => entity.velocity.y = -entity.velocity.y,
        }
    }

    /// Reflect `entity` off every edge it has crossed while still heading
    /// outward, returning the walls hit in check order.
    ///
    /// The Bouncy edge is checked first; if it fires, the entity is heading
    /// left again and the right wall cannot fire on the same tick.
    pub fn reflect_at_bounds(&self, entity: &mut Entity) -> Vec<Wall> {
        let b = self.bounds;
        let mut hits = Vec::new();

        if entity.kind == BehaviorKind::Bouncy
            && entity.position.x > b.bouncy_max_x
            && entity.velocity.x > 0.0
        {
            self.reflect(entity, Axis::X);
            hits.push(Wall::BouncyEdge);
        }

        let p = entity.position;
        if p.y < 0.0 && entity.velocity.y < 0.0 {
            self.reflect(entity, Axis::Y);
            hits.push(Wall::Top);
        }
        if p.y > b.height && entity.velocity.y > 0.0 {
            self.reflect(entity, Axis::Y);
            hits.push(Wall::Bottom);
        }
        if p.x < 0.0 && entity.velocity.x < 0.0 {
            self.reflect(entity, Axis::X);
            hits.push(Wall::Left);
        }
        if p.x > b.width && entity.velocity.x > 0.0 {
            self.reflect(entity, Axis::X);
            hits.push(Wall::Right);
        }

        hits
    }

    /// Reflect then move every live entity, in store order.
    ///
    /// Returns `(EntityId, Wall)` for every reflection so the caller can
    /// raise presentation cues (e.g. the player hitting a wall).
    pub fn advance_all(&self, store: &mut EntityStore) -> Vec<(EntityId, Wall)> {
        let mut hits = Vec::new();
        for entity in store.iter_mut() {
            for wall in self.reflect_at_bounds(entity) {
                trace!(entity = %entity.id, ?wall, "reflected");
                hits.push((entity.id, wall));
            }
            self.step(entity);
        }
        hits
    }
}
