//! Read-only simulation state passed to every steering rule.

use bp_core::Tick;
use bp_entity::{Entity, EntityStore};

/// A read-only snapshot of the active set for one tick's plan step.
///
/// All borrows live for the duration of the plan step; the engine never
/// mutates the store while a `SteeringContext` is live.
pub struct SteeringContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Every live entity, in ascending id order.
    pub entities: &'a EntityStore,
}

impl<'a> SteeringContext<'a> {
    #[inline]
    pub fn new(tick: Tick, entities: &'a EntityStore) -> Self {
        Self { tick, entities }
    }

    /// Nearest other entity to `entity` across the whole active set, or
    /// `None` when `entity` is alone.
    pub fn nearest(&self, entity: &Entity) -> Option<&'a Entity> {
        match crate::closest(entity, self.entities.iter()) {
            Ok(neighbor) => Some(neighbor),
            Err(e) => {
                tracing::trace!(tick = %self.tick, "{e}; steering skipped");
                None
            }
        }
    }
}
