//! The steering phase of the tick.

use bp_core::{ArenaConfig, EntityId, Tick};
use bp_entity::EntityStore;
use tracing::trace;

use crate::{Steer, SteeringContext, SteeringTable};

/// Runs every live entity's steering rule and applies the results.
pub struct BehaviorEngine {
    pub table: SteeringTable,

    /// Magnitude added to velocity by one [`Steer`].
    pub accel: f64,
}

impl BehaviorEngine {
    pub fn new(table: SteeringTable, accel: f64) -> Self {
        Self { table, accel }
    }

    /// Plan step: evaluate each entity's rule against the unmodified store.
    ///
    /// Output is in ascending id order.  Entities whose rule returns `None`
    /// (idle kinds, or a rule that found no neighbor) are absent.
    pub fn plan(&self, store: &EntityStore, tick: Tick) -> Vec<(EntityId, Steer)> {
        let ctx = SteeringContext::new(tick, store);
        store
            .iter()
            .filter_map(|entity| {
                self.table
                    .rule(entity.kind)
                    .steer(entity, &ctx)
                    .map(|steer| (entity.id, steer))
            })
            .collect()
    }

    /// Apply step: adjust velocities in list order.  Ids no longer in the
    /// store are skipped.
    pub fn apply(&self, store: &mut EntityStore, plans: &[(EntityId, Steer)]) {
        for &(id, steer) in plans {
            match store.get_mut(id) {
                Some(entity) => steer.apply_to(entity, self.accel),
                None => trace!(entity = %id, "steer target vanished before apply"),
            }
        }
    }

    /// Plan then apply.  Returns the number of entities that steered.
    pub fn run(&self, store: &mut EntityStore, tick: Tick) -> usize {
        let plans = self.plan(store, tick);
        self.apply(store, &plans);
        plans.len()
    }
}

impl Default for BehaviorEngine {
    fn default() -> Self {
        Self::new(SteeringTable::default(), ArenaConfig::default().steering_accel)
    }
}
