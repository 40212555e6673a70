//! Pairwise contact resolution and the cleanup pass.

use bp_core::EntityId;
use bp_entity::{Entity, EntityStore};
use tracing::{debug, trace};

use crate::{CollisionReport, CollisionRules, ContactKind, ContactOutcome, overlaps};

/// Applies the grow/shrink and master-crush rules to every overlapping pair.
#[derive(Copy, Clone, Debug, Default)]
pub struct CollisionResolver {
    pub rules: CollisionRules,
}

impl CollisionResolver {
    pub fn new(rules: CollisionRules) -> Self {
        Self { rules }
    }

    /// Test and resolve every unordered pair once.
    ///
    /// `player` is only used to flag contacts that shrank it; pass `None`
    /// when the round has no player.  No entity is removed here.
    pub fn resolve_all(&self, store: &mut EntityStore, player: Option<EntityId>) -> CollisionReport {
        let mut report = CollisionReport::default();
        let n = store.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = store.pair_mut(i, j);
                if !overlaps(a, b) {
                    continue;
                }

                let before = (a.radius, b.radius);
                let kind = self.resolve_pair(a, b);
                let player_shrunk = match player {
                    Some(p) if p == a.id => a.radius < before.0,
                    Some(p) if p == b.id => b.radius < before.1,
                    _ => false,
                };

                trace!(a = %a.id, b = %b.id, ?kind, "contact");
                report.outcomes.push(ContactOutcome { a: a.id, b: b.id, kind, player_shrunk });
            }
        }
        report
    }

    /// Resolve one overlapping pair in place.
    ///
    /// A Master on either side takes precedence over the generic rule.  When
    /// both are Masters, `a` is treated as the crusher.
    pub fn resolve_pair(&self, a: &mut Entity, b: &mut Entity) -> ContactKind {
        if a.kind.is_master() {
            self.crush(a, b)
        } else if b.kind.is_master() {
            self.crush(b, a)
        } else if a.radius > b.radius {
            a.grow(self.rules.size_step);
            b.shrink(self.rules.size_step);
            ContactKind::Generic { grower: a.id, shrinker: b.id }
        } else {
            // Equal radii land here too: the first operand gives way.
            a.shrink(self.rules.size_step);
            b.grow(self.rules.size_step);
            ContactKind::Generic { grower: b.id, shrinker: a.id }
        }
    }

    fn crush(&self, master: &mut Entity, victim: &mut Entity) -> ContactKind {
        victim.radius = self.rules.master_crush_radius;
        master.radius = 0.0;
        ContactKind::MasterCrush { master: master.id, victim: victim.id }
    }

    /// Remove every entity whose area is at or below the elimination
    /// threshold.  Returned in store order, each with `alive` cleared.
    pub fn cleanup(&self, store: &mut EntityStore) -> Vec<Entity> {
        let threshold = self.rules.elimination_area;
        let removed = store.remove_where(|e| e.area() <= threshold);
        for e in &removed {
            debug!(entity = %e.id, kind = %e.kind, radius = e.radius, "eliminated");
        }
        removed
    }
}
