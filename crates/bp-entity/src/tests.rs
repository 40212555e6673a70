//! Unit tests for bp-entity.

use bp_core::{BehaviorKind, Vec2};

use crate::{EntitySpec, EntityStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plain(x: f64, y: f64, radius: f64) -> EntitySpec {
    EntitySpec::new(BehaviorKind::Plain, Vec2::new(x, y), radius)
}

// ── EntitySpec validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod spec_tests {
    use bp_core::CoreError;

    use super::*;

    #[test]
    fn valid_spec_passes() {
        assert!(plain(1.0, 2.0, 3.0).validate().is_ok());
    }

    #[test]
    fn new_spec_uses_configured_speed_cap() {
        let spec = plain(1.0, 2.0, 3.0);
        assert_eq!(spec.max_speed, bp_core::ArenaConfig::default().default_max_speed);
        assert_eq!(spec.velocity, Vec2::ZERO);
    }

    #[test]
    fn negative_radius_rejected() {
        assert_eq!(plain(0.0, 0.0, -1.0).validate(), Err(CoreError::InvalidRadius(-1.0)));
    }

    #[test]
    fn zero_radius_rejected() {
        assert!(plain(0.0, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn nan_position_rejected() {
        let err = plain(f64::NAN, 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, CoreError::NonFinite { what: "position", .. }));
    }

    #[test]
    fn infinite_velocity_rejected() {
        let spec = plain(0.0, 0.0, 1.0).with_velocity(Vec2::new(0.0, f64::INFINITY));
        assert!(matches!(spec.validate(), Err(CoreError::NonFinite { what: "velocity", .. })));
    }
}

// ── Entity mutation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod entity_tests {
    use std::f64::consts::PI;

    use super::*;

    fn spawn_one(spec: EntitySpec) -> EntityStore {
        let mut store = EntityStore::new();
        store.spawn(spec).unwrap();
        store
    }

    #[test]
    fn area_is_pi_r_squared() {
        let store = spawn_one(plain(0.0, 0.0, 2.0));
        assert!((store.as_slice()[0].area() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn color_follows_kind() {
        let store = spawn_one(EntitySpec::new(BehaviorKind::Evading, Vec2::ZERO, 1.0));
        assert_eq!(store.as_slice()[0].color, BehaviorKind::Evading.color());
    }

    #[test]
    fn shrink_clamps_at_zero() {
        let mut store = spawn_one(plain(0.0, 0.0, 0.05));
        let e = &mut store.as_mut_slice()[0];
        e.shrink(0.1);
        assert_eq!(e.radius, 0.0);
        e.grow(0.1);
        assert!((e.radius - 0.1).abs() < 1e-12);
    }

    #[test]
    fn accelerate_toward_adds_unit_step() {
        let mut store = spawn_one(plain(0.0, 0.0, 1.0));
        let e = &mut store.as_mut_slice()[0];
        e.accelerate_toward(Vec2::new(10.0, 0.0), 0.5);
        assert_eq!(e.velocity, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn accelerate_away_subtracts_unit_step() {
        let mut store = spawn_one(plain(0.0, 0.0, 1.0));
        let e = &mut store.as_mut_slice()[0];
        e.accelerate_away(Vec2::new(0.0, 10.0), 0.5);
        assert_eq!(e.velocity, Vec2::new(0.0, -0.5));
    }

    #[test]
    fn accelerate_respects_max_speed() {
        let mut store = spawn_one(plain(0.0, 0.0, 1.0).with_max_speed(1.0));
        let e = &mut store.as_mut_slice()[0];
        for _ in 0..50 {
            e.accelerate_toward(Vec2::new(3.0, 4.0), 0.3);
        }
        assert!((e.velocity.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn accelerate_toward_self_is_noop() {
        let mut store = spawn_one(plain(5.0, 5.0, 1.0).with_velocity(Vec2::new(0.2, 0.1)));
        let e = &mut store.as_mut_slice()[0];
        e.accelerate_toward(Vec2::new(5.0, 5.0), 1.0);
        e.accelerate_away(Vec2::new(5.0, 5.0), 1.0);
        assert_eq!(e.velocity, Vec2::new(0.2, 0.1));
        assert!(e.velocity.is_finite());
    }
}

// ── EntityStore ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use bp_core::EntityId;

    use crate::EntityError;

    use super::*;

    fn three() -> EntityStore {
        let mut store = EntityStore::with_capacity(3);
        for i in 0..3 {
            store.spawn(plain(i as f64, 0.0, 1.0)).unwrap();
        }
        store
    }

    #[test]
    fn ids_are_sequential() {
        let store = three();
        let ids: Vec<_> = store.ids().collect();
        assert_eq!(ids, vec![EntityId(0), EntityId(1), EntityId(2)]);
    }

    #[test]
    fn invalid_spawn_leaves_store_unchanged() {
        let mut store = three();
        let err = store.spawn(plain(0.0, 0.0, -3.0)).unwrap_err();
        assert!(matches!(err, EntityError::Invalid(_)));
        assert_eq!(store.len(), 3);
        // The rejected spawn did not consume an id.
        assert_eq!(store.spawn(plain(0.0, 0.0, 1.0)).unwrap(), EntityId(3));
    }

    #[test]
    fn remove_returns_dead_entity() {
        let mut store = three();
        let removed = store.remove(EntityId(1)).unwrap();
        assert!(!removed.alive);
        assert_eq!(removed.id, EntityId(1));
        assert!(!store.contains(EntityId(1)));
        assert!(store.remove(EntityId(1)).is_none());
    }

    #[test]
    fn ids_never_reused_after_removal_or_clear() {
        let mut store = three();
        store.remove(EntityId(2));
        assert_eq!(store.spawn(plain(0.0, 0.0, 1.0)).unwrap(), EntityId(3));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.spawn(plain(0.0, 0.0, 1.0)).unwrap(), EntityId(4));
    }

    #[test]
    fn lookup_after_removal() {
        let mut store = three();
        store.remove(EntityId(0));
        assert_eq!(store.index_of(EntityId(2)), Some(1));
        assert_eq!(store.get(EntityId(2)).unwrap().position, Vec2::new(2.0, 0.0));
        assert!(store.get(EntityId(0)).is_none());
    }

    #[test]
    fn remove_where_preserves_order() {
        let mut store = three();
        store.spawn(plain(3.0, 0.0, 1.0)).unwrap();
        let removed = store.remove_where(|e| e.id.0 % 2 == 1);
        let removed_ids: Vec<_> = removed.iter().map(|e| e.id).collect();
        assert_eq!(removed_ids, vec![EntityId(1), EntityId(3)]);
        assert!(removed.iter().all(|e| !e.alive));
        let kept: Vec<_> = store.ids().collect();
        assert_eq!(kept, vec![EntityId(0), EntityId(2)]);
        assert!(store.iter().all(|e| e.alive));
    }

    #[test]
    fn pair_mut_is_disjoint_both_orders() {
        let mut store = three();
        {
            let (a, b) = store.pair_mut(0, 2);
            assert_eq!((a.id, b.id), (EntityId(0), EntityId(2)));
            a.grow(1.0);
        }
        let (b, a) = store.pair_mut(2, 0);
        assert_eq!((b.id, a.id), (EntityId(2), EntityId(0)));
        assert_eq!(a.radius, 2.0);
    }

    #[test]
    #[should_panic]
    fn pair_mut_same_slot_panics() {
        let mut store = three();
        let _ = store.pair_mut(1, 1);
    }
}
