//! Unit tests for bp-motion.

use bp_core::{ArenaConfig, BehaviorKind, EntityId, Vec2};
use bp_entity::{EntitySpec, EntityStore};

use crate::{Axis, Bounds, MotionIntegrator, Wall};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn integrator() -> MotionIntegrator {
    MotionIntegrator::new(Bounds::with_midpoint_edge(100.0, 80.0))
}

fn store_with(kind: BehaviorKind, pos: Vec2, vel: Vec2) -> EntityStore {
    let mut store = EntityStore::new();
    store
        .spawn(EntitySpec::new(kind, pos, 1.0).with_velocity(vel).with_max_speed(10.0))
        .unwrap();
    store
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds_tests {
    use super::*;

    #[test]
    fn from_config_uses_midpoint_by_default() {
        let b = Bounds::from(&ArenaConfig::default());
        assert_eq!(b.width, 1024.0);
        assert_eq!(b.height, 768.0);
        assert_eq!(b.bouncy_max_x, 512.0);
    }

    #[test]
    fn wall_axes() {
        assert_eq!(Wall::Top.axis(), Axis::Y);
        assert_eq!(Wall::Bottom.axis(), Axis::Y);
        assert_eq!(Wall::Left.axis(), Axis::X);
        assert_eq!(Wall::BouncyEdge.axis(), Axis::X);
    }
}

// ── Step / reflect ────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn step_adds_velocity() {
        let mut store = store_with(BehaviorKind::Plain, Vec2::new(10.0, 10.0), Vec2::new(1.5, -2.0));
        integrator().step(&mut store.as_mut_slice()[0]);
        assert_eq!(store.as_slice()[0].position, Vec2::new(11.5, 8.0));
    }

    #[test]
    fn step_does_not_clamp_outside_arena() {
        let mut store = store_with(BehaviorKind::Plain, Vec2::new(-5.0, 10.0), Vec2::new(-1.0, 0.0));
        integrator().step(&mut store.as_mut_slice()[0]);
        assert_eq!(store.as_slice()[0].position.x, -6.0);
    }

    #[test]
    fn reflect_negates_one_axis() {
        let mut store = store_with(BehaviorKind::Plain, Vec2::ZERO, Vec2::new(2.0, 3.0));
        let e = &mut store.as_mut_slice()[0];
        integrator().reflect(e, Axis::X);
        assert_eq!(e.velocity, Vec2::new(-2.0, 3.0));
        integrator().reflect(e, Axis::Y);
        assert_eq!(e.velocity, Vec2::new(-2.0, -3.0));
    }

    #[test]
    fn inside_arena_no_reflection() {
        let mut store = store_with(BehaviorKind::Plain, Vec2::new(50.0, 40.0), Vec2::new(-3.0, 3.0));
        let hits = integrator().reflect_at_bounds(&mut store.as_mut_slice()[0]);
        assert!(hits.is_empty());
        assert_eq!(store.as_slice()[0].velocity, Vec2::new(-3.0, 3.0));
    }

    #[test]
    fn each_wall_reflects_outward_motion() {
        let cases = [
            (Vec2::new(50.0, -1.0), Vec2::new(0.0, -1.0), Wall::Top, Vec2::new(0.0, 1.0)),
            (Vec2::new(50.0, 81.0), Vec2::new(0.0, 1.0), Wall::Bottom, Vec2::new(0.0, -1.0)),
            (Vec2::new(-1.0, 40.0), Vec2::new(-1.0, 0.0), Wall::Left, Vec2::new(1.0, 0.0)),
            (Vec2::new(101.0, 40.0), Vec2::new(1.0, 0.0), Wall::Right, Vec2::new(-1.0, 0.0)),
        ];
        for (pos, vel, wall, expected) in cases {
            let mut store = store_with(BehaviorKind::Plain, pos, vel);
            let hits = integrator().reflect_at_bounds(&mut store.as_mut_slice()[0]);
            assert_eq!(hits, vec![wall]);
            assert_eq!(store.as_slice()[0].velocity, expected);
        }
    }

    #[test]
    fn corner_reflects_both_axes() {
        let mut store = store_with(BehaviorKind::Plain, Vec2::new(-1.0, -1.0), Vec2::new(-1.0, -2.0));
        let hits = integrator().reflect_at_bounds(&mut store.as_mut_slice()[0]);
        assert_eq!(hits, vec![Wall::Top, Wall::Left]);
        assert_eq!(store.as_slice()[0].velocity, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn left_crossing_flips_once() {
        // Entity starts inside, heading left fast enough to cross x = 0.
        let mut store = store_with(BehaviorKind::Plain, Vec2::new(1.0, 40.0), Vec2::new(-3.0, 0.0));
        let motion = integrator();

        let mut flips = 0;
        for _ in 0..4 {
            flips += motion
                .advance_all(&mut store)
                .iter()
                .filter(|(_, w)| *w == Wall::Left)
                .count();
        }
        // Tick 1: x = -2 (no flip yet), tick 2: flip and move to x = 1,
        // ticks 3-4: inside, heading right.
        assert_eq!(flips, 1);
        assert_eq!(store.as_slice()[0].velocity.x, 3.0);
    }

    #[test]
    fn beyond_edge_but_returning_not_reflected() {
        // Outside the arena but already heading back in: must not flip again.
        let mut store = store_with(BehaviorKind::Plain, Vec2::new(-4.0, 40.0), Vec2::new(0.5, 0.0));
        let motion = integrator();
        for _ in 0..3 {
            assert!(motion.advance_all(&mut store).is_empty());
        }
        assert_eq!(store.as_slice()[0].velocity.x, 0.5);
    }
}

// ── Bouncy zone ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod bouncy_tests {
    use super::*;

    #[test]
    fn bouncy_reflects_at_midpoint() {
        let mut store = store_with(BehaviorKind::Bouncy, Vec2::new(51.0, 40.0), Vec2::new(4.0, 0.0));
        let hits = integrator().reflect_at_bounds(&mut store.as_mut_slice()[0]);
        assert_eq!(hits, vec![Wall::BouncyEdge]);
        assert_eq!(store.as_slice()[0].velocity.x, -4.0);
    }

    #[test]
    fn bouncy_moving_left_past_midpoint_untouched() {
        let mut store = store_with(BehaviorKind::Bouncy, Vec2::new(60.0, 40.0), Vec2::new(-4.0, 0.0));
        let hits = integrator().reflect_at_bounds(&mut store.as_mut_slice()[0]);
        assert!(hits.is_empty());
    }

    #[test]
    fn bouncy_beyond_right_wall_reflects_once() {
        // Past both the Bouncy edge and the right wall: one flip, not two.
        let mut store = store_with(BehaviorKind::Bouncy, Vec2::new(120.0, 40.0), Vec2::new(2.0, 0.0));
        let hits = integrator().reflect_at_bounds(&mut store.as_mut_slice()[0]);
        assert_eq!(hits, vec![Wall::BouncyEdge]);
        assert_eq!(store.as_slice()[0].velocity.x, -2.0);
    }

    #[test]
    fn other_kinds_ignore_bouncy_edge() {
        let mut store = store_with(BehaviorKind::Consuming, Vec2::new(51.0, 40.0), Vec2::new(4.0, 0.0));
        let hits = integrator().advance_all(&mut store);
        assert!(hits.is_empty());
        assert_eq!(store.as_slice()[0].position.x, 55.0);
    }

    #[test]
    fn advance_all_reports_entity_ids() {
        let mut store = store_with(BehaviorKind::Bouncy, Vec2::new(51.0, 40.0), Vec2::new(4.0, 0.0));
        store
            .spawn(EntitySpec::new(BehaviorKind::Plain, Vec2::new(-1.0, 10.0), 1.0)
                .with_velocity(Vec2::new(-1.0, 0.0)))
            .unwrap();
        let hits = integrator().advance_all(&mut store);
        assert_eq!(hits, vec![(EntityId(0), Wall::BouncyEdge), (EntityId(1), Wall::Left)]);
        assert_eq!(store.as_slice()[0].position.x, 47.0);
        assert_eq!(store.as_slice()[1].position.x, 0.0);
    }
}
