//! The `Sim` struct and its tick pipeline.

use bp_behavior::BehaviorEngine;
use bp_collision::{CollisionResolver, ContactKind};
use bp_core::{ArenaConfig, BehaviorKind, EntityId, SimRng, Tick};
use bp_entity::{Entity, EntitySpec, EntityStore};
use bp_motion::MotionIntegrator;
use tracing::{debug, info};

use crate::population::populate;
use crate::{EntityView, PlayerInput, SimEvent, SimObserver, SimResult, SimState};

/// How each round is populated.
pub(crate) enum Roster {
    /// One player plus `config.entity_count` random entities.
    Random,
    /// The same entities every round.
    Fixed(Vec<EntitySpec>),
}

/// One arena and everything needed to advance it.
///
/// Each call to [`tick`](Self::tick) runs the five phases in fixed order:
///
/// 1. **Steering**: every entity's rule is planned against pre-move state,
///    then applied in ascending id order.
/// 2. **Motion**: reflect off edges, then `position += velocity`.
/// 3. **Collision**: every overlapping pair is resolved once.
/// 4. **Cleanup**: entities at or below the elimination area are removed.
/// 5. **End check**: the round is lost if the player is gone and won if the
///    player is all that remains.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Round configuration.  Population and player input read it directly;
    /// the phase components below copied their parameters at build time.
    pub config: ArenaConfig,

    /// Steering phase.  Its `table` may be edited between ticks.
    pub behavior: BehaviorEngine,

    /// Motion phase.
    pub motion: MotionIntegrator,

    /// Collision and cleanup phases.
    pub collision: CollisionResolver,

    entities: EntityStore,
    player:   Option<EntityId>,
    state:    SimState,
    tick:     Tick,
    rng:      SimRng,
    roster:   Roster,
}

impl Sim {
    pub(crate) fn assemble(
        rng:       SimRng,
        config:    ArenaConfig,
        roster:    Roster,
        behavior:  BehaviorEngine,
        motion:    MotionIntegrator,
        collision: CollisionResolver,
    ) -> Self {
        let capacity = match &roster {
            Roster::Random       => config.entity_count + 1,
            Roster::Fixed(specs) => specs.len(),
        };
        Self {
            config,
            behavior,
            motion,
            collision,
            entities: EntityStore::with_capacity(capacity),
            player:   None,
            state:    SimState::Initializing,
            tick:     Tick::ZERO,
            rng,
            roster,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Ticks run since the current round started.
    #[inline]
    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    /// The player entity, or `None` if the round has none or it was
    /// eliminated.
    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entities.get(id))
    }

    /// Drawable view of every live entity, in ascending id order.
    pub fn snapshot(&self) -> Vec<EntityView> {
        self.entities.iter().map(EntityView::from).collect()
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Accelerate the player toward the point named by `input`.
    ///
    /// Returns `false` (and changes nothing) when the round is not running
    /// or has no player.
    pub fn set_player_target(&mut self, input: PlayerInput) -> bool {
        if self.state != SimState::Running {
            return false;
        }
        let accel = self.config.steering_accel;
        let Some(player) = self.player.and_then(|id| self.entities.get_mut(id)) else {
            return false;
        };
        let target = input.target(player.position);
        player.accelerate_toward(target, accel);
        true
    }

    /// Take an entity out of the arena immediately.
    ///
    /// Removing the player ends the round as lost; removing the last
    /// non-player entity ends it as won.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.entities.remove(id)?;
        if self.state == SimState::Running {
            self.end_check();
        }
        Some(removed)
    }

    /// Discard the current round and populate a fresh one.
    ///
    /// The RNG stream continues, so a random roster differs from the last
    /// round.  Entity ids keep counting up.
    pub fn restart(&mut self) -> SimResult<()> {
        info!(from = %self.state, tick = %self.tick, "restarting round");
        self.state = SimState::Initializing;
        self.entities.clear();
        self.player = None;
        self.tick = Tick::ZERO;
        self.start_round()
    }

    pub(crate) fn start_round(&mut self) -> SimResult<()> {
        self.player = match &self.roster {
            Roster::Random => Some(populate(&self.config, &mut self.rng, &mut self.entities)?),
            Roster::Fixed(specs) => {
                let mut player = None;
                for spec in specs {
                    let id = self.entities.spawn(spec.clone())?;
                    if spec.kind == BehaviorKind::PlayerControlled {
                        player = Some(id);
                    }
                }
                player
            }
        };
        self.state = SimState::Running;
        info!(entities = self.entities.len(), player = self.player.is_some(), "round started");
        Ok(())
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Advance one tick and return what happened.
    ///
    /// Outside [`SimState::Running`] this does nothing and returns no events.
    pub fn tick(&mut self) -> SimResult<Vec<SimEvent>> {
        if self.state != SimState::Running {
            return Ok(Vec::new());
        }
        let now = self.tick;
        let mut events = Vec::new();

        // ── Phase 1: steering ─────────────────────────────────────────────
        let steered = self.behavior.run(&mut self.entities, now);

        // ── Phase 2: motion ───────────────────────────────────────────────
        for (id, wall) in self.motion.advance_all(&mut self.entities) {
            if Some(id) == self.player {
                events.push(SimEvent::PlayerHitWall(wall));
            }
        }

        // ── Phase 3: collision ────────────────────────────────────────────
        let report = self.collision.resolve_all(&mut self.entities, self.player);
        for outcome in report.iter() {
            events.push(SimEvent::Contact { a: outcome.a, b: outcome.b });
            if let ContactKind::MasterCrush { master, victim } = outcome.kind {
                events.push(SimEvent::MasterContact { master, victim });
            }
            if outcome.player_shrunk {
                events.push(SimEvent::PlayerShrunk);
            }
        }

        // ── Phase 4: cleanup ──────────────────────────────────────────────
        let removed = self.collision.cleanup(&mut self.entities);
        events.extend(removed.iter().map(|e| SimEvent::Eliminated(e.id)));

        // ── Phase 5: end conditions ───────────────────────────────────────
        if let Some(end) = self.end_check() {
            events.push(end);
        }

        debug!(
            tick = %now,
            steered,
            contacts = report.len(),
            eliminated = removed.len(),
            live = self.entities.len(),
            "tick"
        );
        self.tick.advance();
        Ok(events)
    }

    /// Run up to `n` ticks, stopping early if the round ends.
    ///
    /// Returns the number of ticks actually run.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut ran = 0;
        while ran < n && self.state == SimState::Running {
            let now = self.tick;
            let before = self.state;

            observer.on_tick_start(now);
            let events = self.tick()?;
            if !events.is_empty() {
                observer.on_events(now, &events);
            }
            observer.on_tick_end(now, self.entities.len());
            if self.state != before {
                observer.on_state_change(now, before, self.state);
            }
            ran += 1;
        }
        Ok(ran)
    }

    /// Move to an end state if one applies, returning its event.
    fn end_check(&mut self) -> Option<SimEvent> {
        let player = self.player?;
        let (state, event) = if !self.entities.contains(player) {
            self.player = None;
            (SimState::PlayerLost, SimEvent::PlayerLost)
        } else if self.entities.len() == 1 {
            (SimState::PlayerWon, SimEvent::PlayerWon)
        } else {
            return None;
        };
        info!(tick = %self.tick, %state, "round over");
        self.state = state;
        Some(event)
    }
}
