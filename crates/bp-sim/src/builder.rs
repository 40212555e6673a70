//! Fluent builder for constructing a [`Sim`].

use bp_behavior::{BehaviorEngine, SteeringTable};
use bp_collision::{CollisionResolver, CollisionRules};
use bp_core::{ArenaConfig, BehaviorKind, SimRng};
use bp_entity::{EntityError, EntitySpec};
use bp_motion::{Bounds, MotionIntegrator};

use crate::sim::Roster;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `.entities(v)`    | Random population drawn from the config     |
/// | `.steering(t)`    | `SteeringTable::default()`                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(ArenaConfig::default()).build()?;
/// sim.run_ticks(600, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   ArenaConfig,
    roster:   Roster,
    steering: Option<SteeringTable>,
}

impl SimBuilder {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            roster:   Roster::Random,
            steering: None,
        }
    }

    /// Start every round with exactly these entities instead of a random
    /// population.
    ///
    /// The spec of kind `PlayerControlled`, if any, becomes the player.  At
    /// most one is allowed.
    pub fn entities(mut self, specs: Vec<EntitySpec>) -> Self {
        self.roster = Roster::Fixed(specs);
        self
    }

    /// Replace the per-kind steering rules.
    pub fn steering(mut self, table: SteeringTable) -> Self {
        self.steering = Some(table);
        self
    }

    /// Validate inputs, populate the first round, and return a running
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if let Roster::Fixed(specs) = &self.roster {
            let players = specs
                .iter()
                .filter(|s| s.kind == BehaviorKind::PlayerControlled)
                .count();
            if players > 1 {
                return Err(SimError::Config(format!(
                    "at most one player entity allowed, got {players}"
                )));
            }
            for spec in specs {
                spec.validate().map_err(EntityError::from)?;
            }
        }

        let behavior = BehaviorEngine::new(
            self.steering.unwrap_or_default(),
            self.config.steering_accel,
        );
        let motion = MotionIntegrator::new(Bounds::from(&self.config));
        let collision = CollisionResolver::new(CollisionRules::from(&self.config));

        let mut sim = Sim::assemble(
            SimRng::new(self.config.seed),
            self.config,
            self.roster,
            behavior,
            motion,
            collision,
        );
        sim.start_round()?;
        Ok(sim)
    }
}
