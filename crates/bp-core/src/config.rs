//! Run configuration.
//!
//! Every tunable of a round lives in [`ArenaConfig`].  Applications build one
//! in code (starting from `Default`) or, with the `serde` feature, load it
//! from a TOML/JSON file and pass it to the simulation builder.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
///
/// The defaults reproduce the classic 1024×768 arena with thirty random balls
/// and a player ball in the middle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Arena width.  Entities reflect off x = 0 and x = `width`.
    pub width: f64,

    /// Arena height.  Entities reflect off y = 0 and y = `height`.
    pub height: f64,

    /// Number of random entities spawned in addition to the player.
    pub entity_count: usize,

    /// Upper bound (exclusive) of each initial speed component.
    pub starting_max_speed: f64,

    /// Upper bound (exclusive) of a random entity's initial radius.
    pub starting_max_size: f64,

    /// Initial radius of the player entity.
    pub player_radius: f64,

    /// Speed cap of the player entity.
    pub player_max_speed: f64,

    /// Speed cap of autonomously steered entities.
    pub default_max_speed: f64,

    /// Random entities are never spawned closer than this to the player on
    /// either axis.
    pub min_spawn_distance: f64,

    /// Upper bound (exclusive) of each initial speed component for Bouncy
    /// entities; also their speed cap.
    pub bouncy_max_speed: f64,

    /// Right-hand edge of the Bouncy zone.  `None` means `width / 2`.
    pub bouncy_max_x: Option<f64>,

    /// Magnitude added to velocity by one steering or input step.
    pub steering_accel: f64,

    /// Radius transferred by one generic contact.
    pub size_step: f64,

    /// Radius a non-master entity is set to after touching a Master.
    pub master_crush_radius: f64,

    /// Entities whose area is at or below this are eliminated.
    pub elimination_area: f64,

    /// Master RNG seed.  The same seed always produces identical rounds.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width:               1024.0,
            height:              768.0,
            entity_count:        30,
            starting_max_speed:  0.25,
            starting_max_size:   30.0,
            player_radius:       30.0,
            player_max_speed:    5.0,
            default_max_speed:   2.0,
            min_spawn_distance:  20.0,
            bouncy_max_speed:    6.0,
            bouncy_max_x:        None,
            steering_accel:      0.1,
            size_step:           0.1,
            master_crush_radius: 10.0,
            elimination_area:    1.0,
            seed:                42,
        }
    }
}

impl ArenaConfig {
    /// The x coordinate Bouncy entities may not cross while moving right.
    #[inline]
    pub fn bouncy_edge(&self) -> f64 {
        self.bouncy_max_x.unwrap_or(self.width / 2.0)
    }

    /// Check that every field is usable by the simulation.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("starting_max_size", self.starting_max_size),
            ("player_radius", self.player_radius),
            ("player_max_speed", self.player_max_speed),
            ("default_max_speed", self.default_max_speed),
            ("bouncy_max_speed", self.bouncy_max_speed),
            ("starting_max_speed", self.starting_max_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::Config(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("min_spawn_distance", self.min_spawn_distance),
            ("steering_accel", self.steering_accel),
            ("size_step", self.size_step),
            ("master_crush_radius", self.master_crush_radius),
            ("elimination_area", self.elimination_area),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CoreError::Config(format!("{name} must be non-negative, got {value}")));
            }
        }

        let edge = self.bouncy_edge();
        if !(edge.is_finite() && edge > 0.0 && edge <= self.width) {
            return Err(CoreError::Config(format!(
                "bouncy_max_x must lie in (0, {}], got {edge}",
                self.width
            )));
        }

        // The spawn rule rejects positions within `min_spawn_distance` of the
        // player on either axis; leave room for at least one column and row.
        let free_x = self.width - 2.0 * self.min_spawn_distance;
        let free_y = self.height - 2.0 * self.min_spawn_distance;
        if free_x < 1.0 || free_y < 1.0 {
            return Err(CoreError::Config(format!(
                "min_spawn_distance {} leaves no spawn area in a {}x{} arena",
                self.min_spawn_distance, self.width, self.height
            )));
        }

        Ok(())
    }
}
