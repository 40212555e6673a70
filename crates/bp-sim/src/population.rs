//! Random round setup: one player in the middle, everyone else scattered.

use bp_core::{ArenaConfig, BehaviorKind, EntityId, SimRng, Vec2};
use bp_entity::{EntitySpec, EntityStore};
use tracing::debug;

use crate::{SimError, SimResult};

/// Redraws allowed per entity before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Number of faces on the kind die.  See [`kind_for_roll`].
pub const KIND_ROLL_SIDES: u32 = 12;

/// Map a roll in `0..KIND_ROLL_SIDES` to a kind.
///
/// | Roll   | Kind        |
/// |--------|-------------|
/// | 0      | Plain       |
/// | 1–2    | Evading     |
/// | 3–5    | Consuming   |
/// | 6–8    | Intelligent |
/// | 9–10   | Master      |
/// | 11     | Bouncy      |
pub fn kind_for_roll(roll: u32) -> BehaviorKind {
    match roll {
        0      => BehaviorKind::Plain,
        1..=2  => BehaviorKind::Evading,
        3..=5  => BehaviorKind::Consuming,
        6..=8  => BehaviorKind::Intelligent,
        9..=10 => BehaviorKind::Master,
        _      => BehaviorKind::Bouncy,
    }
}

/// The player: centered, stationary, `player_radius` wide.
pub fn player_spec(config: &ArenaConfig) -> EntitySpec {
    let center = Vec2::new(config.width / 2.0, config.height / 2.0);
    EntitySpec::new(BehaviorKind::PlayerControlled, center, config.player_radius)
        .with_max_speed(config.player_max_speed)
}

/// Draw one non-player entity.
///
/// Positions are whole numbers.  A draw closer than `min_spawn_distance` to
/// `player_at` on *either* axis is rejected and redrawn, so the exclusion
/// zone is a cross through the player rather than a box around it.
///
/// # Errors
///
/// [`SimError::Config`] if no acceptable position turns up within
/// [`MAX_PLACEMENT_ATTEMPTS`] draws.
pub fn random_spec(config: &ArenaConfig, rng: &mut SimRng, player_at: Vec2) -> SimResult<EntitySpec> {
    let position = draw_position(config, rng, player_at)?;
    let kind = kind_for_roll(rng.gen_range(0..KIND_ROLL_SIDES));

    let (speed_cap, max_speed) = match kind {
        BehaviorKind::Bouncy => (config.bouncy_max_speed, config.bouncy_max_speed),
        _ => (config.starting_max_speed, config.default_max_speed),
    };
    let velocity = Vec2::new(signed(rng, speed_cap), signed(rng, speed_cap));
    let radius = rng.gen_range(f64::MIN_POSITIVE..config.starting_max_size);

    let mut position = position;
    let edge = config.bouncy_edge();
    if kind == BehaviorKind::Bouncy && position.x > edge {
        position.x = config.width - edge;
    }

    Ok(EntitySpec::new(kind, position, radius)
        .with_velocity(velocity)
        .with_max_speed(max_speed))
}

/// Spawn the player plus `config.entity_count` random entities into `store`.
///
/// The player is spawned first, so it holds the lowest id of the round.
pub fn populate(config: &ArenaConfig, rng: &mut SimRng, store: &mut EntityStore) -> SimResult<EntityId> {
    let player = player_spec(config);
    let player_at = player.position;
    let player_id = store.spawn(player)?;

    for _ in 0..config.entity_count {
        let spec = random_spec(config, rng, player_at)?;
        store.spawn(spec)?;
    }

    debug!(player = %player_id, others = config.entity_count, "arena populated");
    Ok(player_id)
}

fn draw_position(config: &ArenaConfig, rng: &mut SimRng, player_at: Vec2) -> SimResult<Vec2> {
    let max_x = (config.width as u32).max(1);
    let max_y = (config.height as u32).max(1);

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let p = Vec2::new(rng.gen_range(0..max_x) as f64, rng.gen_range(0..max_y) as f64);
        let too_close = (p.x - player_at.x).abs() < config.min_spawn_distance
            || (p.y - player_at.y).abs() < config.min_spawn_distance;
        if !too_close {
            return Ok(p);
        }
    }
    Err(SimError::Config(format!(
        "no spawn position at least {} from the player after {MAX_PLACEMENT_ATTEMPTS} draws",
        config.min_spawn_distance
    )))
}

/// Uniform in `[0, max)` with a coin-flip sign.
fn signed(rng: &mut SimRng, max: f64) -> f64 {
    let magnitude = rng.gen_range(0.0..max);
    if rng.gen_bool(0.5) { -magnitude } else { magnitude }
}
