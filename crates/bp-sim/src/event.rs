//! Round state and the per-tick event stream.

use std::fmt;

use bp_core::EntityId;
use bp_motion::Wall;

/// Where a round is in its lifecycle.
///
/// ```text
/// Initializing ─► Running ─┬─► PlayerLost ─┐
///      ▲                   └─► PlayerWon  ─┤
///      └────────────── restart() ──────────┘
/// ```
///
/// Only `Running` executes the tick pipeline.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum SimState {
    #[default]
    Initializing,
    Running,
    PlayerLost,
    PlayerWon,
}

impl SimState {
    /// `true` once the round has ended either way.
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, SimState::PlayerLost | SimState::PlayerWon)
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimState::Initializing => "initializing",
            SimState::Running      => "running",
            SimState::PlayerLost   => "player-lost",
            SimState::PlayerWon    => "player-won",
        };
        f.write_str(s)
    }
}

/// Something a presentation layer may want to react to.
///
/// Events are returned by [`Sim::tick`][crate::Sim::tick] in the order they
/// happened within the tick: wall hits, then contacts (each followed by
/// `MasterContact` and `PlayerShrunk` if they apply), then eliminations,
/// then at most one end event.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimEvent {
    /// Two entities overlapped.  Emitted for every resolved pair.
    Contact { a: EntityId, b: EntityId },

    /// The preceding contact involved a Master, which crushed `victim`.
    MasterContact { master: EntityId, victim: EntityId },

    /// The preceding contact shrank the player.
    PlayerShrunk,

    /// The player bounced off an arena edge.
    PlayerHitWall(Wall),

    /// An entity fell to the elimination threshold and left the arena.
    Eliminated(EntityId),

    /// The player was eliminated.  Always the last event of its tick.
    PlayerLost,

    /// The player is the only entity left.  Always the last event of its tick.
    PlayerWon,
}
