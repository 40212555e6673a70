//! Behavior kinds and their presentation color tags.
//!
//! Every kind is always compiled in.  The steering rule attached to each
//! kind lives in `bp-behavior`'s `SteeringTable`; this enum is only the key.

/// The steering rule an entity follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    /// No autonomous steering (default state).
    #[default]
    Plain,
    /// Always accelerates toward the nearest entity.
    Consuming,
    /// Always accelerates away from the nearest entity.
    Evading,
    /// Chases smaller neighbors, flees larger ones.
    Intelligent,
    /// Crushes whatever touches it, and itself.
    Master,
    /// Fast, no steering, confined to the left half of the arena.
    Bouncy,
    /// Steered only by external input.
    PlayerControlled,
}

impl BehaviorKind {
    /// Every kind, in declaration order.
    pub const ALL: [BehaviorKind; 7] = [
        BehaviorKind::Plain,
        BehaviorKind::Consuming,
        BehaviorKind::Evading,
        BehaviorKind::Intelligent,
        BehaviorKind::Master,
        BehaviorKind::Bouncy,
        BehaviorKind::PlayerControlled,
    ];

    /// Number of kinds; sizes per-kind lookup tables.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..COUNT` for table lookups.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, useful for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::Plain            => "plain",
            BehaviorKind::Consuming        => "consuming",
            BehaviorKind::Evading          => "evading",
            BehaviorKind::Intelligent      => "intelligent",
            BehaviorKind::Master           => "master",
            BehaviorKind::Bouncy           => "bouncy",
            BehaviorKind::PlayerControlled => "player",
        }
    }

    /// Default draw color for this kind.
    pub fn color(self) -> Rgb {
        match self {
            BehaviorKind::Plain            => Rgb(175, 0, 255),
            BehaviorKind::Consuming        => Rgb(255, 0, 0),
            BehaviorKind::Evading          => Rgb(0, 255, 50),
            BehaviorKind::Intelligent      => Rgb(0, 0, 255),
            BehaviorKind::Master           => Rgb(200, 102, 0),
            BehaviorKind::Bouncy           => Rgb(255, 255, 0),
            BehaviorKind::PlayerControlled => Rgb(0, 0, 0),
        }
    }

    #[inline]
    pub fn is_master(self) -> bool {
        matches!(self, BehaviorKind::Master)
    }
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An 8-bit RGB color tag consumed by the presentation layer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);
