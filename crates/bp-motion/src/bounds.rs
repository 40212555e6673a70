//! Arena geometry.

use bp_core::ArenaConfig;

/// A velocity axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    X,
    Y,
}

/// The edge an entity bounced off.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
    /// The right-hand edge of the Bouncy zone.
    BouncyEdge,
}

impl Wall {
    /// The velocity axis a reflection off this wall negates.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Wall::Top | Wall::Bottom => Axis::Y,
            Wall::Left | Wall::Right | Wall::BouncyEdge => Axis::X,
        }
    }
}

/// The arena rectangle `[0, width] × [0, height]` plus the Bouncy edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width:        f64,
    pub height:       f64,
    pub bouncy_max_x: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64, bouncy_max_x: f64) -> Self {
        Self { width, height, bouncy_max_x }
    }

    /// Bounds with the Bouncy edge at the horizontal midpoint.
    pub fn with_midpoint_edge(width: f64, height: f64) -> Self {
        Self::new(width, height, width / 2.0)
    }
}

impl From<&ArenaConfig> for Bounds {
    fn from(config: &ArenaConfig) -> Self {
        Self::new(config.width, config.height, config.bouncy_edge())
    }
}
