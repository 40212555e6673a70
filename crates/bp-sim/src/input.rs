//! Player steering input.

use bp_core::Vec2;

/// One of the four arrow directions, in screen coordinates (y grows
/// downward).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction.
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up    => Vec2::new(0.0, -1.0),
            Direction::Down  => Vec2::new(0.0, 1.0),
            Direction::Left  => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// What the player asked for this frame.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PlayerInput {
    /// Accelerate toward an arena point (pointer position).
    Point(Vec2),
    /// Accelerate toward the point one unit away in a direction (key press).
    Nudge(Direction),
}

impl PlayerInput {
    /// The point the player should accelerate toward, given where it is now.
    pub fn target(self, from: Vec2) -> Vec2 {
        match self {
            PlayerInput::Point(p) => p,
            PlayerInput::Nudge(d) => from + d.unit(),
        }
    }
}
