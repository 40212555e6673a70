//! Simulation time.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one full
//! pass of the pipeline (steering, motion, collision, cleanup); the mapping
//! to frames is owned by whatever drives the loop.

use std::fmt;

/// An absolute simulation tick counter, reset to zero on every restart.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Advance by one tick in place.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
