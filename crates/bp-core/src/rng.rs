//! Deterministic simulation-level RNG wrapper.
//!
//! All randomness in a run (population placement, kinds, speeds, sizes) is
//! drawn from one `SimRng` seeded from `ArenaConfig::seed`.  The tick
//! pipeline itself is deterministic, so the same seed always replays the
//! same round.  A restart keeps drawing from the same stream rather than
//! reseeding, so consecutive rounds differ.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Used only from the single-threaded tick owner.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
