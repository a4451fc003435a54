//! Seeded random streams.
//!
//! Nothing in the engine reads a global random source.  A run owns one root
//! `SimRng` seeded from `SimConfig::seed` and splits it with
//! [`SimRng::child`]: the population stream and the tie-break stream are
//! siblings, so drawing extra agents never changes which ties go which way.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio multiplier spreading small stream offsets over `u64`.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A deterministic stream over `SmallRng`.  Not shared across threads.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream tagged by `offset`.
    ///
    /// Advances `self` by one draw, so the order of `child` calls matters.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let draw: u64 = self.0.r#gen();
        SimRng::new(draw ^ offset.wrapping_mul(MIXING_CONSTANT))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`, clamped into `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Fair coin.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// In-place uniform permutation.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
