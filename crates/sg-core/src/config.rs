//! Engine configuration.
//!
//! Fixed for the simulation's lifetime: the engine reads it once at
//! construction and never mutates it.

use crate::{Archetype, SgError, SgResult};

/// How the four neighbor contributions of a cell combine into one score.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringRule {
    /// Add every neighbor's contribution.
    #[default]
    Sum,
    /// Keep only the contribution of the last neighbor in
    /// [`Direction::ALL`](crate::Direction::ALL) order, i.e. the `Left` one.
    /// An empty or out-of-range `Left` neighbor yields `0`.  Matches the
    /// historical behavior of the model.
    LastNeighbor,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Side length of the square grid.
    pub grid_size: u32,

    /// Magnitude a matching (`+`) or non-matching (`-`) neighbor adds to a
    /// cell's score.  Shared by all archetypes.  In `(0, 1)`.
    pub intolerance: f32,

    /// Fraction of cells populated at start.  In `(0, 1)`.
    pub occupancy: f32,

    /// Archetypes taking part, in order.  Non-empty and pairwise distinct.
    pub archetypes: Vec<Archetype>,

    /// Wall-clock seconds one turn's animation spans.  `advance(dt)` moves
    /// progress by `dt / turn_duration_secs`.
    pub turn_duration_secs: f32,

    pub scoring: ScoringRule,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// Largest grid whose cell count fits comfortably in `i32` arithmetic.
    pub const MAX_GRID_SIZE: u32 = 46_340;

    /// Check every constraint, returning the first violation.
    pub fn validate(&self) -> SgResult<()> {
        if self.grid_size == 0 || self.grid_size > Self::MAX_GRID_SIZE {
            return Err(SgError::InvalidGridSize {
                got: self.grid_size,
                max: Self::MAX_GRID_SIZE,
            });
        }
        if !(self.intolerance > 0.0 && self.intolerance < 1.0) {
            return Err(SgError::IntoleranceOutOfRange(self.intolerance));
        }
        if !(self.occupancy > 0.0 && self.occupancy < 1.0) {
            return Err(SgError::OccupancyOutOfRange(self.occupancy));
        }
        if !(self.turn_duration_secs.is_finite() && self.turn_duration_secs > 0.0) {
            return Err(SgError::InvalidTurnDuration(self.turn_duration_secs));
        }
        if self.archetypes.is_empty() {
            return Err(SgError::NoArchetypes);
        }
        for (i, kind) in self.archetypes.iter().enumerate() {
            if self.archetypes[..i].contains(kind) {
                return Err(SgError::DuplicateArchetype(*kind));
            }
        }
        Ok(())
    }

    /// Number of agents a random population places:
    /// `floor(grid_size² × occupancy)`.
    pub fn target_population(&self) -> usize {
        let cells = self.grid_size as u64 * self.grid_size as u64;
        (cells as f64 * self.occupancy as f64).floor() as usize
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size:          64,
            intolerance:        0.1,
            occupancy:          0.5,
            archetypes:         Archetype::ALL.to_vec(),
            turn_duration_secs: 1.0,
            scoring:            ScoringRule::Sum,
            seed:               42,
        }
    }
}
