//! Neighborhood similarity statistics.

use std::fmt;

use sg_agent::AgentStore;
use sg_grid::GridStore;

/// Snapshot of how clustered the population is, using the same orthogonal
/// neighborhood as scoring.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SegregationStats {
    /// Agents on the grid.
    pub agents:          usize,
    /// Mean over non-isolated agents of (like neighbors / occupied
    /// neighbors).  `0.0` when every agent is isolated.
    pub mean_like_ratio: f32,
    /// Agents with no occupied orthogonal neighbor.
    pub isolated:        usize,
    /// Agents whose occupied neighbors are all of their own archetype.
    pub homogeneous:     usize,
}

impl SegregationStats {
    pub fn compute(grid: &GridStore, agents: &AgentStore) -> Self {
        let mut stats = SegregationStats::default();
        let mut ratio_sum = 0.0_f64;

        for (cell, agent) in grid.occupants() {
            stats.agents += 1;
            let kind = agents.kind(agent);

            let (mut like, mut occupied) = (0u32, 0u32);
            for n in cell.neighbors() {
                if !grid.contains(n) {
                    continue;
                }
                if let Some(other) = grid.occupant(n) {
                    occupied += 1;
                    if agents.kind(other) == kind {
                        like += 1;
                    }
                }
            }

            if occupied == 0 {
                stats.isolated += 1;
                continue;
            }
            if like == occupied {
                stats.homogeneous += 1;
            }
            ratio_sum += like as f64 / occupied as f64;
        }

        let counted = stats.agents - stats.isolated;
        if counted > 0 {
            stats.mean_like_ratio = (ratio_sum / counted as f64) as f32;
        }
        stats
    }
}

impl fmt::Display for SegregationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} agents, like-ratio {:.3}, {} homogeneous, {} isolated",
            self.agents, self.mean_like_ratio, self.homogeneous, self.isolated
        )
    }
}
