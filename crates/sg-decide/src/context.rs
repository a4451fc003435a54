//! Read-only snapshot used by scoring.

use sg_agent::AgentStore;
use sg_core::{ScoringRule, SimConfig};
use sg_grid::GridStore;

/// Everything a score depends on.
///
/// Holds shared borrows only, so building one never conflicts with the
/// scheduler's exclusive borrow of its reservation table.
#[derive(Copy, Clone)]
pub struct ScoringContext<'a> {
    pub grid:        &'a GridStore,
    pub agents:      &'a AgentStore,
    pub intolerance: f32,
    pub rule:        ScoringRule,
}

impl<'a> ScoringContext<'a> {
    pub fn new(grid: &'a GridStore, agents: &'a AgentStore, config: &SimConfig) -> Self {
        Self {
            grid,
            agents,
            intolerance: config.intolerance,
            rule:        config.scoring,
        }
    }
}
