//! A relocation decided but not yet applied.

use sg_core::{AgentId, GridPos};

/// Move `agent` from `origin` to `destination`.
///
/// Produced by [`TurnScheduler::plan_turn`](crate::TurnScheduler::plan_turn)
/// and consumed by the movement animator on commit.  Within one turn no two
/// moves share a destination or an agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PendingMove {
    pub agent:       AgentId,
    pub origin:      GridPos,
    pub destination: GridPos,
}
