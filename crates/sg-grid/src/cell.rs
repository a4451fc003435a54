//! A single grid cell.

use sg_core::AgentId;

/// Occupancy of one cell: at most one agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub occupant: Option<AgentId>,
}

impl Cell {
    pub const VACANT: Cell = Cell { occupant: None };

    #[inline]
    pub fn occupied_by(agent: AgentId) -> Self {
        Self { occupant: Some(agent) }
    }

    #[inline]
    pub fn is_vacant(self) -> bool {
        self.occupant.is_none()
    }
}
