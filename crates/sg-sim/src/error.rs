use sg_core::{GridPos, SgError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SgError),

    #[error("a turn is already in progress")]
    TurnInProgress,

    #[error("cell {0} lies outside the grid")]
    OutOfBounds(GridPos),

    #[error("no agent at {0}")]
    NoAgentAt(GridPos),

    #[error("cell {0} is not empty")]
    CellOccupied(GridPos),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

pub type SimResult<T> = Result<T, SimError>;
