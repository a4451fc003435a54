//! Configuration and placement errors.
//!
//! `sg-sim` wraps `SgError` as one variant of its own `SimError`; lower
//! crates return `SgError` directly.

use thiserror::Error;

use crate::{AgentId, Archetype, GridPos};

/// The error type for `sg-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum SgError {
    #[error("grid size must be in 1..={max}, got {got}")]
    InvalidGridSize { got: u32, max: u32 },

    #[error("intolerance factor must be in (0, 1), got {0}")]
    IntoleranceOutOfRange(f32),

    #[error("occupancy fraction must be in (0, 1), got {0}")]
    OccupancyOutOfRange(f32),

    #[error("turn duration must be finite and positive, got {0}")]
    InvalidTurnDuration(f32),

    #[error("at least one archetype must be configured")]
    NoArchetypes,

    #[error("archetype {0} is listed more than once")]
    DuplicateArchetype(Archetype),

    #[error("archetype {0} is not part of the configured set")]
    UnknownArchetype(Archetype),

    #[error("placement at {0} lies outside the grid")]
    PlacementOutOfBounds(GridPos),

    #[error("cell {0} is already occupied")]
    PlacementConflict(GridPos),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `sg-*` crates.
pub type SgResult<T> = Result<T, SgError>;
