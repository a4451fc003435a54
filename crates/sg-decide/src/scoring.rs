//! Agreeableness scoring.
//!
//! A cell's score, from the point of view of an agent of some archetype, is
//! built from its four orthogonal neighbors:
//!
//! | Neighbor                 | Contribution      |
//! |--------------------------|-------------------|
//! | outside the grid         | none (see below)  |
//! | vacant                   | `0`               |
//! | same archetype           | `+intolerance`    |
//! | different archetype      | `-intolerance`    |
//!
//! How contributions combine depends on [`ScoringRule`]: `Sum` skips
//! neighbors outside the grid, `LastNeighbor` lets them overwrite with `0`.

use sg_core::{Archetype, GridPos, ScoringRule};
use sg_grid::{ReservationTable, is_open};

use crate::ScoringContext;

/// `-1`, `0` or `+1` for the neighbor at `neighbor`; `None` if it lies
/// outside the grid.
fn neighbor_sign(ctx: &ScoringContext<'_>, kind: Archetype, neighbor: GridPos) -> Option<i32> {
    if !ctx.grid.contains(neighbor) {
        return None;
    }
    Some(match ctx.grid.occupant(neighbor) {
        None => 0,
        Some(other) if ctx.agents.kind(other) == kind => 1,
        Some(_) => -1,
    })
}

/// Contribution of a single neighbor cell, `None` if it is out of range.
pub fn neighbor_contribution(
    ctx:      &ScoringContext<'_>,
    kind:     Archetype,
    neighbor: GridPos,
) -> Option<f32> {
    neighbor_sign(ctx, kind, neighbor).map(|s| s as f32 * ctx.intolerance)
}

/// Score of `cell` for an agent of `kind`.
///
/// `cell` itself may be out of range; only its neighbors are inspected.
/// The evaluating agent is not excluded: if it sits next to `cell` it counts
/// as a same-archetype neighbor.
pub fn cell_score(ctx: &ScoringContext<'_>, kind: Archetype, cell: GridPos) -> f32 {
    let neighbors = cell.neighbors();
    match ctx.rule {
        // Integer net first so equal neighborhoods always compare exactly equal.
        ScoringRule::Sum => {
            let net: i32 = neighbors
                .into_iter()
                .filter_map(|n| neighbor_sign(ctx, kind, n))
                .sum();
            net as f32 * ctx.intolerance
        }
        // Every neighbor overwrites, out-of-range ones with 0.
        ScoringRule::LastNeighbor => neighbors
            .into_iter()
            .map(|n| neighbor_contribution(ctx, kind, n).unwrap_or(0.0))
            .last()
            .unwrap_or(0.0),
    }
}

/// Score of `cell` as a move destination, or `None` if it is ineligible
/// (outside the grid, occupied, or already reserved this pass).
pub fn candidate_score(
    ctx:          &ScoringContext<'_>,
    reservations: &ReservationTable,
    kind:         Archetype,
    cell:         GridPos,
) -> Option<f32> {
    is_open(ctx.grid, reservations, cell).then(|| cell_score(ctx, kind, cell))
}
