//! The turn scheduler: one synchronous decision pass over the whole grid.

use std::cmp::Ordering;

use sg_core::{AgentId, Direction, GridPos};
use sg_grid::ReservationTable;
use tracing::{debug, trace};

use crate::{PendingMove, ScoringContext, TieBreaker, candidate_score, cell_score};

/// Where an ineligible candidate sorts: the smallest positive `f32`, above
/// every score `<= 0` and below every positive one.
pub const INELIGIBLE_RANK: f32 = f32::MIN_POSITIVE;

/// One of an agent's four possible destinations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub direction: Direction,
    pub cell:      GridPos,
    /// `None` when the cell is ineligible.
    pub score:     Option<f32>,
}

impl Candidate {
    /// Sort key: the score, or [`INELIGIBLE_RANK`] when ineligible.
    #[inline]
    pub fn rank(&self) -> f32 {
        self.score.unwrap_or(INELIGIBLE_RANK)
    }

    fn by_rank(a: &Candidate, b: &Candidate) -> Ordering {
        a.rank().partial_cmp(&b.rank()).unwrap_or(Ordering::Equal)
    }
}

/// Owns the reservation table and runs decision passes.
///
/// The table is cleared at the start of each [`plan_turn`](Self::plan_turn),
/// not at the end, so the last pass's claims remain inspectable.
pub struct TurnScheduler {
    reservations: ReservationTable,
}

impl TurnScheduler {
    pub fn new(grid_size: u32) -> Self {
        Self {
            reservations: ReservationTable::new(grid_size),
        }
    }

    /// Claims made by the most recent pass.
    pub fn reservations(&self) -> &ReservationTable {
        &self.reservations
    }

    /// Run one decision pass and return the turn's moves (possibly none).
    ///
    /// Visits occupied cells in grid scan order.  Occupancy is not modified:
    /// agents processed later still see earlier movers at their origins.
    ///
    /// # Panics
    /// Panics if `ctx.grid` is not the size this scheduler was built for.
    pub fn plan_turn<C: TieBreaker + ?Sized>(
        &mut self,
        ctx:  &ScoringContext<'_>,
        coin: &mut C,
    ) -> Vec<PendingMove> {
        assert_eq!(
            ctx.grid.size(),
            self.reservations.size(),
            "scheduler and grid disagree on size"
        );
        self.reservations.clear();

        let mut moves = Vec::new();
        for (origin, agent) in ctx.grid.occupants() {
            debug_assert_eq!(
                ctx.agents.position(agent).round(),
                origin,
                "{agent} is not standing on its cell"
            );

            let ranked = self.rank_candidates(ctx, agent, origin);
            let current = cell_score(ctx, ctx.agents.kind(agent), origin);
            if let Some(destination) = choose_destination(current, &ranked, coin) {
                trace!(%agent, %origin, %destination, "move planned");
                self.reservations.reserve(destination);
                moves.push(PendingMove { agent, origin, destination });
            }
        }

        debug!(moves = moves.len(), "decision pass complete");
        moves
    }

    /// The four candidates around `origin`, sorted ascending by
    /// [`Candidate::rank`].  Ineligible ones land after every candidate
    /// scoring `<= 0` and before every positive one.  Equal ranks keep
    /// [`Direction::ALL`] order.
    pub fn rank_candidates(
        &self,
        ctx:    &ScoringContext<'_>,
        agent:  AgentId,
        origin: GridPos,
    ) -> [Candidate; 4] {
        let kind = ctx.agents.kind(agent);
        let mut ranked = Direction::ALL.map(|direction| {
            let cell = origin.step(direction);
            Candidate {
                direction,
                cell,
                score: candidate_score(ctx, &self.reservations, kind, cell),
            }
        });
        ranked.sort_by(Candidate::by_rank);
        ranked
    }
}

/// Scan `ranked` (ascending) against the `current` cell's score.
///
/// - an ineligible candidate, or one scoring below `current`, ends the scan,
///   so positive candidates ranked after an ineligible one are never reached;
/// - a strictly better candidate becomes the best so far;
/// - an exact tie flips `coin`: heads records it and keeps scanning, tails
///   ends the scan without looking at anything further.
///
/// Returns the last recorded candidate's cell.
pub fn choose_destination<C: TieBreaker + ?Sized>(
    current: f32,
    ranked:  &[Candidate],
    coin:    &mut C,
) -> Option<GridPos> {
    let mut best = None;
    for candidate in ranked {
        let Some(score) = candidate.score else { break };
        if score < current {
            break;
        }
        if score > current || coin.flip() {
            best = Some(candidate.cell);
        } else {
            break;
        }
    }
    best
}
