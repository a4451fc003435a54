//! Interpolates pending moves over time and commits them to the grid.

use sg_agent::AgentStore;
use sg_core::{Point2, Turn};
use sg_decide::PendingMove;
use sg_grid::{Cell, GridStore};

use crate::{TurnPhase, TurnState};

/// Two-state machine (`Idle` ⇄ `Animating`) driving one turn at a time.
pub struct MovementAnimator {
    state:              TurnState,
    moves:              Vec<PendingMove>,
    turn_duration_secs: f32,
}

impl MovementAnimator {
    /// An idle animator at turn zero.
    ///
    /// `turn_duration_secs` must be finite and positive (checked by
    /// `SimConfig::validate`).
    pub fn new(turn_duration_secs: f32) -> Self {
        debug_assert!(turn_duration_secs.is_finite() && turn_duration_secs > 0.0);
        Self {
            state: TurnState::default(),
            moves: Vec::new(),
            turn_duration_secs,
        }
    }

    #[inline]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.in_progress()
    }

    /// Moves of the turn in flight.  Empty while idle.
    #[inline]
    pub fn pending(&self) -> &[PendingMove] {
        &self.moves
    }

    /// Start the next turn with `moves`.  Returns the new turn number.
    ///
    /// Even an empty move list enters `Animating`; the turn then completes
    /// on the first `advance` that reaches progress `1`.
    ///
    /// # Panics
    /// Panics if a turn is already animating.  Callers check
    /// [`is_animating`](Self::is_animating) first.
    pub fn begin(&mut self, moves: Vec<PendingMove>) -> Turn {
        assert!(!self.is_animating(), "turn already in progress");
        self.state = TurnState {
            turn:     self.state.turn.next(),
            phase:    TurnPhase::Animating,
            progress: 0.0,
        };
        self.moves = moves;
        self.state.turn
    }

    /// Advance the animation by `dt` wall-clock seconds.
    ///
    /// Returns `true` once the turn has committed, and also when no turn is
    /// in flight.  Negative or NaN `dt` counts as zero.
    pub fn advance(&mut self, dt: f32, grid: &mut GridStore, agents: &mut AgentStore) -> bool {
        if !self.is_animating() {
            return true;
        }

        let step = dt.max(0.0) / self.turn_duration_secs;
        self.state.progress = (self.state.progress + step).clamp(0.0, 1.0);

        if self.state.progress < 1.0 {
            let t = self.state.progress;
            for m in &self.moves {
                let from = Point2::from(m.origin);
                let to   = Point2::from(m.destination);
                agents.set_position(m.agent, from.lerp(to, t));
            }
            return false;
        }

        self.commit(grid, agents);
        true
    }

    /// Jump straight to the end of the turn in flight, if any.
    pub fn finish(&mut self, grid: &mut GridStore, agents: &mut AgentStore) {
        if self.is_animating() {
            self.state.progress = 1.0;
            self.commit(grid, agents);
        }
    }

    /// Abandon any turn in flight and restart the counter.  Used when the
    /// world it referred to is being replaced.
    pub fn reset(&mut self) {
        self.state = TurnState::default();
        self.moves.clear();
    }

    fn commit(&mut self, grid: &mut GridStore, agents: &mut AgentStore) {
        // Destinations are pairwise distinct and were vacant at decision
        // time, so per-move order (vacate, then occupy) cannot clobber.
        for m in self.moves.drain(..) {
            agents.set_position(m.agent, Point2::from(m.destination));
            grid.set(m.origin, Cell::VACANT);
            grid.set(m.destination, Cell::occupied_by(m.agent));
        }
        self.state.phase = TurnPhase::Idle;
    }
}
