//! The `Engine` struct: turn requests, animation steps, and queries.

use rustc_hash::FxHashSet;
use sg_agent::AgentStore;
use sg_core::{AgentId, Archetype, GridPos, Point2, SgError, SimConfig, SimRng, Turn};
use sg_decide::{PendingMove, ScoringContext, TieBreaker, TurnScheduler};
use sg_grid::{Cell, GridStore, ReservationTable};
use sg_motion::{MovementAnimator, TurnState};
use tracing::{debug, info};

use crate::builder::populate;
use crate::{SegregationStats, SimError, SimResult, TurnObserver};

/// The relocation engine.
///
/// Owns the grid, the agents, the scheduler (with its reservation table),
/// the animator (with the turn state), and the tie-break source.  Nothing
/// runs in the background: every call completes before returning, and the
/// driver decides when to request turns and how much time each frame
/// advances.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<T: TieBreaker = SimRng> {
    pub(crate) config:         SimConfig,
    pub(crate) grid:           GridStore,
    pub(crate) agents:         AgentStore,
    pub(crate) scheduler:      TurnScheduler,
    pub(crate) animator:       MovementAnimator,
    pub(crate) tie_breaker:    T,
    pub(crate) population_rng: SimRng,
    /// Explicit layout to restore on reset; `None` means random fill.
    pub(crate) placements:     Option<Vec<(GridPos, Archetype)>>,
}

impl<T: TieBreaker> Engine<T> {
    // ── Turn protocol ─────────────────────────────────────────────────────

    /// Run a decision pass and start animating its moves.
    ///
    /// Returns `false` without doing anything if a turn is already in
    /// flight: the pending moves and progress of that turn are unchanged.
    pub fn request_turn(&mut self) -> bool {
        if self.animator.is_animating() {
            debug!(turn = self.turn().0, "turn request refused, animation in flight");
            return false;
        }

        let ctx = ScoringContext::new(&self.grid, &self.agents, &self.config);
        let moves = self.scheduler.plan_turn(&ctx, &mut self.tie_breaker);
        let count = moves.len();
        let turn = self.animator.begin(moves);

        debug!(turn = turn.0, moves = count, "turn planned");
        true
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Returns `true` once the turn has committed, or immediately if no turn
    /// is in flight.
    pub fn advance(&mut self, dt: f32) -> bool {
        let was_animating = self.animator.is_animating();
        let done = self.animator.advance(dt, &mut self.grid, &mut self.agents);
        if was_animating && done {
            debug!(turn = self.turn().0, "turn committed");
        }
        done
    }

    /// Request a turn and commit it at once, skipping animation.
    ///
    /// Returns `false` if a turn was already in flight (nothing happens).
    pub fn step_turn(&mut self) -> bool {
        if !self.request_turn() {
            return false;
        }
        self.animator.finish(&mut self.grid, &mut self.agents);
        debug!(turn = self.turn().0, "turn committed");
        true
    }

    /// Step `n` turns without animation, reporting to `observer`.
    ///
    /// # Errors
    /// [`SimError::TurnInProgress`] if called mid-animation.
    pub fn run_turns<O: TurnObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        if self.in_progress() {
            return Err(SimError::TurnInProgress);
        }
        for _ in 0..n {
            self.request_turn();
            let turn = self.turn();
            observer.on_turn_planned(turn, self.animator.pending());
            self.animator.finish(&mut self.grid, &mut self.agents);
            observer.on_turn_committed(turn, &self.grid, &self.agents);
        }
        observer.on_run_end(self.turn());
        Ok(())
    }

    // ── Driver-side edits ─────────────────────────────────────────────────

    /// Move the agent at `from` straight to `to` (e.g. a drag and drop in
    /// the driver's UI).
    ///
    /// # Errors
    /// - [`SimError::TurnInProgress`] while a turn animates.
    /// - [`SimError::OutOfBounds`] if either cell is outside the grid.
    /// - [`SimError::NoAgentAt`] if `from` is vacant.
    /// - [`SimError::CellOccupied`] if `to` holds an agent.
    pub fn relocate(&mut self, from: GridPos, to: GridPos) -> SimResult<AgentId> {
        if self.in_progress() {
            return Err(SimError::TurnInProgress);
        }
        for pos in [from, to] {
            if !self.grid.contains(pos) {
                return Err(SimError::OutOfBounds(pos));
            }
        }
        let agent = self.grid.occupant(from).ok_or(SimError::NoAgentAt(from))?;
        if !self.grid.get(to).is_vacant() {
            return Err(SimError::CellOccupied(to));
        }

        self.grid.set(from, Cell::VACANT);
        self.grid.set(to, Cell::occupied_by(agent));
        self.agents.set_position(agent, Point2::from(to));
        debug!(%agent, %from, %to, "agent relocated by driver");
        Ok(agent)
    }

    /// Throw away the world and repopulate it from the config.
    ///
    /// Any turn in flight is discarded and the turn counter returns to
    /// zero.  An engine built with explicit placements restores that layout;
    /// otherwise a fresh random population is drawn from the population
    /// stream (so it differs from the previous one).
    pub fn reset(&mut self) -> SimResult<()> {
        let (grid, agents) =
            populate(&self.config, self.placements.as_deref(), &mut self.population_rng)?;
        self.grid = grid;
        self.agents = agents;
        self.animator.reset();
        info!(agents = self.agents.count, "engine reset");
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn cell(&self, pos: GridPos) -> Cell {
        self.grid.get(pos)
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn occupant(&self, pos: GridPos) -> Option<AgentId> {
        self.grid.occupant(pos)
    }

    /// Archetype of the agent at `pos`, if any.
    ///
    /// # Panics
    /// Panics if `pos` is outside the grid.
    pub fn occupant_kind(&self, pos: GridPos) -> Option<Archetype> {
        self.grid.occupant(pos).map(|a| self.agents.kind(a))
    }

    pub fn agent_kind(&self, agent: AgentId) -> SimResult<Archetype> {
        self.agents
            .get_kind(agent)
            .ok_or(SimError::Core(SgError::AgentNotFound(agent)))
    }

    /// Continuous (possibly mid-animation) position of `agent`.
    pub fn agent_position(&self, agent: AgentId) -> SimResult<Point2> {
        self.agents
            .get_position(agent)
            .ok_or(SimError::Core(SgError::AgentNotFound(agent)))
    }

    /// Turn counter, phase, and progress.
    #[inline]
    pub fn turn_state(&self) -> TurnState {
        self.animator.state()
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.animator.state().turn
    }

    #[inline]
    pub fn in_progress(&self) -> bool {
        self.animator.is_animating()
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.animator.state().progress
    }

    /// Moves of the turn in flight.  Empty while idle.
    #[inline]
    pub fn pending_moves(&self) -> &[PendingMove] {
        self.animator.pending()
    }

    /// Destination claims of the most recent decision pass.
    #[inline]
    pub fn reservations(&self) -> &ReservationTable {
        self.scheduler.reservations()
    }

    pub fn stats(&self) -> SegregationStats {
        SegregationStats::compute(&self.grid, &self.agents)
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check the occupancy invariant, and when idle, that every agent's
    /// continuous position rounds to its cell.  While animating, also check
    /// that pending destinations and movers are distinct.
    ///
    /// # Errors
    /// [`SimError::InvariantViolation`] describing the first failure found.
    pub fn audit(&self) -> SimResult<()> {
        let idle = !self.in_progress();
        let mut seen: FxHashSet<AgentId> = FxHashSet::default();

        for (cell, agent) in self.grid.occupants() {
            if !self.agents.contains(agent) {
                return Err(violation(format!("cell {cell} references unknown {agent}")));
            }
            if !seen.insert(agent) {
                return Err(violation(format!("{agent} occupies more than one cell")));
            }
            if idle {
                let at = self.agents.position(agent);
                if at.round() != cell {
                    return Err(violation(format!("{agent} is drawn at {at} but occupies {cell}")));
                }
            }
        }
        if seen.len() != self.agents.count {
            return Err(violation(format!(
                "{} of {} agents occupy no cell",
                self.agents.count - seen.len(),
                self.agents.count
            )));
        }

        let mut destinations: FxHashSet<GridPos> = FxHashSet::default();
        let mut movers: FxHashSet<AgentId> = FxHashSet::default();
        for m in self.pending_moves() {
            if !destinations.insert(m.destination) {
                return Err(violation(format!("destination {} claimed twice", m.destination)));
            }
            if !movers.insert(m.agent) {
                return Err(violation(format!("{} scheduled to move twice", m.agent)));
            }
        }
        Ok(())
    }
}

fn violation(msg: String) -> SimError {
    SimError::InvariantViolation(msg)
}
