//! Observer trait for headless runs.

use sg_agent::AgentStore;
use sg_core::Turn;
use sg_decide::PendingMove;
use sg_grid::GridStore;

/// Callbacks invoked by [`Engine::run_turns`][crate::Engine::run_turns].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: move counter
///
/// ```rust
/// use sg_core::Turn;
/// use sg_decide::PendingMove;
/// use sg_sim::TurnObserver;
///
/// #[derive(Default)]
/// struct MoveCounter { total: usize }
///
/// impl TurnObserver for MoveCounter {
///     fn on_turn_planned(&mut self, _turn: Turn, moves: &[PendingMove]) {
///         self.total += moves.len();
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called after the decision pass, before anything is committed.
    fn on_turn_planned(&mut self, _turn: Turn, _moves: &[PendingMove]) {}

    /// Called once the turn's moves are applied to the grid.
    fn on_turn_committed(&mut self, _turn: Turn, _grid: &GridStore, _agents: &AgentStore) {}

    /// Called once after the last turn of the run.
    fn on_run_end(&mut self, _final_turn: Turn) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
