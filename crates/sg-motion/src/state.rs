//! Per-engine turn state.

use sg_core::Turn;

/// Whether a turn is in flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// No turn in progress; a new one may start.
    #[default]
    Idle,
    /// Moves are being animated; new turn requests are refused.
    Animating,
}

/// Turn counter, phase, and animation progress.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct TurnState {
    /// Turns started so far.
    pub turn:     Turn,
    pub phase:    TurnPhase,
    /// In `[0, 1]`.  Meaningless while `Idle`.
    pub progress: f32,
}

impl TurnState {
    #[inline]
    pub fn in_progress(&self) -> bool {
        self.phase == TurnPhase::Animating
    }
}
