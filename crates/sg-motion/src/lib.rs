//! `sg-motion` — the animate-then-commit half of a turn.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`state`]    | `TurnPhase`, `TurnState` (counter, phase, progress)         |
//! | [`animator`] | `MovementAnimator`: interpolates and commits pending moves |
//!
//! # Movement model
//!
//! 1. `MovementAnimator::begin` stores a turn's `PendingMove`s and enters
//!    `Animating` with progress `0`.
//! 2. Each `advance(dt)` adds `dt / turn_duration_secs` to progress (clamped
//!    to `[0, 1]`) and lerps every mover's continuous position from origin
//!    to destination.  The grid is untouched while progress is below `1`.
//! 3. When progress reaches `1`, every mover snaps to its destination and
//!    occupancy moves origin → destination.  The animator returns to `Idle`
//!    and drops the move list.

pub mod animator;
pub mod state;

#[cfg(test)]
mod tests;

pub use animator::MovementAnimator;
pub use state::{TurnPhase, TurnState};
