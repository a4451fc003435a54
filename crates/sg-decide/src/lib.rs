//! `sg-decide` — the decision half of a turn.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`context`]   | `ScoringContext<'a>`: read-only view shared by every decision   |
//! | [`scoring`]   | neighbor contributions, cell scores, candidate eligibility       |
//! | [`tiebreak`]  | `TieBreaker` trait, `FixedCoin`                                  |
//! | [`pending`]   | `PendingMove`                                                    |
//! | [`scheduler`] | `TurnScheduler`: one full decision pass, owns reservations      |
//!
//! # Decide, then reserve
//!
//! A decision pass visits every occupied cell in scan order.  Occupancy is
//! read-only throughout: an agent that decides to move still occupies its
//! origin for the rest of the pass.  The only state written is the
//! reservation table, so no two agents can target the same cell.  The pass
//! emits `PendingMove`s; applying them is the movement animator's job.

pub mod context;
pub mod pending;
pub mod scheduler;
pub mod scoring;
pub mod tiebreak;


pub use context::ScoringContext;
pub use pending::PendingMove;
pub use scheduler::{Candidate, INELIGIBLE_RANK, TurnScheduler, choose_destination};
pub use scoring::{candidate_score, cell_score, neighbor_contribution};
pub use tiebreak::{FixedCoin, TieBreaker};
