//! `sg-core` — foundational types for the segregation relocation engine.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`coord`]       | `GridPos`, `Direction`, `Point2`                      |
//! | [`archetype`]   | `Archetype` enum (closed set of agent types)          |
//! | [`turn`]        | `Turn` counter                                        |
//! | [`config`]      | `SimConfig`, `ScoringRule`                            |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `SgError`, `SgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod archetype;
pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use archetype::Archetype;
pub use config::{ScoringRule, SimConfig};
pub use coord::{Direction, GridPos, Point2};
pub use error::{SgError, SgResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use turn::Turn;
