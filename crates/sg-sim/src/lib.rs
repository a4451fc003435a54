//! `sg-sim` — the relocation engine driven by an external loop.
//!
//! # Turn protocol
//!
//! ```text
//! request_turn():
//!   ① Decide     TurnScheduler scores every occupant's four neighbors
//!                (grid scan order) and picks at most one destination each.
//!   ② Reserve    each chosen destination is claimed in the reservation
//!                table so later agents in the pass cannot pick it.
//!   ③ Begin      the pass's PendingMoves go to the MovementAnimator;
//!                occupancy is still untouched.
//! advance(dt) every frame:
//!   ④ Animate    lerp movers' continuous positions by progress.
//!   ⑤ Commit     at progress 1: vacate origins, occupy destinations, Idle.
//! ```
//!
//! At most one turn is in flight; `request_turn` while animating is a no-op.
//!
//! # Quick-start
//!
//! ```rust
//! use sg_core::SimConfig;
//! use sg_sim::{EngineBuilder, NoopObserver};
//!
//! let config = SimConfig { grid_size: 16, ..SimConfig::default() };
//! let mut engine = EngineBuilder::new(config).build()?;
//!
//! // Interactive: one request, then one advance per frame.
//! engine.request_turn();
//! while !engine.advance(1.0 / 60.0) {}
//!
//! // Headless: no animation.
//! engine.run_turns(10, &mut NoopObserver)?;
//! engine.audit()?;
//! # Ok::<(), sg_sim::SimError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod stats;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TurnObserver};
pub use stats::SegregationStats;
