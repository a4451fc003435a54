//! `sg-agent` — agent storage and initial population.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays: archetype, continuous position) |
//! | [`builder`]     | `PopulationBuilder` (random or explicit placement)        |
//!
//! `AgentStore` knows nothing about cells.  The link between an agent and
//! its cell lives in the `GridStore` (`Cell::occupant`); the continuous
//! position here is only the animated view of that link.

pub mod builder;
pub mod store;


pub use builder::PopulationBuilder;
pub use store::AgentStore;
