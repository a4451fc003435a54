//! `sg-grid` — occupancy storage for a fixed `size × size` grid.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`cell`]        | `Cell`: at most one agent reference                      |
//! | [`store`]       | `GridStore`: row-major `Vec<Cell>`                       |
//! | [`reservation`] | `ReservationTable`: per-turn destination claims          |
//!
//! Occupancy changes only on commit; reservations live for one decision
//! pass.  A cell
//! is *open* (a legal destination) iff it has no occupant and no
//! reservation; see [`is_open`].
//!
//! # Bounds
//!
//! Every accessor taking a [`GridPos`](sg_core::GridPos) panics if the
//! coordinate is outside the grid.  Callers check with
//! [`GridStore::contains`] first.

pub mod cell;
pub mod reservation;
pub mod store;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use reservation::ReservationTable;
pub use store::GridStore;

use sg_core::GridPos;

/// `true` iff `pos` is inside the grid, unoccupied, and unreserved.
pub fn is_open(grid: &GridStore, reservations: &ReservationTable, pos: GridPos) -> bool {
    grid.contains(pos) && grid.get(pos).is_vacant() && !reservations.is_reserved(pos)
}
