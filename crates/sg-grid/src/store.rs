//! The `GridStore`, exclusive owner of cell contents.

use sg_core::{AgentId, GridPos};

use crate::Cell;

/// Fixed-size square array of [`Cell`]s, stored row-major
/// (`index = y * size + x`).
///
/// Pure storage: it does not know about agent positions and does not enforce
/// the occupancy/position invariant.  The turn scheduler and movement
/// animator are responsible for that.
#[derive(Clone, Debug)]
pub struct GridStore {
    size:  u32,
    cells: Vec<Cell>,
}

impl GridStore {
    /// A `size × size` grid with every cell vacant.
    pub fn new(size: u32) -> Self {
        let n = size as usize * size as usize;
        Self {
            size,
            cells: vec![Cell::VACANT; n],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (`size²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        cell_index(self.size, pos).is_some()
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn get(&self, pos: GridPos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn set(&mut self, pos: GridPos, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    /// Shorthand for `get(pos).occupant`.
    #[inline]
    pub fn occupant(&self, pos: GridPos) -> Option<AgentId> {
        self.get(pos).occupant
    }

    /// Every coordinate in scan order: `x` outer, `y` inner.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |x| (0..size).map(move |y| GridPos::new(x, y)))
    }

    /// `(position, agent)` for every occupied cell, in scan order.
    pub fn occupants(&self) -> impl Iterator<Item = (GridPos, AgentId)> + '_ {
        self.positions()
            .filter_map(|pos| self.occupant(pos).map(|agent| (pos, agent)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_vacant()).count()
    }

    /// Reset every cell to vacant.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::VACANT);
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        cell_index(self.size, pos).unwrap_or_else(|| {
            panic!("grid coordinate {pos} out of range for size {}", self.size)
        })
    }
}

/// Row-major index of `pos` in a `size × size` array, `None` if `pos` lies
/// outside it.  Shared by every per-cell table in this crate.
#[inline]
pub(crate) fn cell_index(size: u32, pos: GridPos) -> Option<usize> {
    let in_range = |v: i32| v >= 0 && (v as u32) < size;
    (in_range(pos.x) && in_range(pos.y)).then(|| pos.y as usize * size as usize + pos.x as usize)
}
