//! Per-turn destination claims.

use sg_core::GridPos;

use crate::store::cell_index;

/// One flag per cell, `true` iff some agent already claimed that cell as
/// its destination during the current decision pass.
///
/// Cleared at the *start* of every pass, so the claims of the last pass stay
/// readable until the next one begins.  Mutated only by the turn scheduler.
#[derive(Clone, Debug)]
pub struct ReservationTable {
    size:     u32,
    reserved: Vec<bool>,
}

impl ReservationTable {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            reserved: vec![false; size as usize * size as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Reset every entry to `false`.
    pub fn clear(&mut self) {
        self.reserved.fill(false);
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn is_reserved(&self, pos: GridPos) -> bool {
        self.reserved[self.index(pos)]
    }

    /// Claim `pos` for this pass.
    ///
    /// The caller guarantees `pos` is open (vacant and unreserved); the
    /// scheduler only ever reserves a candidate it has just scored as
    /// eligible.
    ///
    /// # Panics
    /// Panics if `pos` is outside the grid.  Double reservation trips a
    /// debug assertion.
    #[inline]
    pub fn reserve(&mut self, pos: GridPos) {
        let i = self.index(pos);
        debug_assert!(!self.reserved[i], "cell {pos} reserved twice in one pass");
        self.reserved[i] = true;
    }

    /// Number of cells currently claimed.
    pub fn reserved_count(&self) -> usize {
        self.reserved.iter().filter(|&&r| r).count()
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        cell_index(self.size, pos).unwrap_or_else(|| {
            panic!("reservation coordinate {pos} out of range for size {}", self.size)
        })
    }
}
