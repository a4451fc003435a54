//! Discrete grid coordinates, the four orthogonal directions, and the
//! continuous-space point used while a move is animating.

use std::fmt;

// ── GridPos ───────────────────────────────────────────────────────────────────

/// An integer cell coordinate.
///
/// Signed so that neighbor arithmetic at the grid edge (`x - 1` at `x == 0`)
/// yields an out-of-range coordinate rather than wrapping.  Whether a
/// `GridPos` lies inside a grid is the grid's question, not this type's.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbors in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> [GridPos; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned neighbor directions.  No diagonals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Evaluation order used by both scoring and candidate generation.
    ///
    /// `ScoringRule::LastNeighbor` depends on this order: the last entry is
    /// the one whose contribution survives.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// `(dx, dy)` offset.  `Up` is `+y`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, 1),
            Direction::Down  => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left  => (-1, 0),
        }
    }
}

// ── Point2 ────────────────────────────────────────────────────────────────────

/// A real-valued position in the grid plane.
///
/// An agent's `Point2` is the animated counterpart of its cell: outside an
/// active animation it equals the cell coordinate exactly.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` to `other` by `t` (not clamped).
    #[inline]
    pub fn lerp(self, other: Point2, t: f32) -> Point2 {
        Point2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Nearest grid coordinate.
    #[inline]
    pub fn round(self) -> GridPos {
        GridPos::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<GridPos> for Point2 {
    #[inline]
    fn from(pos: GridPos) -> Point2 {
        Point2::new(pos.x as f32, pos.y as f32)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
