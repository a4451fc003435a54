//! The coin flipped when a candidate exactly ties the current cell.

use sg_core::SimRng;

/// Source of tie-break decisions.
///
/// `flip` returning `true` means "take the move"; `false` means "stay" and
/// ends the agent's scan.  Injected into the scheduler so decision passes
/// are reproducible.
pub trait TieBreaker {
    fn flip(&mut self) -> bool;
}

/// Unweighted coin drawn from a seeded stream.
impl TieBreaker for SimRng {
    #[inline]
    fn flip(&mut self) -> bool {
        self.coin()
    }
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    #[inline]
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

/// A coin that always lands the same way.
///
/// `FixedCoin(false)` makes every tie a "stay", which turns the decision
/// pass fully deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedCoin(pub bool);

impl TieBreaker for FixedCoin {
    #[inline]
    fn flip(&mut self) -> bool {
        self.0
    }
}
