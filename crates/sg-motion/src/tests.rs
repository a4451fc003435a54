//! Unit tests for sg-motion.

use sg_agent::{AgentStore, PopulationBuilder};
use sg_core::{AgentId, Archetype, GridPos, Point2, SimConfig, SimRng, Turn};
use sg_decide::PendingMove;
use sg_grid::GridStore;

use crate::{MovementAnimator, TurnPhase};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 3×3 grid with one red agent at (0,0).
fn one_agent() -> (GridStore, AgentStore) {
    let cfg = SimConfig { grid_size: 3, ..SimConfig::default() };
    PopulationBuilder::new(&cfg)
        .place(GridPos::new(0, 0), Archetype::Red)
        .build(&mut SimRng::new(0))
        .unwrap()
}

fn east() -> PendingMove {
    PendingMove {
        agent:       AgentId(0),
        origin:      GridPos::new(0, 0),
        destination: GridPos::new(1, 0),
    }
}

// ── Turn state ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn starts_idle_at_turn_zero() {
        let anim = MovementAnimator::new(1.0);
        assert_eq!(anim.state().turn, Turn::ZERO);
        assert_eq!(anim.state().phase, TurnPhase::Idle);
        assert!(!anim.is_animating());
        assert!(anim.pending().is_empty());
    }

    #[test]
    fn begin_enters_animating_and_counts() {
        let mut anim = MovementAnimator::new(1.0);
        assert_eq!(anim.begin(vec![east()]), Turn(1));
        assert!(anim.is_animating());
        assert_eq!(anim.state().progress, 0.0);
        assert_eq!(anim.pending(), &[east()]);
    }

    #[test]
    #[should_panic(expected = "already in progress")]
    fn begin_twice_panics() {
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![]);
        anim.begin(vec![]);
    }

    #[test]
    fn reset_returns_to_turn_zero() {
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![east()]);
        anim.reset();
        assert!(!anim.is_animating());
        assert_eq!(anim.state().turn, Turn::ZERO);
        assert!(anim.pending().is_empty());
    }
}

// ── Advance / commit ──────────────────────────────────────────────────────────

#[cfg(test)]
mod advance {
    use super::*;

    #[test]
    fn idle_advance_is_trivially_done() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(1.0);
        assert!(anim.advance(0.5, &mut grid, &mut agents));
        assert_eq!(agents.position(AgentId(0)), Point2::new(0.0, 0.0));
    }

    #[test]
    fn half_then_half_commits() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![east()]);

        assert!(!anim.advance(0.5, &mut grid, &mut agents));
        assert_eq!(agents.position(AgentId(0)), Point2::new(0.5, 0.0));
        // Occupancy unchanged mid-animation.
        assert_eq!(grid.occupant(GridPos::new(0, 0)), Some(AgentId(0)));
        assert_eq!(grid.occupant(GridPos::new(1, 0)), None);

        assert!(anim.advance(0.5, &mut grid, &mut agents));
        assert_eq!(agents.position(AgentId(0)), Point2::new(1.0, 0.0));
        assert_eq!(grid.occupant(GridPos::new(0, 0)), None);
        assert_eq!(grid.occupant(GridPos::new(1, 0)), Some(AgentId(0)));
        assert!(!anim.is_animating());
        assert!(anim.pending().is_empty());
        assert_eq!(anim.state().turn, Turn(1));
    }

    #[test]
    fn progress_scales_with_turn_duration() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(2.0);
        anim.begin(vec![east()]);
        assert!(!anim.advance(0.5, &mut grid, &mut agents));
        assert_eq!(anim.state().progress, 0.25);
        assert_eq!(agents.position(AgentId(0)), Point2::new(0.25, 0.0));
    }

    #[test]
    fn overshoot_clamps_and_commits() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![east()]);
        assert!(anim.advance(7.0, &mut grid, &mut agents));
        assert_eq!(anim.state().progress, 1.0);
        assert_eq!(agents.position(AgentId(0)), Point2::new(1.0, 0.0));
    }

    #[test]
    fn negative_and_nan_dt_do_not_progress() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![east()]);
        assert!(!anim.advance(-1.0, &mut grid, &mut agents));
        assert!(!anim.advance(f32::NAN, &mut grid, &mut agents));
        assert_eq!(anim.state().progress, 0.0);
        assert!(anim.is_animating());
    }

    #[test]
    fn empty_turn_still_animates_to_completion() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![]);
        assert!(!anim.advance(0.3, &mut grid, &mut agents));
        assert!(anim.is_animating());
        assert!(anim.advance(1.0, &mut grid, &mut agents));
        assert!(!anim.is_animating());
    }

    #[test]
    fn finish_commits_immediately() {
        let (mut grid, mut agents) = one_agent();
        let mut anim = MovementAnimator::new(1.0);
        anim.begin(vec![east()]);
        anim.finish(&mut grid, &mut agents);
        assert!(!anim.is_animating());
        assert_eq!(grid.occupant(GridPos::new(1, 0)), Some(AgentId(0)));
        // Finishing while idle is a no-op.
        anim.finish(&mut grid, &mut agents);
        assert_eq!(grid.occupied_count(), 1);
    }
}
