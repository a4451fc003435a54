//! Unit tests for sg-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod coord {
    use crate::{Direction, GridPos, Point2};

    #[test]
    fn step_offsets() {
        let p = GridPos::new(0, 0);
        assert_eq!(p.step(Direction::Up),    GridPos::new(0, 1));
        assert_eq!(p.step(Direction::Down),  GridPos::new(0, -1));
        assert_eq!(p.step(Direction::Right), GridPos::new(1, 0));
        assert_eq!(p.step(Direction::Left),  GridPos::new(-1, 0));
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let n = GridPos::new(2, 2).neighbors();
        assert_eq!(n, [
            GridPos::new(2, 3),
            GridPos::new(2, 1),
            GridPos::new(3, 2),
            GridPos::new(1, 2),
        ]);
    }

    #[test]
    fn lerp_midpoint_and_ends() {
        let a = Point2::from(GridPos::new(0, 0));
        let b = Point2::from(GridPos::new(1, 0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), Point2::new(0.5, 0.0));
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn round_to_nearest_cell() {
        assert_eq!(Point2::new(2.4, 0.6).round(), GridPos::new(2, 1));
        assert_eq!(Point2::new(3.0, 5.0).round(), GridPos::new(3, 5));
    }
}

#[cfg(test)]
mod config {
    use crate::{Archetype, SgError, SimConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.archetypes.len(), 5);
    }

    #[test]
    fn zero_grid_rejected() {
        let cfg = SimConfig { grid_size: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(SgError::InvalidGridSize { got: 0, .. })));
    }

    #[test]
    fn intolerance_bounds_are_exclusive() {
        for bad in [0.0, 1.0, -0.5, f32::NAN] {
            let cfg = SimConfig { intolerance: bad, ..SimConfig::default() };
            assert!(matches!(cfg.validate(), Err(SgError::IntoleranceOutOfRange(_))), "{bad}");
        }
    }

    #[test]
    fn occupancy_bounds_are_exclusive() {
        for bad in [0.0, 1.0, 2.0] {
            let cfg = SimConfig { occupancy: bad, ..SimConfig::default() };
            assert_eq!(cfg.validate(), Err(SgError::OccupancyOutOfRange(bad)));
        }
    }

    #[test]
    fn turn_duration_must_be_positive() {
        let cfg = SimConfig { turn_duration_secs: 0.0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(SgError::InvalidTurnDuration(0.0)));
        let cfg = SimConfig { turn_duration_secs: f32::INFINITY, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_and_duplicate_archetypes_rejected() {
        let cfg = SimConfig { archetypes: vec![], ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(SgError::NoArchetypes));

        let cfg = SimConfig {
            archetypes: vec![Archetype::Red, Archetype::Blue, Archetype::Red],
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(SgError::DuplicateArchetype(Archetype::Red)));
    }

    #[test]
    fn target_population_floors() {
        let cfg = SimConfig { grid_size: 3, occupancy: 0.5, ..SimConfig::default() };
        assert_eq!(cfg.target_population(), 4); // 9 * 0.5 = 4.5
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn children_are_deterministic() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(1);
        let mut ca = a.child(3);
        let mut cb = b.child(3);
        assert_eq!(ca.gen_range(0..u64::MAX), cb.gen_range(0..u64::MAX));
    }

    #[test]
    fn gen_bool_clamps() {
        let mut r = SimRng::new(0);
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }

    #[test]
    fn coin_lands_both_ways() {
        let mut r = SimRng::new(5);
        let heads = (0..200).filter(|_| r.coin()).count();
        assert!(heads > 50 && heads < 150, "{heads}");
    }
}

#[cfg(test)]
mod archetype {
    use crate::Archetype;

    #[test]
    fn colours_are_opaque_and_distinct() {
        let colours: Vec<[u8; 4]> = Archetype::ALL.iter().map(|a| a.rgba()).collect();
        for (i, c) in colours.iter().enumerate() {
            assert_eq!(c[3], 255);
            assert!(!colours[..i].contains(c), "{:?} repeats a colour", Archetype::ALL[i]);
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Archetype::Purple.to_string(), "purple");
    }
}
