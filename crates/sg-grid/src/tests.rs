//! Unit tests for sg-grid.

use sg_core::{AgentId, GridPos};

use crate::{Cell, GridStore, ReservationTable, is_open};

// ── GridStore ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_store {
    use super::*;

    #[test]
    fn new_grid_is_all_vacant() {
        let g = GridStore::new(3);
        assert_eq!(g.len(), 9);
        assert_eq!(g.occupied_count(), 0);
        assert!(g.positions().all(|p| g.get(p).is_vacant()));
    }

    #[test]
    fn set_then_get() {
        let mut g = GridStore::new(4);
        g.set(GridPos::new(3, 1), Cell::occupied_by(AgentId(5)));
        assert_eq!(g.occupant(GridPos::new(3, 1)), Some(AgentId(5)));
        assert_eq!(g.occupant(GridPos::new(1, 3)), None);
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn contains_checks_both_axes() {
        let g = GridStore::new(3);
        assert!(g.contains(GridPos::new(0, 0)));
        assert!(g.contains(GridPos::new(2, 2)));
        assert!(!g.contains(GridPos::new(-1, 0)));
        assert!(!g.contains(GridPos::new(0, -1)));
        assert!(!g.contains(GridPos::new(3, 0)));
        assert!(!g.contains(GridPos::new(0, 3)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let g = GridStore::new(3);
        let _ = g.get(GridPos::new(0, -1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut g = GridStore::new(3);
        g.set(GridPos::new(3, 0), Cell::occupied_by(AgentId(0)));
    }

    #[test]
    fn scan_order_is_x_outer_y_inner() {
        let g = GridStore::new(2);
        let order: Vec<GridPos> = g.positions().collect();
        assert_eq!(order, vec![
            GridPos::new(0, 0),
            GridPos::new(0, 1),
            GridPos::new(1, 0),
            GridPos::new(1, 1),
        ]);
    }

    #[test]
    fn occupants_lists_only_occupied_cells() {
        let mut g = GridStore::new(3);
        g.set(GridPos::new(2, 0), Cell::occupied_by(AgentId(1)));
        g.set(GridPos::new(0, 2), Cell::occupied_by(AgentId(0)));
        let occ: Vec<_> = g.occupants().collect();
        assert_eq!(occ, vec![
            (GridPos::new(0, 2), AgentId(0)),
            (GridPos::new(2, 0), AgentId(1)),
        ]);
    }

    #[test]
    fn clear_vacates_everything() {
        let mut g = GridStore::new(2);
        g.set(GridPos::new(1, 1), Cell::occupied_by(AgentId(0)));
        g.clear();
        assert_eq!(g.occupied_count(), 0);
    }
}

// ── ReservationTable ──────────────────────────────────────────────────────────

#[cfg(test)]
mod reservation_table {
    use super::*;

    #[test]
    fn reserve_and_clear() {
        let mut r = ReservationTable::new(3);
        assert!(!r.is_reserved(GridPos::new(1, 1)));
        r.reserve(GridPos::new(1, 1));
        assert!(r.is_reserved(GridPos::new(1, 1)));
        assert_eq!(r.reserved_count(), 1);
        r.clear();
        assert!(!r.is_reserved(GridPos::new(1, 1)));
        assert_eq!(r.reserved_count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn reserve_out_of_range_panics() {
        let mut r = ReservationTable::new(2);
        r.reserve(GridPos::new(2, 0));
    }

    #[test]
    fn every_grid_cell_is_reservable() {
        let g = GridStore::new(4);
        let mut r = ReservationTable::new(4);
        for pos in g.positions() {
            r.reserve(pos);
        }
        assert_eq!(r.reserved_count(), g.len());
        assert!(g.positions().all(|p| r.is_reserved(p)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn is_reserved_rejects_negative_coordinate() {
        let r = ReservationTable::new(3);
        let _ = r.is_reserved(GridPos::new(-1, 2));
    }

    #[test]
    fn open_requires_vacant_and_unreserved() {
        let mut g = GridStore::new(3);
        let mut r = ReservationTable::new(3);
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        g.set(a, Cell::occupied_by(AgentId(0)));
        r.reserve(b);
        assert!(!is_open(&g, &r, a));
        assert!(!is_open(&g, &r, b));
        assert!(is_open(&g, &r, GridPos::new(2, 0)));
        assert!(!is_open(&g, &r, GridPos::new(-1, 0)));
    }
}
