//! Fluent builder producing a populated `GridStore` + `AgentStore` pair.
//!
//! # Usage
//!
//! ```rust
//! use sg_agent::PopulationBuilder;
//! use sg_core::{SimConfig, SimRng};
//!
//! let config = SimConfig { grid_size: 10, occupancy: 0.3, ..SimConfig::default() };
//! let (grid, agents) = PopulationBuilder::new(&config)
//!     .build(&mut SimRng::new(config.seed))
//!     .unwrap();
//!
//! assert_eq!(agents.count, 30);
//! assert_eq!(grid.occupied_count(), 30);
//! ```

use sg_core::{Archetype, GridPos, SgError, SgResult, SimConfig, SimRng};
use sg_grid::{Cell, GridStore};

use crate::AgentStore;

/// Builds the initial world.
///
/// Without explicit placements the builder fills
/// [`SimConfig::target_population`] distinct random cells, drawing each
/// agent's archetype uniformly from `config.archetypes`.  With explicit
/// placements it places exactly those, in order, and nothing else.
pub struct PopulationBuilder<'a> {
    config:     &'a SimConfig,
    placements: Option<Vec<(GridPos, Archetype)>>,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(config: &'a SimConfig) -> Self {
        Self {
            config,
            placements: None,
        }
    }

    /// Add one explicit placement.  Disables random fill.
    pub fn place(mut self, cell: GridPos, kind: Archetype) -> Self {
        self.placements.get_or_insert_with(Vec::new).push((cell, kind));
        self
    }

    /// Replace any placements with `placements`.  An empty iterator yields
    /// an empty world.
    pub fn placements<I>(mut self, placements: I) -> Self
    where
        I: IntoIterator<Item = (GridPos, Archetype)>,
    {
        self.placements = Some(placements.into_iter().collect());
        self
    }

    /// Validate the config and placements and populate a fresh grid.
    ///
    /// `rng` is consumed only by random fill.
    pub fn build(self, rng: &mut SimRng) -> SgResult<(GridStore, AgentStore)> {
        self.config.validate()?;
        let mut grid = GridStore::new(self.config.grid_size);

        let agents = match self.placements {
            Some(placements) => place_explicit(self.config, &mut grid, placements)?,
            None => place_random(self.config, &mut grid, rng),
        };
        Ok((grid, agents))
    }
}

fn place_explicit(
    config:     &SimConfig,
    grid:       &mut GridStore,
    placements: Vec<(GridPos, Archetype)>,
) -> SgResult<AgentStore> {
    let mut agents = AgentStore::with_capacity(placements.len());
    for (cell, kind) in placements {
        if !grid.contains(cell) {
            return Err(SgError::PlacementOutOfBounds(cell));
        }
        if !config.archetypes.contains(&kind) {
            return Err(SgError::UnknownArchetype(kind));
        }
        if !grid.get(cell).is_vacant() {
            return Err(SgError::PlacementConflict(cell));
        }
        let id = agents.spawn(kind, cell);
        grid.set(cell, Cell::occupied_by(id));
    }
    Ok(agents)
}

fn place_random(config: &SimConfig, grid: &mut GridStore, rng: &mut SimRng) -> AgentStore {
    let target = config.target_population().min(grid.len());
    let mut cells: Vec<GridPos> = grid.positions().collect();
    rng.shuffle(&mut cells);

    let mut agents = AgentStore::with_capacity(target);
    for &cell in &cells[..target] {
        let kind = config.archetypes[rng.gen_range(0..config.archetypes.len())];
        let id = agents.spawn(kind, cell);
        grid.set(cell, Cell::occupied_by(id));
    }
    agents
}
