//! Fluent builder for constructing an [`Engine`].

use sg_agent::PopulationBuilder;
use sg_core::{Archetype, GridPos, SimConfig, SimRng};
use sg_decide::{TieBreaker, TurnScheduler};
use sg_motion::MovementAnimator;
use tracing::info;

use crate::{Engine, SimResult};

/// Stream offsets for [`SimRng::child`].
const POPULATION_STREAM: u64 = 1;
const TIE_BREAK_STREAM:  u64 = 2;

/// Fluent builder for [`Engine<T>`].
///
/// # Defaults
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.tie_breaker(c)`   | `SimRng` stream derived from `config.seed`       |
/// | `.place(..)`        | random population at `config.occupancy`          |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(config)
///     .tie_breaker(FixedCoin(false))
///     .place(GridPos::new(2, 2), Archetype::Red)
///     .build()?;
/// ```
pub struct EngineBuilder<T: TieBreaker = SimRng> {
    config:         SimConfig,
    population_rng: SimRng,
    tie_breaker:    T,
    placements:     Option<Vec<(GridPos, Archetype)>>,
}

impl EngineBuilder<SimRng> {
    /// Start from `config`, deriving the population and tie-break streams
    /// from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let mut root = SimRng::new(config.seed);
        let population_rng = root.child(POPULATION_STREAM);
        let tie_breaker = root.child(TIE_BREAK_STREAM);
        Self {
            config,
            population_rng,
            tie_breaker,
            placements: None,
        }
    }
}

impl<T: TieBreaker> EngineBuilder<T> {
    /// Replace the tie-break source.
    pub fn tie_breaker<U: TieBreaker>(self, tie_breaker: U) -> EngineBuilder<U> {
        EngineBuilder {
            config:         self.config,
            population_rng: self.population_rng,
            tie_breaker,
            placements:     self.placements,
        }
    }

    /// Place one agent explicitly.  Any explicit placement disables random
    /// population.
    pub fn place(mut self, cell: GridPos, kind: Archetype) -> Self {
        self.placements.get_or_insert_with(Vec::new).push((cell, kind));
        self
    }

    /// Replace explicit placements wholesale.  An empty iterator yields an
    /// empty grid.
    pub fn placements<I>(mut self, placements: I) -> Self
    where
        I: IntoIterator<Item = (GridPos, Archetype)>,
    {
        self.placements = Some(placements.into_iter().collect());
        self
    }

    /// Validate the config, populate the grid, and return an idle engine at
    /// turn zero.
    pub fn build(mut self) -> SimResult<Engine<T>> {
        let (grid, agents) =
            populate(&self.config, self.placements.as_deref(), &mut self.population_rng)?;

        info!(
            grid_size = self.config.grid_size,
            agents    = agents.count,
            seed      = self.config.seed,
            scoring   = ?self.config.scoring,
            "relocation engine ready"
        );

        Ok(Engine {
            scheduler:      TurnScheduler::new(self.config.grid_size),
            animator:       MovementAnimator::new(self.config.turn_duration_secs),
            config:         self.config,
            grid,
            agents,
            tie_breaker:    self.tie_breaker,
            population_rng: self.population_rng,
            placements:     self.placements,
        })
    }
}

/// Shared by [`EngineBuilder::build`] and [`Engine::reset`].
pub(crate) fn populate(
    config:     &SimConfig,
    placements: Option<&[(GridPos, Archetype)]>,
    rng:        &mut SimRng,
) -> SimResult<(sg_grid::GridStore, sg_agent::AgentStore)> {
    let builder = PopulationBuilder::new(config);
    let builder = match placements {
        Some(p) => builder.placements(p.iter().copied()),
        None    => builder,
    };
    Ok(builder.build(rng)?)
}
