//! headless — drives the relocation engine the way a render loop would,
//! without a window.
//!
//! Phase 1 animates a few turns with fixed 60 Hz frame steps, phase 2 runs
//! the rest without animation, and the clustering statistics are printed
//! along the way.  Set `RUST_LOG=sg_decide=trace` to watch individual moves.

use std::time::Instant;

use anyhow::{Result, ensure};
use tracing::info;

use sg_agent::AgentStore;
use sg_core::{Archetype, GridPos, ScoringRule, SimConfig, Turn};
use sg_decide::PendingMove;
use sg_grid::GridStore;
use sg_sim::{EngineBuilder, SegregationStats, TurnObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE:       u32 = 48;
const SEED:            u64 = 42;
const FRAME_SECS:      f32 = 1.0 / 60.0;
const ANIMATED_TURNS:  u64 = 3;
const HEADLESS_TURNS:  u64 = 60;
const REPORT_INTERVAL: u64 = 10;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Progress {
    moves:      usize,
    last_moves: usize,
}

impl TurnObserver for Progress {
    fn on_turn_planned(&mut self, _turn: Turn, moves: &[PendingMove]) {
        self.moves += moves.len();
        self.last_moves = moves.len();
    }

    fn on_turn_committed(&mut self, turn: Turn, grid: &GridStore, agents: &AgentStore) {
        if turn.0 % REPORT_INTERVAL == 0 {
            let stats = SegregationStats::compute(grid, agents);
            println!("{turn:>9}: {:>5} moves | {stats}", self.last_moves);
        }
    }

    fn on_run_end(&mut self, final_turn: Turn) {
        info!(turn = final_turn.0, moves = self.moves, "headless run finished");
    }
}

// ── ASCII dump ────────────────────────────────────────────────────────────────

fn glyph(kind: Option<Archetype>) -> char {
    match kind {
        None                    => '.',
        Some(Archetype::Red)    => 'R',
        Some(Archetype::Blue)   => 'B',
        Some(Archetype::Green)  => 'G',
        Some(Archetype::Yellow) => 'Y',
        Some(Archetype::Purple) => 'P',
    }
}

/// Top row first, so +y points up as in the scoring directions.
fn print_grid<T: sg_decide::TieBreaker>(engine: &sg_sim::Engine<T>) {
    let size = engine.config().grid_size as i32;
    for y in (0..size).rev() {
        let row: String = (0..size)
            .map(|x| glyph(engine.occupant_kind(GridPos::new(x, y))))
            .collect();
        println!("  {row}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = SimConfig {
        grid_size:   GRID_SIZE,
        intolerance: 0.1,
        occupancy:   0.55,
        archetypes:  vec![Archetype::Red, Archetype::Blue, Archetype::Green],
        scoring:     ScoringRule::Sum,
        seed:        SEED,
        ..SimConfig::default()
    };
    println!("=== headless relocation run ===");
    println!(
        "Grid: {0}×{0}  |  Occupancy: {1}  |  Seed: {2}",
        config.grid_size, config.occupancy, config.seed
    );

    let mut engine = EngineBuilder::new(config).build()?;
    println!("Initial: {}", engine.stats());
    println!();

    // 1. Animated turns, one advance per frame.
    for _ in 0..ANIMATED_TURNS {
        engine.request_turn();
        let moves = engine.pending_moves().len();
        let mut frames = 0u32;
        while !engine.advance(FRAME_SECS) {
            frames += 1;
        }
        engine.audit()?;
        println!("{:>9}: {moves:>5} moves animated over {frames} frames", engine.turn());
    }

    // 2. Headless turns.
    let t0 = Instant::now();
    let mut progress = Progress::default();
    engine.run_turns(HEADLESS_TURNS, &mut progress)?;
    let elapsed = t0.elapsed();
    engine.audit()?;

    let stats = engine.stats();
    ensure!(
        stats.agents == engine.agents().count,
        "grid holds {} agents but {} exist",
        stats.agents,
        engine.agents().count
    );

    println!();
    println!("Ran {HEADLESS_TURNS} turns in {:.3} s", elapsed.as_secs_f64());
    println!("Final:   {stats}");
    println!();
    print_grid(&engine);

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
