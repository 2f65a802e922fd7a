//! Grid engine - moves, spawns, terminal evaluation and reset
//!
//! The engine owns the grid and the random source. It does not track whether
//! the game is over: [`Engine::evaluate_terminal_state`] recomputes the status
//! from the grid on every call, and gating moves on that status is left to the
//! caller (see [`crate::session`]).

use tracing::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Direction, GameStatus, MoveResult, SPAWN_VALUES};

/// The grid engine
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    grid: Grid,
    rng: R,
    config: EngineConfig,
}

impl Engine<SimpleRng> {
    /// Create an engine with an empty grid, default rules and an LCG seeded
    /// with `seed`. Call [`Engine::reset`] to place the first tile.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// Create an engine with default rules around a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            grid: Grid::new(),
            rng,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(),
            rng,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replace the grid contents wholesale (puzzle setups, tests)
    pub fn load_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Slide and merge all tiles toward `direction`, mutating the grid in place.
    ///
    /// Does not spawn. Callers spawn only when `moved` is true.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let result = self.grid.slide(direction);
        debug!(
            direction = direction.as_str(),
            moved = result.moved,
            merges = result.merges,
            "applied move"
        );
        result
    }

    /// Place up to `count` new tiles (2 or 4, even odds) in uniformly chosen
    /// empty cells. Stops early once the grid is full.
    ///
    /// Returns the number of tiles actually placed.
    pub fn spawn_tiles(&mut self, count: u8) -> u8 {
        let mut placed = 0;
        for _ in 0..count {
            if !self.spawn_one() {
                break;
            }
            placed += 1;
        }
        debug!(requested = count, placed, "spawned tiles");
        placed
    }

    fn spawn_one(&mut self) -> bool {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return false;
        }

        let (row, col) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = SPAWN_VALUES[self.rng.next_range(SPAWN_VALUES.len() as u32) as usize];
        self.grid.set(row, col, value);
        trace!(row, col, value, "spawned tile");
        true
    }

    /// Compute win/loss from the current grid.
    ///
    /// Won: some cell equals the configured win tile.
    /// Lost: no empty cell and no equal horizontal or vertical neighbours. The
    /// neighbour scan only runs on a full grid.
    pub fn evaluate_terminal_state(&self) -> GameStatus {
        let has_won = self.grid.contains(self.config.win_tile);
        let has_lost = self.grid.empty_count() == 0 && !self.grid.has_mergeable_pair();
        GameStatus { has_won, has_lost }
    }

    /// Clear the grid and place the reset tile(s).
    ///
    /// Uses `reset_spawn_count` (one tile by default), not the per-move count.
    pub fn reset(&mut self) {
        self.grid.clear();
        let placed = self.spawn_tiles(self.config.reset_spawn_count);
        info!(placed, "grid reset");
    }
}
