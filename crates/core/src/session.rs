//! Game session - the move/spawn/evaluate control flow around an [`Engine`]
//!
//! The engine itself is status-agnostic: it will happily slide a grid that has
//! already reached 4096 or locked up. The session is where terminal status is
//! latched and where further moves are refused until a restart.
//!
//! Per directional action:
//!
//! 1. Refuse it if a terminal status is latched.
//! 2. [`Engine::apply_move`].
//! 3. If something moved: [`Engine::spawn_tiles`] with the per-move count,
//!    then [`Engine::evaluate_terminal_state`], latching the result.
//!
//! Restart is always accepted.

use tracing::info;

use crate::engine::Engine;
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GameStatus};

/// What happened in response to a [`GameAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A terminal status is latched; the grid was not touched
    Rejected,
    /// The move changed nothing, so nothing spawned
    Unchanged,
    /// Tiles moved, new tiles spawned and the status was re-evaluated
    Moved {
        merges: u32,
        spawned: u8,
        status: GameStatus,
    },
    /// Fresh grid, status cleared
    Restarted,
}

impl MoveOutcome {
    /// True if the grid contents changed
    pub fn changed_grid(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::Restarted)
    }
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    engine: Engine<R>,
    /// Latched status; flags only turn on until the next restart.
    status: GameStatus,
    /// Moves that changed the grid in the current episode
    moves: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
}

impl GameSession<SimpleRng> {
    /// Start a game with default rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_engine(Engine::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Wrap an engine and reset it to a fresh grid
    pub fn with_engine(mut engine: Engine<R>) -> Self {
        engine.reset();
        Self {
            engine,
            status: GameStatus::NONE,
            moves: 0,
            episode_id: 0,
        }
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    /// Latched status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Whether directional actions are currently accepted
    pub fn accepts_moves(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Apply a frontend action
    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::Move(direction) => self.play(direction),
            GameAction::Restart => {
                self.restart();
                MoveOutcome::Restarted
            }
        }
    }

    fn play(&mut self, direction: Direction) -> MoveOutcome {
        if !self.accepts_moves() {
            return MoveOutcome::Rejected;
        }

        let result = self.engine.apply_move(direction);
        if !result.moved {
            return MoveOutcome::Unchanged;
        }

        let spawned = self.engine.spawn_tiles(self.engine.config().spawn_per_move);
        let fresh = self.engine.evaluate_terminal_state();
        let was_terminal = self.status.is_terminal();
        self.status.latch(fresh);
        self.moves += 1;

        if !was_terminal && self.status.is_terminal() {
            info!(
                won = self.status.has_won,
                lost = self.status.has_lost,
                moves = self.moves,
                max_tile = self.engine.grid().max_tile(),
                "game finished"
            );
        }

        MoveOutcome::Moved {
            merges: result.merges,
            spawned,
            status: self.status,
        }
    }

    /// Continue from a prepared grid.
    ///
    /// The move counter restarts and the status is evaluated from the new
    /// grid, so loading a locked or winning position latches immediately.
    pub fn load_position(&mut self, grid: Grid) {
        self.engine.load_grid(grid);
        self.moves = 0;
        self.status = self.engine.evaluate_terminal_state();
    }

    /// Reset the grid and clear the latched status
    pub fn restart(&mut self) {
        self.engine.reset();
        self.status = GameStatus::NONE;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Copy the renderable state into an existing snapshot (no allocation)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let grid = self.engine.grid();
        out.cells = grid.rows();
        out.status = self.status;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.max_tile = grid.max_tile();
        out.empty_count = grid.empty_count() as u8;
        out.win_tile = self.engine.config().win_tile;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
