//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid engine, session control flow, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 8x8 square:
//!
//! - **Rows**: 8 (indexed 0-7, top to bottom)
//! - **Columns**: 8 (indexed 0-7, left to right)
//! - **Empty cell**: value `0`
//! - **Tile**: any non-zero power of two
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_TILE` | 4096 | Reaching this tile wins the game |
//! | `SPAWN_PER_MOVE` | 2 | Tiles spawned after every move that changes the grid |
//! | `RESET_SPAWN_COUNT` | 1 | Tiles spawned on a fresh grid |
//! | `SPAWN_VALUES` | 2, 4 | Values a spawned tile can take, chosen uniformly |
//!
//! # Examples
//!
//! ```
//! use tui_4096_types::{Axis, Direction, GameAction, GameStatus, GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.axis(), Axis::Row);
//!
//! // Parse a game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! // Latch terminal status
//! let mut status = GameStatus::NONE;
//! status.latch(GameStatus { has_won: true, has_lost: false });
//! assert!(status.is_terminal());
//!
//! assert_eq!(GRID_SIZE, 8);
//! ```

/// Grid side length (8 rows and 8 columns)
pub const GRID_SIZE: usize = 8;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: Tile = 4096;

/// Number of tiles spawned after each move that changed the grid.
///
/// Spawning more than one tile per move is part of this variant's rules.
pub const SPAWN_PER_MOVE: u8 = 2;

/// Number of tiles placed on a freshly reset grid
pub const RESET_SPAWN_COUNT: u8 = 1;

/// Values a newly spawned tile can take (uniformly chosen)
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// A tile value. `0` is an empty cell; anything else is a power of two.
pub type Tile = u32;


/// The four slide directions
///
/// - **Up**: tiles travel toward row 0
/// - **Down**: tiles travel toward row 7
/// - **Left**: tiles travel toward column 0
/// - **Right**: tiles travel toward column 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which kind of line a move compacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/Right moves compact each row
    Row,
    /// Up/Down moves compact each column
    Column,
}

impl Direction {
    /// All four directions, in Up, Down, Left, Right order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_4096_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The kind of line this direction compacts
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Column,
            Direction::Left | Direction::Right => Axis::Row,
        }
    }

    /// True when tiles travel toward the high index (row 7 / column 7).
    ///
    /// Lines for these directions are scanned from index 7 down to 0.
    pub fn is_reverse(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// Actions the frontend can apply to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide all tiles in one direction
    Move(Direction),
    /// Start over on a fresh grid (accepted in any state)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_4096_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Result of sliding the grid in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// At least one tile relocated or merged
    pub moved: bool,
    /// Number of pairwise merges performed
    pub merges: u32,
}

/// Terminal-state flags computed from the grid contents.
///
/// The engine computes these fresh on every evaluation. Callers that need the
/// flags to stick until reset use [`GameStatus::latch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameStatus {
    pub has_won: bool,
    pub has_lost: bool,
}

/// Single-valued view of a [`GameStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Neither won nor lost
    pub const NONE: GameStatus = GameStatus {
        has_won: false,
        has_lost: false,
    };

    pub fn is_terminal(&self) -> bool {
        self.has_won || self.has_lost
    }

    /// Merge a freshly evaluated status into this one. Flags only ever turn on.
    pub fn latch(&mut self, fresh: GameStatus) {
        self.has_won |= fresh.has_won;
        self.has_lost |= fresh.has_lost;
    }

    /// Collapse to a single outcome. A win is reported even if the board is
    /// also locked.
    pub fn outcome(&self) -> Outcome {
        if self.has_won {
            Outcome::Won
        } else if self.has_lost {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}
