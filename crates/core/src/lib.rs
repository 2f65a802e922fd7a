//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid rules, the engine that applies them, and the
//! session control flow a frontend drives. It has no dependency on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical spawns
//! - **Testable**: Unit tests for every rule, property tests for the invariants
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation moves and spawns over a fixed 64-cell grid
//!
//! The only non-workspace dependencies are `arrayvec` (stack-allocated
//! empty-cell lists), `thiserror` (config errors) and `tracing` (events only;
//! the frontend decides where they go).
//!
//! # Module Structure
//!
//! - [`grid`]: 8x8 tile matrix with the slide/merge transform
//! - [`engine`]: moves, spawns, terminal evaluation and reset over one grid
//! - [`session`]: latched status and move gating around an engine
//! - [`rng`]: seedable random source
//! - [`config`]: rule parameters and their validation
//! - [`snapshot`]: plain-data frame for renderers
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels as far as it can toward the chosen edge
//! - **Merge**: two equal tiles meeting along the travel axis become one tile
//!   of double value; a merged tile does not merge again in the same move
//! - **Spawn**: after a move that changed the grid, 2 tiles (each 2 or 4) appear
//!   in random empty cells; a reset places a single tile
//! - **Win**: a 4096 tile appears
//! - **Loss**: the grid is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_4096_core::GameSession;
//! use tui_4096_types::{Direction, GameAction};
//!
//! // Create a game; the first tile is already placed
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.grid().tile_count(), 1);
//!
//! // Apply game actions
//! for dir in [Direction::Left, Direction::Up, Direction::Right] {
//!     game.apply_action(GameAction::Move(dir));
//! }
//!
//! // Check game state
//! assert!(!game.status().is_terminal());
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_4096_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use grid::{EmptyCells, Grid};
pub use rng::{RandomSource, SimpleRng};
pub use session::{GameSession, MoveOutcome};
pub use snapshot::GameSnapshot;
