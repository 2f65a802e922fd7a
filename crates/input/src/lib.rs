//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`].
//!
//! Moves are edge-triggered: only key presses produce actions. Terminal
//! auto-repeat and key releases are dropped, so holding an arrow key slides
//! the grid once.

pub mod map;

pub use tui_4096_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
