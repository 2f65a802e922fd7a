//! tui-4096 (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `tui_4096::{core,input,term,types}` so the binary, integration tests and
//! benches share a single import path.

pub use tui_4096_core as core;
pub use tui_4096_input as input;
pub use tui_4096_term as term;
pub use tui_4096_types as types;
