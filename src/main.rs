//! Terminal 4096 runner (default binary).
//!
//! This is the frontend around the grid engine: it polls crossterm for key
//! presses, feeds them to a `GameSession`, and redraws through the
//! framebuffer renderer. The session decides what a key press does; this loop
//! only routes input and output.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_4096::core::{GameSession, GameSnapshot, MoveOutcome};
use tui_4096::input::{action_for_event, should_quit};
use tui_4096::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Parser, Debug)]
#[command(name = "tui-4096")]
#[command(about = "Slide and merge tiles on an 8x8 grid until one reaches 4096", long_about = None)]
struct Cli {
    /// RNG seed for tile spawns (defaults to one derived from the clock)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Log file; the terminal itself is owned by the renderer
    #[arg(long, value_name = "FILE", default_value = "tui-4096.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file (use RUST_LOG to control level, e.g. RUST_LOG=debug).
fn init_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut session = GameSession::new(seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Block until the next event; nothing changes without input.
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!(moves = session.moves(), "quit");
                    return Ok(());
                }
                if let Some(action) = action_for_event(key) {
                    if session.apply_action(action) == MoveOutcome::Restarted {
                        info!(episode = session.episode_id(), "restarted");
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
