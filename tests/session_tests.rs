//! Session tests - the move/spawn/evaluate control flow and move gating

use tui_4096::core::{Engine, EngineConfig, GameSession, Grid, MoveOutcome, SimpleRng};
use tui_4096::types::{Direction, GameAction, GameStatus, GRID_SIZE, SPAWN_PER_MOVE, WIN_TILE};

fn locked_rows() -> [[u32; GRID_SIZE]; GRID_SIZE] {
    let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = if (r + c) % 2 == 0 { 2 } else { 4 };
        }
    }
    rows
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(12345);
    assert_eq!(session.grid().tile_count(), 1);
    assert!(session.accepts_moves());

    // Tile count = reset tile + spawns - merges.
    let mut expected = 1u32;
    for dir in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
        if let MoveOutcome::Moved { merges, spawned, .. } = session.apply_action(GameAction::Move(dir)) {
            expected = expected + spawned as u32 - merges;
        }
    }
    assert_eq!(session.grid().tile_count() as u32, expected);
    assert!(session.moves() <= 4);
}

#[test]
fn test_unchanged_move_spawns_nothing() {
    let mut session = GameSession::new(1);
    let mut grid = Grid::new();
    grid.set(0, 0, 2);
    grid.set(0, 1, 4);
    session.load_position(grid.clone());

    assert_eq!(
        session.apply_action(GameAction::Move(Direction::Left)),
        MoveOutcome::Unchanged
    );
    assert_eq!(
        session.apply_action(GameAction::Move(Direction::Up)),
        MoveOutcome::Unchanged
    );
    assert_eq!(session.grid(), &grid);
    assert_eq!(session.moves(), 0);
}

#[test]
fn test_move_spawns_configured_count() {
    let mut session = GameSession::new(8);
    let mut grid = Grid::new();
    grid.set(7, 7, 2);
    session.load_position(grid);

    let outcome = session.apply_action(GameAction::Move(Direction::Up));
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            merges: 0,
            spawned: SPAWN_PER_MOVE,
            status: GameStatus::NONE,
        }
    );
    assert_eq!(session.grid().get(0, 7), Some(2));
    assert_eq!(session.grid().tile_count(), 1 + SPAWN_PER_MOVE as usize);
}

#[test]
fn test_custom_spawn_count() {
    let config = EngineConfig {
        spawn_per_move: 5,
        ..EngineConfig::default()
    };
    let engine = Engine::with_config(config, SimpleRng::new(4)).unwrap();
    let mut session = GameSession::with_engine(engine);
    let mut grid = Grid::new();
    grid.set(0, 0, 2);
    session.load_position(grid);

    session.apply_action(GameAction::Move(Direction::Right));
    assert_eq!(session.grid().tile_count(), 6);
}

#[test]
fn test_spawn_truncated_when_grid_fills() {
    // 63 tiles, one move frees exactly one cell: only one of the per-move
    // spawns can land.
    let mut rows = locked_rows();
    rows[0][0] = 4;
    rows[0][1] = 4;
    let mut session = GameSession::new(3);
    session.load_position(Grid::from_rows(rows));

    // Row 0 becomes [8, 2, 4, 2, 4, 2, 4, _]; the other rows cannot move left.
    match session.apply_action(GameAction::Move(Direction::Left)) {
        MoveOutcome::Moved { merges, spawned, .. } => {
            assert_eq!(merges, 1);
            assert_eq!(spawned, 1);
        }
        other => panic!("expected Moved, got {:?}", other),
    }
    assert_eq!(session.grid().empty_count(), 0);
}

#[test]
fn test_win_latches_and_gates_moves() {
    let mut session = GameSession::new(11);
    let mut grid = Grid::new();
    grid.set(2, 3, WIN_TILE / 2);
    grid.set(5, 3, WIN_TILE / 2);
    session.load_position(grid);
    assert!(session.accepts_moves());

    let outcome = session.apply_action(GameAction::Move(Direction::Down));
    match outcome {
        MoveOutcome::Moved { status, merges, .. } => {
            assert!(status.has_won);
            assert_eq!(merges, 1);
        }
        other => panic!("expected Moved, got {:?}", other),
    }
    assert_eq!(session.grid().get(7, 3), Some(WIN_TILE));
    assert!(!session.accepts_moves());

    let frozen = session.grid().clone();
    let moves = session.moves();
    for dir in Direction::ALL {
        assert_eq!(
            session.apply_action(GameAction::Move(dir)),
            MoveOutcome::Rejected
        );
    }
    assert_eq!(session.grid(), &frozen);
    assert_eq!(session.moves(), moves);
    assert!(session.status().has_won);
}

#[test]
fn test_loss_latches_and_gates_moves() {
    let mut session = GameSession::new(2);
    session.load_position(Grid::from_rows(locked_rows()));

    assert!(session.status().has_lost);
    assert_eq!(
        session.apply_action(GameAction::Move(Direction::Left)),
        MoveOutcome::Rejected
    );
}

#[test]
fn test_restart_is_accepted_in_terminal_state() {
    let mut session = GameSession::new(2);
    session.load_position(Grid::from_rows(locked_rows()));
    assert!(!session.accepts_moves());

    assert_eq!(
        session.apply_action(GameAction::Restart),
        MoveOutcome::Restarted
    );
    assert_eq!(session.status(), GameStatus::NONE);
    assert_eq!(session.grid().tile_count(), 1);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.episode_id(), 1);
    assert!(session.accepts_moves());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let mut a = GameSession::new(424242);
    let mut b = GameSession::new(424242);
    for dir in script {
        assert_eq!(
            a.apply_action(GameAction::Move(dir)),
            b.apply_action(GameAction::Move(dir))
        );
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut session = GameSession::new(99);
    let mut latched = GameStatus::NONE;
    for step in 0..500 {
        let dir = Direction::ALL[step % 4];
        let outcome = session.apply_action(GameAction::Move(dir));

        if latched.is_terminal() {
            assert_eq!(outcome, MoveOutcome::Rejected);
            break;
        }
        latched = session.status();

        for &v in session.grid().cells() {
            assert!(v == 0 || v.is_power_of_two(), "bad tile {}", v);
        }
    }
}
