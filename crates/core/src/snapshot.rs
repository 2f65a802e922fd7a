use crate::types::{GameStatus, Tile, GRID_SIZE, WIN_TILE};

/// Plain-data copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values, `cells[row][col]`
    pub cells: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub status: GameStatus,
    pub moves: u32,
    pub episode_id: u32,
    pub max_tile: Tile,
    pub empty_count: u8,
    pub win_tile: Tile,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
        self.status = GameStatus::NONE;
        self.moves = 0;
        self.episode_id = 0;
        self.max_tile = 0;
        self.empty_count = (GRID_SIZE * GRID_SIZE) as u8;
        self.win_tile = WIN_TILE;
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
            status: GameStatus::NONE,
            moves: 0,
            episode_id: 0,
            max_tile: 0,
            empty_count: 0,
            win_tile: WIN_TILE,
        };
        s.clear();
        s
    }
}
