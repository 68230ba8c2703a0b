use crate::grid::Grid;
use crate::types::{Phase, Tile, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub score: u64,
    pub best_tile: Tile,
    pub moves: u32,
    pub episode_id: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.best_tile = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.phase = Phase::Playing;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn to_grid(&self) -> Grid {
        Grid::from_rows(self.grid)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            best_tile: 0,
            moves: 0,
            episode_id: 0,
            phase: Phase::Playing,
        };
        s.clear();
        s
    }
}
