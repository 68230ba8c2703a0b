//! Game state module - a playable session on top of the grid engine
//!
//! The session owns the current grid, the score and the phase. Each accepted
//! move replaces the grid wholesale with the engine's result; nothing is
//! mutated in place.

use log::{debug, info};

use crate::rng::{SimpleRng, TileRng};
use crate::rules::has_lost;
use crate::slide::move_grid;
use crate::snapshot::GameSnapshot;
use crate::spawn::{create_initial_grid, try_spawn, Spawned};
use crate::types::{Direction, GameAction, Phase, Tile};
use crate::Grid;

/// Feedback for the layer that reacts to successful moves (sound, flashes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    pub score_delta: u64,
    pub spawned: Option<Spawned>,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = SimpleRng> {
    grid: Grid,
    score: u64,
    phase: Phase,
    /// Accepted moves in the current episode.
    moves: u32,
    best_tile: Tile,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last accepted move (consumed by observers).
    last_event: Option<MoveEvent>,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Create a new game drawing tiles from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let grid = create_initial_grid(&mut rng);
        Self {
            grid,
            score: 0,
            phase: Phase::Playing,
            moves: 0,
            best_tile: grid.max_tile(),
            episode_id: 0,
            last_event: None,
            rng,
        }
    }

    /// Resume from an explicit grid (for tests and replays)
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let phase = if has_lost(&grid) {
            Phase::GameOver
        } else {
            Phase::Playing
        };
        Self {
            grid,
            score: 0,
            phase,
            moves: 0,
            best_tile: grid.max_tile(),
            episode_id: 0,
            last_event: None,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn best_tile(&self) -> Tile {
        self.best_tile
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.score = self.score;
        out.best_tile = self.best_tile;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take the event produced by the last accepted move, if any
    pub fn take_last_event(&mut self) -> Option<MoveEvent> {
        self.last_event.take()
    }

    /// Apply a direction
    ///
    /// Returns true if the grid changed. A rejected move leaves score, turn
    /// counter and grid untouched and spawns nothing.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let outcome = move_grid(&self.grid, direction);
        if !outcome.moved {
            return false;
        }

        let (grid, spawned) = try_spawn(&outcome.grid, &mut self.rng);
        self.grid = grid;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves = self.moves.wrapping_add(1);
        self.best_tile = self.best_tile.max(grid.max_tile());

        let game_over = has_lost(&grid);
        if game_over {
            self.phase = Phase::GameOver;
        }

        debug!(
            "move {} dir={} delta={} score={}",
            self.moves,
            direction.as_str(),
            outcome.score_delta,
            self.score
        );
        if game_over {
            info!(
                "game over: episode={} score={} best_tile={} moves={}",
                self.episode_id, self.score, self.best_tile, self.moves
            );
        }

        self.last_event = Some(MoveEvent {
            direction,
            score_delta: outcome.score_delta,
            spawned,
            game_over,
        });
        true
    }

    /// Start a fresh episode from the same RNG stream
    pub fn restart(&mut self) {
        self.grid = create_initial_grid(&mut self.rng);
        self.score = 0;
        self.phase = Phase::Playing;
        self.moves = 0;
        self.best_tile = self.grid.max_tile();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        info!("restart: episode={}", self.episode_id);
    }

    /// Apply a game action
    ///
    /// Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.try_move(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}
