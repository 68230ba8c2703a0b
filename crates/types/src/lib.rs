//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid engine, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The board is a square of `GRID_SIZE` x `GRID_SIZE` cells:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//! - **Empty cell**: value 0
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance a spawned tile is a 2 |
//! | `TILE_TWO` | 2 | Common spawn value |
//! | `TILE_FOUR` | 4 | Rare spawn value |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let parsed = Direction::from_str("Left").unwrap();
//! assert_eq!(parsed, Direction::Left);
//!
//! // Opposite directions
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveRight").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Right));
//!
//! // Board dimensions
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Side length of the square grid (4 cells)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of tiles spawned onto a fresh grid
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 2 (otherwise 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Value of the common spawned tile
pub const TILE_TWO: Tile = 2;

/// Value of the rare spawned tile
pub const TILE_FOUR: Tile = 4;

/// A cell value on the grid
///
/// - `0`: Empty cell
/// - any positive value: a tile (powers of two in practice, only equality is compared)
pub type Tile = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_defaults() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(TILE_TWO, 2);
        assert_eq!(TILE_FOUR, 4);
        assert!((SPAWN_TWO_PROBABILITY - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn direction_roundtrips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn restart_action_parses() {
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("reset"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("jump"), None);
    }
}

/// The four slide directions
///
/// The grid engine normalizes every direction to a slide toward the left edge:
/// - **Left**: rows as-is
/// - **Right**: rows reversed
/// - **Up**: grid transposed
/// - **Down**: grid transposed, then rows reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("D"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
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

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions come from keyboard input and swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward one edge
    Move(Direction),
    /// Start a fresh game (always allowed, required after game over)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "restart" | "reset" => Some(GameAction::Restart),
            other => Direction::from_str(other.strip_prefix("move").unwrap_or(other))
                .map(GameAction::Move),
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

/// Lifecycle phase of a game session
///
/// `Playing` moves to `GameOver` when no legal move remains after a spawn.
/// `GameOver` only returns to `Playing` through [`GameAction::Restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

/// A (row, col) coordinate on the grid, 0-indexed from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
