//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 grid engine and a small session type built on
//! top of it. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Randomness is injected through [`TileRng`]; same seed, same game
//! - **Testable**: Unit tests for every rule, plus scripted RNGs for exact spawns
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: `Grid` is a `Copy` array; no operation allocates
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid and the transpose/reverse orientation helpers
//! - [`slide`]: row compress/merge and [`move_grid`]
//! - [`spawn`]: random tile injection and [`create_initial_grid`]
//! - [`rules`]: terminal-state detection with [`has_lost`]
//! - [`rng`]: the [`TileRng`] trait and a seedable LCG
//! - [`game_state`]: score, phase and restart on top of the engine
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as possible toward the chosen edge
//! - **Merge**: two equal neighbours combine into one tile of double value, once per tile per move
//! - **Score**: each merge adds the value of the tile it creates
//! - **Spawn**: after a move that changed the grid, a 2 (90%) or 4 (10%) appears in a random empty cell
//! - **Game over**: the grid is full and no two orthogonal neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_core::types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! let before = game.grid().tile_count();
//!
//! // Try every direction; at least one moves a fresh two-tile grid.
//! let moved = Direction::ALL
//!     .iter()
//!     .any(|&dir| game.apply_action(GameAction::Move(dir)));
//! assert!(moved);
//!
//! // A successful move spawns exactly one tile (merges may remove one).
//! assert!(game.grid().tile_count() <= before + 1);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod slide;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveEvent};
pub use grid::{Grid, Orientation, Row};
pub use rng::{SimpleRng, TileRng};
pub use rules::{available_moves, can_move, has_lost};
pub use slide::{compress_row, merge_row, move_grid, slide_row, MoveOutcome};
pub use snapshot::GameSnapshot;
pub use spawn::{create_initial_grid, spawn_random_tile, try_spawn, Spawned};
