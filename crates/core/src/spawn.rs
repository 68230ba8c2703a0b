//! Spawn module - random tile injection and initial grid creation

use crate::grid::Grid;
use crate::rng::TileRng;
use crate::types::{CellPos, Tile, INITIAL_TILES, SPAWN_TWO_PROBABILITY, TILE_FOUR, TILE_TWO};

/// Where a tile was spawned and with what value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub pos: CellPos,
    pub value: Tile,
}

/// Draw the value of a new tile: 2 with probability 0.9, otherwise 4
pub fn draw_tile_value<R: TileRng + ?Sized>(rng: &mut R) -> Tile {
    if rng.next_unit() < SPAWN_TWO_PROBABILITY {
        TILE_TWO
    } else {
        TILE_FOUR
    }
}

/// Spawn into a copy of `grid`, reporting where the tile went
///
/// Returns `None` (and draws nothing from `rng`) when the grid is full.
pub fn try_spawn<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> (Grid, Option<Spawned>) {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (*grid, None);
    }

    let pos = empty[rng.pick_index(empty.len())];
    let value = draw_tile_value(rng);

    let mut out = *grid;
    out.set(pos.row, pos.col, value);
    (out, Some(Spawned { pos, value }))
}

/// Place a 2 or a 4 into one uniformly chosen empty cell
///
/// A full grid comes back with identical values.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{spawn_random_tile, Grid, SimpleRng};
///
/// let mut rng = SimpleRng::new(12345);
/// let grid = spawn_random_tile(&Grid::new(), &mut rng);
/// assert_eq!(grid.tile_count(), 1);
/// ```
pub fn spawn_random_tile<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    try_spawn(grid, rng).0
}

/// An empty grid with two random tiles
pub fn create_initial_grid<R: TileRng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    for _ in 0..INITIAL_TILES {
        grid = spawn_random_tile(&grid, rng);
    }
    grid
}
