//! Rules module - terminal-state detection

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::slide::move_grid;
use crate::types::{Direction, GRID_SIZE};

/// True when the grid is full and no two orthogonal neighbours are equal
///
/// Each cell is compared only with the cell below and the cell to its right,
/// which covers every adjacent pair exactly once.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{has_lost, Grid};
///
/// let stuck = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
/// assert!(has_lost(&stuck));
/// assert!(!has_lost(&Grid::new()));
/// ```
pub fn has_lost(grid: &Grid) -> bool {
    let rows = grid.rows();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let tile = rows[r][c];
            if tile == 0 {
                return false;
            }
            if r + 1 < GRID_SIZE && tile == rows[r + 1][c] {
                return false;
            }
            if c + 1 < GRID_SIZE && tile == rows[r][c + 1] {
                return false;
            }
        }
    }
    true
}

/// True when sliding in `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    move_grid(grid, direction).moved
}

/// Directions that would change the grid, in [`Direction::ALL`] order
pub fn available_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(grid, dir))
        .collect()
}
