//! Slide module - compress/merge logic and move orchestration
//!
//! Every direction is handled as a slide toward the left edge. The grid is
//! normalized with [`Orientation`], each row goes through
//! compress → merge → compress, and the result is restored to the original
//! orientation.
//!
//! Merging is single-pass: a tile produced by a merge is never merged again
//! in the same move, so `[2, 2, 2, 2]` slides to `[4, 4, 0, 0]`.

use crate::grid::{Grid, Orientation, Row};
use crate::types::{Direction, Tile};

/// Result of applying one direction to a grid (before any spawn)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// Sum of the tiles created by merges during this move
    pub score_delta: u64,
    /// False iff `grid` is identical to the input
    pub moved: bool,
}

/// Shift non-zero tiles to the left, keeping their order, and pad with zeros
pub fn compress_row(row: &[Tile]) -> Row {
    let mut out: Row = [0; crate::types::GRID_SIZE];
    let mut write = 0;
    for &tile in row {
        if tile != 0 && write < out.len() {
            out[write] = tile;
            write += 1;
        }
    }
    out
}

/// One left-to-right merge pass over a compressed row
///
/// Returns the score gained. Leaves zeros where tiles were absorbed; callers
/// compress again afterwards. A pair whose double does not fit in a [`Tile`]
/// is left unmerged.
pub fn merge_row(row: &mut Row) -> u64 {
    let mut score = 0u64;
    for i in 0..row.len().saturating_sub(1) {
        if row[i] != 0 && row[i] == row[i + 1] {
            if let Some(merged) = row[i].checked_mul(2) {
                row[i] = merged;
                row[i + 1] = 0;
                score += u64::from(merged);
            }
        }
    }
    score
}

/// Slide a single row toward index 0
///
/// Returns the new row and the score of the merges it made.
///
/// # Examples
///
/// ```
/// use tui_2048_core::slide::slide_row;
///
/// assert_eq!(slide_row(&[2, 2, 0, 0]), ([4, 0, 0, 0], 4));
/// assert_eq!(slide_row(&[2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(slide_row(&[0, 4, 0, 4]), ([8, 0, 0, 0], 8));
/// ```
pub fn slide_row(row: &Row) -> (Row, u64) {
    let mut out = compress_row(row);
    let score = merge_row(&mut out);
    (compress_row(&out), score)
}

/// Apply a direction to the grid
///
/// Pure: `grid` is only read, and the returned outcome carries a new grid.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{move_grid, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]);
/// let outcome = move_grid(&grid, Direction::Right);
///
/// assert_eq!(outcome.grid.rows()[0], [0, 0, 0, 4]);
/// assert_eq!(outcome.score_delta, 4);
/// assert!(outcome.moved);
/// ```
pub fn move_grid(grid: &Grid, direction: Direction) -> MoveOutcome {
    let orientation = Orientation::for_direction(direction);
    let mut work = orientation.normalize(grid);

    let mut score_delta = 0u64;
    let mut moved = false;
    for row in work.rows_mut().iter_mut() {
        let (slid, score) = slide_row(row);
        score_delta += score;
        if slid != *row {
            moved = true;
        }
        *row = slid;
    }

    MoveOutcome {
        grid: orientation.restore(&work),
        score_delta,
        moved,
    }
}
