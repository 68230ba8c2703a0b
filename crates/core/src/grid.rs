//! Grid module - the N x N tile board
//!
//! The grid is a fixed-size 2D array of tile values where 0 denotes an empty cell.
//! It is `Copy`, so every engine operation takes a snapshot and returns a fresh value.
//! Coordinates: (row, col) where row ranges 0..N (top to bottom), col ranges 0..N
//! (left to right).

use arrayvec::ArrayVec;

use crate::types::{CellPos, Direction, Tile, CELL_COUNT, GRID_SIZE};

/// One row of the grid
pub type Row = [Tile; GRID_SIZE];

/// The game grid - `GRID_SIZE` rows of `GRID_SIZE` tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: [Row; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from explicit rows
    pub const fn from_rows(rows: [Row; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Borrow all rows
    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.rows
    }

    /// Get the tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Check if (row, col) is in bounds and empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(0)
    }

    /// Iterate over every tile in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rows.iter().flat_map(|r| r.iter().copied())
    }

    /// Positions of all empty cells, in row-major order
    ///
    /// Stack-only; never allocates.
    pub fn empty_cells(&self) -> ArrayVec<CellPos, CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &tile) in cells.iter().enumerate() {
                if tile == 0 {
                    out.push(CellPos::new(row, col));
                }
            }
        }
        out
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.tiles().filter(|&t| t == 0).count()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.tiles().all(|t| t != 0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.tiles().map(u64::from).sum()
    }

    /// Largest tile on the grid (0 for an empty grid)
    pub fn max_tile(&self) -> Tile {
        self.tiles().max().unwrap_or(0)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for (r, cells) in self.rows.iter().enumerate() {
            for (c, &tile) in cells.iter().enumerate() {
                out.rows[c][r] = tile;
            }
        }
        out
    }

    /// Reverse every row left-to-right
    pub fn reverse_rows(&self) -> Self {
        let mut out = *self;
        for row in &mut out.rows {
            row.reverse();
        }
        out
    }

    /// Mutable access to the rows, used by the slide pass
    pub(crate) fn rows_mut(&mut self) -> &mut [Row; GRID_SIZE] {
        &mut self.rows
    }
}

impl From<[Row; GRID_SIZE]> for Grid {
    fn from(rows: [Row; GRID_SIZE]) -> Self {
        Self::from_rows(rows)
    }
}

/// Axis flips that map a direction onto a slide toward the left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    transpose: bool,
    reverse: bool,
}

impl Orientation {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                transpose: false,
                reverse: false,
            },
            Direction::Right => Self {
                transpose: false,
                reverse: true,
            },
            Direction::Up => Self {
                transpose: true,
                reverse: false,
            },
            Direction::Down => Self {
                transpose: true,
                reverse: true,
            },
        }
    }

    /// Transpose first, then reverse rows
    pub fn normalize(&self, grid: &Grid) -> Grid {
        let mut out = *grid;
        if self.transpose {
            out = out.transpose();
        }
        if self.reverse {
            out = out.reverse_rows();
        }
        out
    }

    /// Inverse of [`Orientation::normalize`]: reverse rows first, then transpose
    pub fn restore(&self, grid: &Grid) -> Grid {
        let mut out = *grid;
        if self.reverse {
            out = out.reverse_rows();
        }
        if self.transpose {
            out = out.transpose();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ])
    }

    #[test]
    fn test_grid_new_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.empty_count(), CELL_COUNT);
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(grid.max_tile(), 0);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_grid_get_set_bounds() {
        let mut grid = Grid::new();
        assert!(grid.set(3, 2, 8));
        assert_eq!(grid.get(3, 2), Some(8));
        assert!(!grid.set(4, 0, 2));
        assert!(!grid.set(0, 4, 2));
        assert_eq!(grid.get(0, GRID_SIZE), None);
        assert!(grid.is_empty_at(0, 0));
        assert!(!grid.is_empty_at(3, 2));
    }

    #[test]
    fn test_transpose_swaps_axes() {
        let t = sample().transpose();
        assert_eq!(t.rows()[0], [1, 5, 9, 13]);
        assert_eq!(t.rows()[3], [4, 8, 12, 16]);
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn test_reverse_rows() {
        let r = sample().reverse_rows();
        assert_eq!(r.rows()[0], [4, 3, 2, 1]);
        assert_eq!(r.reverse_rows(), sample());
    }

    #[test]
    fn test_orientation_restore_inverts_normalize() {
        for dir in Direction::ALL {
            let o = Orientation::for_direction(dir);
            assert_eq!(o.restore(&o.normalize(&sample())), sample(), "{:?}", dir);
        }
    }

    #[test]
    fn test_down_orientation_puts_bottom_row_first() {
        // After normalizing for Down, row 0 is column 0 read bottom-to-top.
        let n = Orientation::for_direction(Direction::Down).normalize(&sample());
        assert_eq!(n.rows()[0], [13, 9, 5, 1]);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0], [2, 2, 2, 2]]);
        let empty = grid.empty_cells();
        assert_eq!(empty.as_slice(), &[CellPos::new(0, 1), CellPos::new(2, 3)]);
    }
}
