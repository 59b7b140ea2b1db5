//! Grid model for a maze panel
//!
//! A panel is a square matrix of cells, each either filled (solid material)
//! or empty (cut away). The outermost ring of cells is the frame of the panel
//! and is always filled; every constructor normalizes it.

pub mod code;
pub mod lexer;
pub mod text;

use std::fmt;

use thiserror::Error;

pub use code::{decode, decode_or_default, encode, GridCodeError};
pub use text::parse_grid;

/// Side length of the reference panel design
pub const DEFAULT_SIZE: usize = 16;

/// Smallest grid that still has an interior cell
pub const MIN_SIZE: usize = 3;

/// Errors for grids that cannot be built at all
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {size} is too small (minimum is {MIN_SIZE})")]
    TooSmall { size: usize },

    #[error("grid is not square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A cell position as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square matrix of filled/empty cells with a filled border ring
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with only the border filled
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < MIN_SIZE {
            return Err(GridError::TooSmall { size });
        }
        let mut grid = Self {
            size,
            cells: vec![false; size * size],
        };
        grid.fill_border();
        Ok(grid)
    }

    /// Build a grid from explicit rows.
    ///
    /// Border cells supplied as empty are forced to filled.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size < MIN_SIZE {
            return Err(GridError::TooSmall { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, cells_in_row) in rows.iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            if cells_in_row.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: cells_in_row.len(),
                });
            }
            cells.extend_from_slice(cells_in_row);
        }

        let mut grid = Self { size, cells };
        let repaired = grid.fill_border();
        if repaired > 0 {
            tracing::warn!(repaired, "open border cells were filled in");
        }
        Ok(grid)
    }

    /// Side length of the grid, border included
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell is filled. Panics when out of range.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Cell state, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.size && col < self.size {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.size - 1 || col == self.size - 1
    }

    /// Set an interior cell. Returns `true` if the grid changed.
    ///
    /// Writes to the border or outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, filled: bool) -> bool {
        if row >= self.size || col >= self.size || self.is_border(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        let changed = self.cells[idx] != filled;
        self.cells[idx] = filled;
        changed
    }

    /// Flip an interior cell. Returns `true` if the grid changed.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Some(filled) => self.set(row, col, !filled),
            None => false,
        }
    }

    /// Positions of all interior cells in row-major order
    pub fn interior(&self) -> impl Iterator<Item = CellPos> + '_ {
        let last = self.size - 1;
        (1..last).flat_map(move |row| (1..last).map(move |col| CellPos::new(row, col)))
    }

    /// True when no interior cell is filled
    pub fn is_interior_empty(&self) -> bool {
        self.interior().all(|p| !self.is_filled(p.row, p.col))
    }

    /// Iterate over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Fill every border cell, returning how many were open
    fn fill_border(&mut self) -> usize {
        let mut repaired = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_border(row, col) {
                    let idx = self.index(row, col);
                    if !self.cells[idx] {
                        self.cells[idx] = true;
                        repaired += 1;
                    }
                }
            }
        }
        repaired
    }
}

impl Default for Grid {
    fn default() -> Self {
        let mut grid = Self {
            size: DEFAULT_SIZE,
            cells: vec![false; DEFAULT_SIZE * DEFAULT_SIZE],
        };
        grid.fill_border();
        grid
    }
}

/// Text form understood by [`parse_grid`]: `#` for filled, `.` for empty
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &filled in row {
                f.write_str(if filled { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_border_only() {
        let grid = Grid::new(5).unwrap();
        assert!(grid.is_filled(0, 2));
        assert!(grid.is_filled(4, 4));
        assert!(grid.is_filled(2, 0));
        assert!(!grid.is_filled(2, 2));
        assert!(grid.is_interior_empty());
    }

    #[test]
    fn test_too_small() {
        assert_eq!(Grid::new(2), Err(GridError::TooSmall { size: 2 }));
    }

    #[test]
    fn test_from_rows_not_square() {
        let rows = vec![vec![true; 3], vec![true; 2], vec![true; 3]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::NotSquare {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_rows_normalizes_border() {
        let rows = vec![vec![false; 4]; 4];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid, Grid::new(4).unwrap());
    }

    #[test]
    fn test_set_ignores_border() {
        let mut grid = Grid::default();
        assert!(!grid.set(0, 3, false));
        assert!(grid.is_filled(0, 3));
        assert!(!grid.set(20, 3, true));
        assert!(grid.set(3, 3, true));
        assert!(!grid.set(3, 3, true));
        assert!(grid.toggle(3, 3));
        assert!(!grid.is_filled(3, 3));
    }

    #[test]
    fn test_interior_order() {
        let grid = Grid::new(4).unwrap();
        let cells: Vec<_> = grid.interior().collect();
        assert_eq!(
            cells,
            vec![
                CellPos::new(1, 1),
                CellPos::new(1, 2),
                CellPos::new(2, 1),
                CellPos::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(1, 1, true);
        assert_eq!(grid.to_string(), "###\n###\n###\n");
        grid.set(1, 1, false);
        assert_eq!(grid.to_string(), "###\n#.#\n###\n");
    }
}
