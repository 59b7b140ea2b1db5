//! Wall derivation
//!
//! A wall sits between two orthogonally adjacent cells whose states differ.
//! Only walls touching at least one interior cell are kept; the frame itself
//! is drawn separately.

use crate::grid::Grid;

use super::types::Direction;

/// Wall edges of a grid of size S
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    /// `vertical[r][c]`: wall between cells (r+1, c) and (r+1, c+1). S-2 rows, S-1 columns.
    vertical: Vec<Vec<bool>>,
    /// `horizontal[r][c]`: wall between cells (r, c+1) and (r+1, c+1). S-1 rows, S-2 columns.
    horizontal: Vec<Vec<bool>>,
}

impl Walls {
    pub fn derive(grid: &Grid) -> Self {
        let size = grid.size();

        let vertical = (0..size - 2)
            .map(|r| {
                let row = r + 1;
                (0..size - 1)
                    .map(|col| grid.is_filled(row, col) != grid.is_filled(row, col + 1))
                    .collect()
            })
            .collect();

        let horizontal = (0..size - 1)
            .map(|row| {
                (0..size - 2)
                    .map(|c| {
                        let col = c + 1;
                        grid.is_filled(row, col) != grid.is_filled(row + 1, col)
                    })
                    .collect()
            })
            .collect();

        Self {
            vertical,
            horizontal,
        }
    }

    pub fn vertical(&self) -> &[Vec<bool>] {
        &self.vertical
    }

    pub fn horizontal(&self) -> &[Vec<bool>] {
        &self.horizontal
    }

    /// Whether interior cell (row, col) has a wall on side `side`
    pub fn has_edge(&self, row: usize, col: usize, side: Direction) -> bool {
        match side {
            Direction::Top => self.horizontal[row - 1][col - 1],
            Direction::Right => self.vertical[row - 1][col],
            Direction::Bottom => self.horizontal[row][col - 1],
            Direction::Left => self.vertical[row - 1][col - 1],
        }
    }

    /// Total number of wall edges
    pub fn count(&self) -> usize {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .map(|line| line.iter().filter(|&&w| w).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let walls = Walls::derive(&Grid::default());
        assert_eq!(walls.vertical().len(), 14);
        assert_eq!(walls.vertical()[0].len(), 15);
        assert_eq!(walls.horizontal().len(), 15);
        assert_eq!(walls.horizontal()[0].len(), 14);
    }

    #[test]
    fn test_empty_interior_walls_follow_frame() {
        let walls = Walls::derive(&Grid::new(5).unwrap());
        // 3 interior cells per side, 4 sides
        assert_eq!(walls.count(), 12);
        assert!(walls.has_edge(1, 1, Direction::Top));
        assert!(walls.has_edge(1, 1, Direction::Left));
        assert!(!walls.has_edge(1, 1, Direction::Right));
        assert!(!walls.has_edge(1, 1, Direction::Bottom));
        assert!(walls.has_edge(3, 3, Direction::Bottom));
        assert!(walls.has_edge(3, 3, Direction::Right));
    }

    #[test]
    fn test_full_grid_has_no_walls() {
        let mut grid = Grid::new(5).unwrap();
        for p in grid.clone().interior() {
            grid.set(p.row, p.col, true);
        }
        assert_eq!(Walls::derive(&grid).count(), 0);
    }

    #[test]
    fn test_single_cell_has_four_walls() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(2, 2, true);
        let walls = Walls::derive(&grid);
        assert_eq!(walls.count(), 12 + 4);
        assert!(walls.has_edge(2, 1, Direction::Right));
        assert!(walls.has_edge(1, 2, Direction::Bottom));
        assert!(walls.has_edge(2, 3, Direction::Left));
        assert!(walls.has_edge(3, 2, Direction::Top));
    }
}
