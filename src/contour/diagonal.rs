//! Diagonal-adjacency detection
//!
//! A 2x2 block in checkerboard pattern has two same-state cells touching
//! only at the shared corner point. The cut there would pinch to zero
//! width, so such blocks are reported and their corner gets a wider fillet.

use crate::grid::{CellPos, Grid};

use super::types::Direction;

/// Checkerboard blocks of a grid, keyed by the block's top-left cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalMap {
    size: usize,
    bridges: Vec<bool>,
}

impl DiagonalMap {
    /// Scan every 2x2 block lying fully inside the interior
    pub fn detect(grid: &Grid) -> Self {
        let size = grid.size();
        let mut bridges = vec![false; size * size];

        for row in 1..size.saturating_sub(2) {
            for col in 1..size - 2 {
                let top_left = grid.is_filled(row, col);
                let top_right = grid.is_filled(row, col + 1);
                let bottom_left = grid.is_filled(row + 1, col);
                let bottom_right = grid.is_filled(row + 1, col + 1);
                if top_left == bottom_right && top_right == bottom_left && top_left != top_right {
                    bridges[row * size + col] = true;
                }
            }
        }

        Self { size, bridges }
    }

    /// Whether the block with top-left cell (row, col) is a checkerboard
    pub fn is_bridge(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.bridges[row * self.size + col]
    }

    /// Whether the corner of cell (row, col) between side `dir - 1` and side
    /// `dir` is a pinch point
    pub fn corner_is_bridge(&self, row: usize, col: usize, dir: Direction) -> bool {
        match dir {
            Direction::Top => self.is_bridge(row - 1, col - 1),
            Direction::Right => self.is_bridge(row - 1, col),
            Direction::Bottom => self.is_bridge(row, col),
            Direction::Left => self.is_bridge(row, col - 1),
        }
    }

    /// Top-left cells of all checkerboard blocks, row-major
    pub fn bridges(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.bridges
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| CellPos::new(i / self.size, i % self.size))
    }

    pub fn is_empty(&self) -> bool {
        !self.bridges.iter().any(|&b| b)
    }
}
