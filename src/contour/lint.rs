//! Design checks for panels that cannot be built.
//!
//! Runs after tracing to find floating pieces of material, alignment holes
//! blocked by material, and cells joined only at a corner point.

use std::fmt;

use crate::grid::{CellPos, Grid};

use super::diagonal::DiagonalMap;
use super::types::TracedLoop;

/// A problem that makes the design unbuildable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignIssue {
    pub category: IssueCategory,
    pub message: String,
    /// Cell the issue is reported at
    pub cell: CellPos,
}

/// Category of design issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Material with no connection to the frame
    Island,
    /// Alignment hole covered by material
    CoveredHole,
    /// Two cells touching only at a corner
    DiagonalPinch,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueCategory::Island => write!(f, "island"),
            IssueCategory::CoveredHole => write!(f, "covered-hole"),
            IssueCategory::DiagonalPinch => write!(f, "diagonal"),
        }
    }
}

impl fmt::Display for DesignIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all design checks.
pub fn check(
    grid: &Grid,
    loops: &[TracedLoop],
    diagonals: &DiagonalMap,
    alignment_holes: &[CellPos],
) -> Vec<DesignIssue> {
    let mut issues = Vec::new();
    check_islands(loops, &mut issues);
    check_alignment_holes(grid, alignment_holes, &mut issues);
    check_diagonals(diagonals, &mut issues);
    for issue in &issues {
        tracing::debug!(category = %issue.category, cell = %issue.cell, "{}", issue.message);
    }
    issues
}

// ── Floating islands ──────────────────────────────────────────────

fn check_islands(loops: &[TracedLoop], issues: &mut Vec<DesignIssue>) {
    for l in loops.iter().filter(|l| l.is_floating()) {
        issues.push(DesignIssue {
            category: IssueCategory::Island,
            message: format!(
                "material at {} is not connected to the frame and would fall out",
                l.anchor
            ),
            cell: l.anchor,
        });
    }
}

// ── Alignment holes ───────────────────────────────────────────────

fn check_alignment_holes(grid: &Grid, holes: &[CellPos], issues: &mut Vec<DesignIssue>) {
    for &hole in holes {
        if grid.get(hole.row, hole.col) == Some(true) {
            issues.push(DesignIssue {
                category: IssueCategory::CoveredHole,
                message: format!("alignment hole at {} is covered", hole),
                cell: hole,
            });
        }
    }
}

// ── Diagonal pinches ──────────────────────────────────────────────

fn check_diagonals(diagonals: &DiagonalMap, issues: &mut Vec<DesignIssue>) {
    for block in diagonals.bridges() {
        issues.push(DesignIssue {
            category: IssueCategory::DiagonalPinch,
            message: format!(
                "cells in the 2x2 block at {} touch only at a corner",
                block
            ),
            cell: block,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::trace;
    use crate::contour::PanelDimensions;

    fn issues(grid: &Grid) -> Vec<DesignIssue> {
        trace(grid, &PanelDimensions::default()).issues
    }

    fn categories(grid: &Grid) -> Vec<IssueCategory> {
        issues(grid).into_iter().map(|i| i.category).collect()
    }

    #[test]
    fn test_clean_design() {
        assert!(issues(&Grid::default()).is_empty());
    }

    #[test]
    fn test_floating_cell() {
        let mut grid = Grid::default();
        grid.set(5, 5, true);
        let found = issues(&grid);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, IssueCategory::Island);
        assert_eq!(found[0].cell, CellPos::new(5, 5));
    }

    #[test]
    fn test_attached_chain_is_fine() {
        let mut grid = Grid::default();
        for row in 1..=5 {
            grid.set(row, 5, true);
        }
        assert!(issues(&grid).is_empty());
    }

    #[test]
    fn test_covered_hole() {
        let mut grid = Grid::default();
        grid.set(14, 14, true);
        assert_eq!(categories(&grid), vec![IssueCategory::CoveredHole]);
    }

    #[test]
    fn test_checkerboard() {
        let mut grid = Grid::default();
        for row in 1..=4 {
            grid.set(row, 5, true);
        }
        grid.set(5, 6, true);
        for row in 6..=14 {
            grid.set(row, 6, true);
        }
        assert_eq!(categories(&grid), vec![IssueCategory::DiagonalPinch]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(IssueCategory::Island.to_string(), "island");
        assert_eq!(IssueCategory::CoveredHole.to_string(), "covered-hole");
        assert_eq!(IssueCategory::DiagonalPinch.to_string(), "diagonal");
    }
}
