//! Contour extraction for panel grids
//!
//! This module takes a grid and computes its wall edges, diagonal pinch
//! points and the closed, filleted boundary loops that become cut lines,
//! then checks the result for designs that cannot be built.

pub mod config;
pub mod diagonal;
pub mod lint;
pub mod tracer;
pub mod types;
pub mod walls;

pub use config::{ConfigError, FilletRadii, PanelDimensions, PanelMetrics};
pub use diagonal::DiagonalMap;
pub use lint::{DesignIssue, IssueCategory};
pub use tracer::ContourTracer;
pub use types::*;
pub use walls::Walls;

use crate::grid::Grid;

/// Everything derived from one grid
#[derive(Debug, Clone)]
pub struct ContourSet {
    pub metrics: PanelMetrics,
    pub walls: Walls,
    pub diagonals: DiagonalMap,
    pub loops: Vec<TracedLoop>,
    pub issues: Vec<DesignIssue>,
}

impl ContourSet {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Loops that never reach the ring of cells next to the frame
    pub fn interior_loops(&self) -> impl Iterator<Item = &TracedLoop> {
        self.loops.iter().filter(|l| l.is_island)
    }
}

/// Derive walls, trace every loop and run the design checks
pub fn trace(grid: &Grid, dimensions: &PanelDimensions) -> ContourSet {
    let metrics = dimensions.metrics(grid.size());
    let walls = Walls::derive(grid);
    let diagonals = DiagonalMap::detect(grid);

    let loops =
        ContourTracer::new(grid, &walls, &diagonals, metrics.cell_size, metrics.fillets).trace_all();
    let issues = lint::check(grid, &loops, &diagonals, &metrics.alignment_holes);

    tracing::debug!(
        size = grid.size(),
        walls = walls.count(),
        loops = loops.len(),
        issues = issues.len(),
        "traced grid"
    );

    ContourSet {
        metrics,
        walls,
        diagonals,
        loops,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_empty_interior() {
        let set = trace(&Grid::default(), &PanelDimensions::default());
        assert_eq!(set.loops.len(), 1);
        assert_eq!(set.loops[0].kind(), LoopKind::Hole);
        assert_eq!(set.interior_loops().count(), 0);
        assert!(!set.has_issues());
    }

    #[test]
    fn test_trace_uses_dimension_fillets() {
        let dims = PanelDimensions::default();
        let set = trace(&Grid::default(), &dims);
        let expected = dims.metrics(16).fillets.interior;
        assert!(set.loops[0].arc_radii().all(|r| r == expected));
    }
}
